// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parsing for the provisioning collaborator's key-value output map.
//!
//! The provisioning phase writes a flat file of `key: value` (or
//! `key=value`) lines naming the addresses and counts of the machines it
//! created. Downstream phases read it themselves; the runner only parses
//! it to surface what was provisioned to the operator.

use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Errors reading the output map
#[derive(Debug, Error)]
pub enum OutputsError {
    #[error("cannot read outputs file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed output line {line_no}: {line:?}")]
    Malformed { line_no: usize, line: String },
}

/// Key-value map the provisioning collaborator leaves behind
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProvisionOutputs {
    entries: HashMap<String, String>,
}

impl ProvisionOutputs {
    /// Load and parse an output map file
    pub fn load(path: &Path) -> Result<Self, OutputsError> {
        Self::parse(&std::fs::read_to_string(path)?)
    }

    /// Parse output map content.
    ///
    /// Blank lines and `#` comments are skipped. A line with no separator
    /// (or an empty key) is an error: a half-written map means the
    /// provisioning run itself went wrong.
    pub fn parse(content: &str) -> Result<Self, OutputsError> {
        let mut entries = HashMap::new();
        for (idx, raw) in content.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            // Split at the first separator so values may contain colons
            // (URLs, host:port pairs).
            let sep = line.find([':', '=']).ok_or_else(|| OutputsError::Malformed {
                line_no: idx + 1,
                line: raw.to_string(),
            })?;
            let key = line[..sep].trim();
            let value = line[sep + 1..].trim();
            if key.is_empty() {
                return Err(OutputsError::Malformed {
                    line_no: idx + 1,
                    line: raw.to_string(),
                });
            }
            entries.insert(key.to_string(), value.to_string());
        }
        Ok(Self { entries })
    }

    /// Look up a single output value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of entries in the map
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose key starts with `prefix`, sorted by key.
    ///
    /// Host-address groups come out of provisioning as numbered keys
    /// (`public_ip_0`, `public_ip_1`, ...).
    pub fn with_prefix(&self, prefix: &str) -> Vec<(&str, &str)> {
        let mut matches: Vec<(&str, &str)> = self
            .entries
            .iter()
            .filter(|(k, _)| k.starts_with(prefix))
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        matches.sort_by_key(|(k, _)| *k);
        matches
    }
}

#[cfg(test)]
#[path = "outputs_tests.rs"]
mod tests;
