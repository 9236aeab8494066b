// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Phase descriptors and the fixed run sequence

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The phase names, in execution order
pub const PHASE_NAMES: [&str; 5] = [
    "infrastructure_provisioning",
    "workload_setup",
    "mongodb_setup",
    "test_control",
    "infrastructure_teardown",
];

/// Output map file the provisioning phase leaves behind
const PROVISION_OUTPUTS_FILE: &str = "infrastructure.out";

/// One step of the provisioning-to-teardown sequence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseDef {
    /// Phase name; also names the default executable and the derived log files
    pub name: String,
    /// Explicit executable, overriding `<bin_dir>/<name>`
    #[serde(default)]
    pub program: Option<PathBuf>,
    /// Arguments passed to the executable
    #[serde(default)]
    pub args: Vec<String>,
    /// Key-value output file the phase produces for later phases
    #[serde(default)]
    pub outputs: Option<String>,
}

impl PhaseDef {
    /// Create a phase with no arguments, backed by `<bin_dir>/<name>`
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            program: None,
            args: Vec::new(),
            outputs: None,
        }
    }

    /// Executable to invoke, resolved against the phase binary directory
    pub fn executable(&self, bin_dir: &Path) -> PathBuf {
        self.program
            .clone()
            .unwrap_or_else(|| bin_dir.join(&self.name))
    }

    /// Combined stdout/stderr capture file for this phase
    pub fn log_file(&self) -> String {
        format!("o.{}", self.name)
    }

    /// Wall-clock timing file for this phase
    pub fn time_file(&self) -> String {
        format!("time.{}", self.name)
    }
}

/// Build the fixed phase sequence.
///
/// The order is fixed at authoring time; the runner never reorders it.
/// `debug` forwards a `--debug` argument to every phase executable.
pub fn default_sequence(debug: bool) -> Vec<PhaseDef> {
    PHASE_NAMES
        .iter()
        .map(|name| {
            let mut phase = PhaseDef::new(*name);
            if *name == "infrastructure_provisioning" {
                phase.outputs = Some(PROVISION_OUTPUTS_FILE.to_string());
            }
            if debug {
                phase.args.push("--debug".to_string());
            }
            phase
        })
        .collect()
}

#[cfg(test)]
#[path = "phase_tests.rs"]
mod tests;
