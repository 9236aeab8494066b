// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Immutable per-phase run records

use serde::{Deserialize, Serialize};

/// Name of the combined results log, appended to across runs
pub const RESULTS_FILE: &str = "results.log";

/// Outcome of one phase invocation
///
/// Created when the phase's process exits and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// Phase name
    pub phase: String,
    /// Exit status of the phase's own process
    pub status: i32,
    /// Wall-clock duration of the invocation
    pub duration_secs: f64,
}

impl RunResult {
    /// Whether the phase exited cleanly
    pub fn passed(&self) -> bool {
        self.status == 0
    }

    /// Encode as one line of the combined results log
    pub fn to_json_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
#[path = "result_tests.rs"]
mod tests;
