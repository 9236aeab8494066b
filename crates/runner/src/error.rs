// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the phase runner

use rig_core::OutputsError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while running the phase sequence
#[derive(Debug, Error)]
pub enum RunnerError {
    /// A phase's process exited non-zero. The only error the sequencing
    /// model itself recognizes; everything after the failing phase is
    /// never started.
    #[error("phase {phase} failed with status {status}")]
    PhaseFailed { phase: String, status: i32 },
    #[error("cannot spawn phase {phase} ({}): {source}", program.display())]
    Spawn {
        phase: String,
        program: PathBuf,
        source: std::io::Error,
    },
    #[error("log capture failed for phase {phase}: {source}")]
    Capture {
        phase: String,
        source: std::io::Error,
    },
    #[error("cannot write timing file {}: {source}", path.display())]
    Timing {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("cannot record run result: {0}")]
    Record(#[from] std::io::Error),
    #[error("cannot encode run result: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("bad outputs file after phase {phase}: {source}")]
    Outputs {
        phase: String,
        source: OutputsError,
    },
}
