// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! rig-runner: Sequential phase execution
//!
//! Drives the fixed provisioning-to-teardown sequence, one external
//! process at a time, capturing logs and timing per phase and aborting
//! on the first non-zero exit status.

pub mod error;
pub mod runner;
pub mod tee;

pub use error::RunnerError;
pub use runner::{RunReport, Runner};
