// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! rig-core: Core types for the rig benchmark orchestrator
//!
//! This crate provides:
//! - Phase descriptors and the fixed provisioning-to-teardown sequence
//! - Immutable per-phase run records
//! - Parsing for the provisioning collaborator's key-value output map

pub mod outputs;
pub mod phase;
pub mod result;

// Re-exports
pub use outputs::{OutputsError, ProvisionOutputs};
pub use phase::{default_sequence, PhaseDef, PHASE_NAMES};
pub use result::{RunResult, RESULTS_FILE};
