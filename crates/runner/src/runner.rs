// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential phase execution with first-failure abort

use crate::error::RunnerError;
use crate::tee;
use rig_core::{PhaseDef, ProvisionOutputs, RunResult, RESULTS_FILE};
use std::io::Write;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Instant;
use tokio::process::Command;

/// Drives a phase sequence, one child process at a time.
///
/// Exactly one phase is active at any point. The sequence halts at the
/// first phase whose exit status is non-zero; later phases never start.
pub struct Runner {
    bin_dir: PathBuf,
    work_dir: PathBuf,
}

/// Results of the phases that ran, in declared order
#[derive(Debug, Default)]
pub struct RunReport {
    pub results: Vec<RunResult>,
}

impl Runner {
    /// Create a runner resolving phase executables in `bin_dir` and
    /// writing logs, timing, and results under `work_dir`
    pub fn new(bin_dir: impl Into<PathBuf>, work_dir: impl Into<PathBuf>) -> Self {
        Self {
            bin_dir: bin_dir.into(),
            work_dir: work_dir.into(),
        }
    }

    /// Run the phases in order, stopping at the first failure.
    ///
    /// Every phase that runs gets an `o.<phase>` log file, a
    /// `time.<phase>` timing file, and one line appended to the combined
    /// results log, whether it passed or not.
    pub async fn run_sequence(&self, phases: &[PhaseDef]) -> Result<RunReport, RunnerError> {
        let mut report = RunReport::default();
        for phase in phases {
            let result = self.run_phase(phase).await?;
            self.append_result(&result)?;
            let status = result.status;
            let passed = result.passed();
            report.results.push(result);

            if !passed {
                tracing::error!(phase = %phase.name, status, "phase failed, aborting sequence");
                return Err(RunnerError::PhaseFailed {
                    phase: phase.name.clone(),
                    status,
                });
            }

            if let Some(outputs) = &phase.outputs {
                self.read_outputs(phase, outputs)?;
            }
        }
        Ok(report)
    }

    /// Spawn one phase and wait for it, teeing its combined output
    async fn run_phase(&self, phase: &PhaseDef) -> Result<RunResult, RunnerError> {
        let program = phase.executable(&self.bin_dir);
        tracing::info!(phase = %phase.name, program = %program.display(), "starting phase");

        let started = Instant::now();
        let mut child = Command::new(&program)
            .args(&phase.args)
            .current_dir(&self.work_dir)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| RunnerError::Spawn {
                phase: phase.name.clone(),
                program: program.clone(),
                source,
            })?;

        let log_path = self.work_dir.join(phase.log_file());
        if let (Some(out), Some(err)) = (child.stdout.take(), child.stderr.take()) {
            tee::tee(out, err, &log_path)
                .await
                .map_err(|source| RunnerError::Capture {
                    phase: phase.name.clone(),
                    source,
                })?;
        }

        // The child's own exit status, not that of anything its output
        // was piped through.
        let status = child.wait().await.map_err(|source| RunnerError::Capture {
            phase: phase.name.clone(),
            source,
        })?;
        let duration_secs = started.elapsed().as_secs_f64();
        // A signal-terminated child carries no code; surface it as a
        // plain failure.
        let code = status.code().unwrap_or(1);

        self.write_timing(phase, duration_secs)?;
        tracing::info!(phase = %phase.name, status = code, secs = duration_secs, "phase finished");

        Ok(RunResult {
            phase: phase.name.clone(),
            status: code,
            duration_secs,
        })
    }

    /// Overwrite the per-phase timing file with the wall-clock seconds
    fn write_timing(&self, phase: &PhaseDef, secs: f64) -> Result<(), RunnerError> {
        let path = self.work_dir.join(phase.time_file());
        std::fs::write(&path, format!("{secs:.3}\n"))
            .map_err(|source| RunnerError::Timing { path, source })?;
        Ok(())
    }

    /// Append one JSON line to the combined results log
    fn append_result(&self, result: &RunResult) -> Result<(), RunnerError> {
        let line = result.to_json_line()?;
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.work_dir.join(RESULTS_FILE))?;
        writeln!(file, "{line}")?;
        Ok(())
    }

    /// Surface the collaborator output map a phase left behind
    fn read_outputs(&self, phase: &PhaseDef, outputs: &str) -> Result<(), RunnerError> {
        let path = self.work_dir.join(outputs);
        if !path.exists() {
            tracing::warn!(phase = %phase.name, file = outputs, "declared outputs file missing");
            return Ok(());
        }
        let map = ProvisionOutputs::load(&path).map_err(|source| RunnerError::Outputs {
            phase: phase.name.clone(),
            source,
        })?;
        tracing::info!(phase = %phase.name, file = outputs, keys = map.len(), "collaborator outputs loaded");
        for (key, value) in map.with_prefix("public_ip") {
            tracing::info!(phase = %phase.name, key, value, "provisioned host");
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
