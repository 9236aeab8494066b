// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! rig - benchmark cluster orchestration CLI
//!
//! Runs the fixed phase sequence (provision, set up, test, tear down)
//! and exits with the status of the first failing phase.

use anyhow::{Context, Result};
use clap::Parser;
use rig_core::default_sequence;
use rig_runner::{Runner, RunnerError};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "rig",
    version,
    about = "rig - benchmark cluster orchestration"
)]
struct Cli {
    /// Pass --debug to every phase executable
    #[arg(long)]
    debug: bool,

    /// Directory holding the phase executables
    #[arg(long, default_value = "bin")]
    bin_dir: PathBuf,

    /// Directory for phase logs, timing files, and results
    #[arg(long, default_value = ".")]
    work_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging();

    // Children run with work_dir as cwd; resolve both directories up
    // front so relative paths mean "relative to where rig was invoked".
    let cwd = std::env::current_dir().context("cannot determine working directory")?;
    let bin_dir = absolutize(&cwd, cli.bin_dir);
    let work_dir = absolutize(&cwd, cli.work_dir);
    std::fs::create_dir_all(&work_dir)
        .with_context(|| format!("cannot create work dir {}", work_dir.display()))?;

    let phases = default_sequence(cli.debug);
    tracing::debug!(
        bin_dir = %bin_dir.display(),
        work_dir = %work_dir.display(),
        phases = phases.len(),
        "starting run"
    );
    let runner = Runner::new(bin_dir, work_dir);

    match runner.run_sequence(&phases).await {
        Ok(report) => {
            println!("All {} phases passed", report.results.len());
            Ok(())
        }
        Err(RunnerError::PhaseFailed { phase, status }) => {
            eprintln!("Phase {phase} failed with status {status}");
            std::process::exit(status);
        }
        Err(e) => Err(e.into()),
    }
}

fn absolutize(cwd: &std::path::Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}

fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    // Logs go to stderr; stdout carries the tee'd phase output.
    let filter = EnvFilter::try_from_env("RIG_LOG").unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
