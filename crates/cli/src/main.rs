// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! nbrun - Execute notebook-based E2E scenarios through papermill

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use nbrun_core::{PapermillExecutor, Runner, RunnerConfig};

#[derive(Parser)]
#[command(name = "nbrun", version, about = "Execute notebook E2E tests")]
struct Cli {
    /// Directory containing the notebooks/ and artifacts/ trees
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Continue executing remaining notebooks even if a notebook fails
    #[arg(long)]
    skip_failed_test: bool,
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    setup_logging();
    let cli = Cli::parse();

    // Fail fast on a malformed timeout before any notebook runs.
    let timeout = RunnerConfig::transition_timeout_from_env()?;
    let config = RunnerConfig::new(&cli.root)
        .with_skip_failed(cli.skip_failed_test)
        .with_transition_timeout(timeout);

    let executor = PapermillExecutor::from_env();
    tracing::debug!(root = %cli.root.display(), program = executor.program(), "starting batch run");

    let runner = Runner::new(config, executor);
    let report = runner.run_all().await?;

    if report.success() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    // Diagnostics go to stderr; stdout is the report surface.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
