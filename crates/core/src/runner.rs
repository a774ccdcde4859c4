// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential batch runner over the discovered notebooks

use crate::config::{ConfigError, RunnerConfig};
use crate::executor::{ExecuteError, NotebookExecutor, Parameters};
use serde::Serialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Notebook file extension expected under the notebook root.
pub const NOTEBOOK_EXT: &str = "ipynb";

#[derive(Debug, Error)]
pub enum RunnerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Execute(#[from] ExecuteError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Aggregate outcome of a completed run. Only produced when the run reached
/// the end of the notebook list; an aborted run surfaces as [`RunnerError`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunReport {
    /// Number of notebooks discovered
    pub total: usize,
    /// Failed notebooks in encounter order
    pub failures: Vec<PathBuf>,
}

impl RunReport {
    pub fn success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs every notebook under the configured root through the executor,
/// one at a time, in sorted order.
pub struct Runner<E: NotebookExecutor> {
    config: RunnerConfig,
    executor: E,
}

impl<E: NotebookExecutor> Runner<E> {
    pub fn new(config: RunnerConfig, executor: E) -> Self {
        Self { config, executor }
    }

    /// List the notebooks directly under the notebook root, sorted
    /// lexicographically by path. Empty is not an error.
    pub fn discover(&self) -> Result<Vec<PathBuf>, RunnerError> {
        let mut notebooks = Vec::new();
        for entry in std::fs::read_dir(&self.config.notebook_root)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|e| e == NOTEBOOK_EXT) {
                notebooks.push(path);
            }
        }
        notebooks.sort();
        Ok(notebooks)
    }

    /// Execute a single notebook: derive its result path and artifact
    /// directory, build the parameter map, and invoke the executor.
    pub async fn run_one(&self, notebook: &Path) -> Result<(), RunnerError> {
        let stem = notebook
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let result_notebook = self
            .config
            .result_root
            .join(format!("{stem}-result.{NOTEBOOK_EXT}"));
        let artifact_dir = self.config.result_root.join(&stem);
        std::fs::create_dir_all(&artifact_dir)?;

        let notebook_dir = notebook.parent().unwrap_or_else(|| Path::new("."));

        let mut params = Parameters::new();
        params.insert(
            "default_result_path".to_string(),
            serde_json::Value::String(artifact_dir.display().to_string()),
        );
        if let Some(timeout) = self.config.transition_timeout {
            params.insert("transition_timeout".to_string(), serde_json::json!(timeout));
        }

        println!(
            "Running notebook: {} -> {}",
            notebook.display(),
            result_notebook.display()
        );
        tracing::info!(notebook = %notebook.display(), "executing notebook");

        self.executor
            .execute(notebook, &result_notebook, &params, notebook_dir)
            .await?;
        Ok(())
    }

    /// Run every discovered notebook in order.
    ///
    /// A structured execution failure is recorded and, when `skip_failed` is
    /// set, skipped; otherwise it aborts the run immediately. Any other error
    /// aborts unconditionally.
    pub async fn run_all(&self) -> Result<RunReport, RunnerError> {
        self.config.validate()?;
        std::fs::create_dir_all(&self.config.artifact_root)?;
        std::fs::create_dir_all(&self.config.result_root)?;

        let notebooks = self.discover()?;
        if notebooks.is_empty() {
            println!(
                "No notebooks to execute. Add notebooks under {}.",
                self.config.notebook_root.display()
            );
            return Ok(RunReport::default());
        }

        let mut failures: Vec<PathBuf> = Vec::new();

        for notebook in &notebooks {
            match self.run_one(notebook).await {
                Ok(()) => {}
                Err(RunnerError::Execute(err)) if err.is_execution() => {
                    failures.push(notebook.clone());
                    if !self.config.skip_failed {
                        // Abort path: the failure list is discarded and the
                        // execution error propagates as-is.
                        return Err(err.into());
                    }
                    println!(
                        "Notebook failed but continuing: {} (reason: {})",
                        notebook.display(),
                        err
                    );
                }
                Err(err) => return Err(err),
            }
        }

        if !failures.is_empty() {
            println!("Failed notebooks:");
            for failed in &failures {
                println!("  - {}", failed.display());
            }
        }

        Ok(RunReport {
            total: notebooks.len(),
            failures,
        })
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
