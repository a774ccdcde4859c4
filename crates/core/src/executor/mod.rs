// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Executor adapter trait for the external notebook engine

pub mod fake;
pub mod papermill;

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub use fake::FakeExecutor;
pub use papermill::PapermillExecutor;

/// Parameter map injected into a notebook. Ordered so the generated command
/// line is deterministic.
pub type Parameters = BTreeMap<String, serde_json::Value>;

/// Errors from executing a notebook
#[derive(Debug, Error)]
pub enum ExecuteError {
    /// The engine ran the notebook and the notebook failed. This is the only
    /// variant continue-mode may intercept.
    #[error("notebook execution failed: {notebook}: {reason}")]
    Execution { notebook: PathBuf, reason: String },
    /// The engine binary itself could not be started.
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl ExecuteError {
    pub fn is_execution(&self) -> bool {
        matches!(self, ExecuteError::Execution { .. })
    }
}

/// Adapter for the external notebook-execution engine.
///
/// `execute` writes an executed copy of `source` to `dest`, running with
/// `cwd` as the working directory and `params` injected into the notebook.
#[async_trait]
pub trait NotebookExecutor: Clone + Send + Sync + 'static {
    async fn execute(
        &self,
        source: &Path,
        dest: &Path,
        params: &Parameters,
        cwd: &Path,
    ) -> Result<(), ExecuteError>;
}
