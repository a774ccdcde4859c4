// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runner configuration and environment validation

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable carrying the optional per-notebook transition timeout.
pub const TRANSITION_TIMEOUT_ENV: &str = "E2E_TRANSITION_TIMEOUT";

/// Errors raised before any notebook runs
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("notebook directory not found: {0}")]
    NotebookRootMissing(PathBuf),
    #[error("E2E_TRANSITION_TIMEOUT must be an integer, got {0:?}")]
    InvalidTimeout(String),
}

/// Directory layout and run policy for a batch of notebooks.
///
/// All paths derive from a single root: notebooks are read from
/// `<root>/notebooks`, executed copies and per-notebook artifact directories
/// land under `<root>/artifacts/notebooks`.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Directory containing the `*.ipynb` inputs (read-only)
    pub notebook_root: PathBuf,
    /// Root artifact directory, created if absent
    pub artifact_root: PathBuf,
    /// Directory for executed copies and artifact subdirectories
    pub result_root: PathBuf,
    /// Continue past per-notebook execution failures
    pub skip_failed: bool,
    /// Forwarded to every notebook as the `transition_timeout` parameter;
    /// the runner itself enforces no wall-clock limit
    pub transition_timeout: Option<i64>,
}

impl RunnerConfig {
    pub fn new(root: &Path) -> Self {
        let artifact_root = root.join("artifacts");
        Self {
            notebook_root: root.join("notebooks"),
            result_root: artifact_root.join("notebooks"),
            artifact_root,
            skip_failed: false,
            transition_timeout: None,
        }
    }

    pub fn with_skip_failed(mut self, skip_failed: bool) -> Self {
        self.skip_failed = skip_failed;
        self
    }

    pub fn with_transition_timeout(mut self, timeout: Option<i64>) -> Self {
        self.transition_timeout = timeout;
        self
    }

    /// Check that the notebook root exists. Runs before discovery.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.notebook_root.is_dir() {
            return Err(ConfigError::NotebookRootMissing(self.notebook_root.clone()));
        }
        Ok(())
    }

    /// Read the timeout from [`TRANSITION_TIMEOUT_ENV`], failing fast on a
    /// malformed value.
    pub fn transition_timeout_from_env() -> Result<Option<i64>, ConfigError> {
        parse_transition_timeout(std::env::var(TRANSITION_TIMEOUT_ENV).ok().as_deref())
    }
}

/// Parse an optional timeout value. An unset or empty value means no timeout;
/// anything else must be an integer.
pub fn parse_transition_timeout(raw: Option<&str>) -> Result<Option<i64>, ConfigError> {
    match raw {
        None => Ok(None),
        Some("") => Ok(None),
        Some(value) => value
            .parse::<i64>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidTimeout(value.to_string())),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
