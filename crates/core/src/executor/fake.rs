// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake executor implementation for testing

use super::{ExecuteError, NotebookExecutor, Parameters};
use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Recorded call to the executor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecuteCall {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub params: Parameters,
    pub cwd: PathBuf,
}

#[derive(Default)]
struct FakeState {
    calls: Vec<ExecuteCall>,
    // Configurable failure modes
    failing_stems: HashSet<String>,
    launch_fails: bool,
}

/// Fake executor with call recording for testing
#[derive(Clone, Default)]
pub struct FakeExecutor {
    state: Arc<Mutex<FakeState>>,
}

impl FakeExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ExecuteCall> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .clone()
    }

    /// Sources of all recorded calls, in invocation order
    pub fn executed_sources(&self) -> Vec<PathBuf> {
        self.calls().into_iter().map(|c| c.source).collect()
    }

    /// Configure execution to fail for notebooks with the given file stem
    pub fn fail_on(&self, stem: impl Into<String>) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .failing_stems
            .insert(stem.into());
    }

    /// Configure every call to fail as a launch error (never interceptable)
    pub fn set_launch_fails(&self, fails: bool) {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .launch_fails = fails;
    }
}

#[async_trait]
impl NotebookExecutor for FakeExecutor {
    async fn execute(
        &self,
        source: &Path,
        dest: &Path,
        params: &Parameters,
        cwd: &Path,
    ) -> Result<(), ExecuteError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.calls.push(ExecuteCall {
            source: source.to_path_buf(),
            dest: dest.to_path_buf(),
            params: params.clone(),
            cwd: cwd.to_path_buf(),
        });

        if state.launch_fails {
            return Err(ExecuteError::Launch {
                program: "fake".to_string(),
                source: std::io::Error::new(std::io::ErrorKind::NotFound, "fake launch failure"),
            });
        }

        let stem = source
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        if state.failing_stems.contains(&stem) {
            return Err(ExecuteError::Execution {
                notebook: source.to_path_buf(),
                reason: "scripted failure".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
