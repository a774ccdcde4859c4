// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Real papermill executor implementation

use super::{ExecuteError, NotebookExecutor, Parameters};
use async_trait::async_trait;
use std::ffi::OsString;
use std::path::Path;
use tokio::process::Command;

/// Environment variable overriding the papermill program (test seam).
pub const PAPERMILL_ENV: &str = "NBRUN_PAPERMILL";

const STDERR_TAIL_LINES: usize = 10;

/// Executes notebooks by shelling out to the papermill CLI
#[derive(Clone)]
pub struct PapermillExecutor {
    program: String,
}

impl PapermillExecutor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Use `papermill` from PATH unless [`PAPERMILL_ENV`] overrides it.
    pub fn from_env() -> Self {
        match std::env::var(PAPERMILL_ENV) {
            Ok(program) if !program.is_empty() => Self::new(program),
            _ => Self::default(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for PapermillExecutor {
    fn default() -> Self {
        Self::new("papermill")
    }
}

/// Build the papermill argument list:
/// `<src> <dest> --cwd <dir> -p key value ...`
fn build_args(source: &Path, dest: &Path, params: &Parameters, cwd: &Path) -> Vec<OsString> {
    let mut args: Vec<OsString> = vec![
        source.into(),
        dest.into(),
        "--cwd".into(),
        cwd.into(),
    ];
    for (key, value) in params {
        args.push("-p".into());
        args.push(key.into());
        args.push(render_param(value).into());
    }
    args
}

/// Render a parameter value the way papermill expects it on the command line:
/// strings bare, everything else as its JSON form.
fn render_param(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn stderr_tail(stderr: &[u8]) -> String {
    let text = String::from_utf8_lossy(stderr);
    let lines: Vec<&str> = text.lines().collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join("\n")
}

#[async_trait]
impl NotebookExecutor for PapermillExecutor {
    async fn execute(
        &self,
        source: &Path,
        dest: &Path,
        params: &Parameters,
        cwd: &Path,
    ) -> Result<(), ExecuteError> {
        let args = build_args(source, dest, params, cwd);
        tracing::debug!(program = %self.program, ?source, ?dest, "invoking papermill");

        let output = Command::new(&self.program)
            .args(&args)
            .output()
            .await
            .map_err(|err| match err.kind() {
                std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
                    ExecuteError::Launch {
                        program: self.program.clone(),
                        source: err,
                    }
                }
                _ => ExecuteError::Io(err),
            })?;

        if !output.status.success() {
            return Err(ExecuteError::Execution {
                notebook: source.to_path_buf(),
                reason: stderr_tail(&output.stderr),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "papermill_tests.rs"]
mod tests;
