// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Stub papermill script: records every invocation to `NBRUN_STUB_LOG`,
/// fails notebooks whose filename contains "fail", and otherwise copies the
/// source to the destination like a real executed run.
const STUB_SCRIPT: &str = r#"#!/bin/sh
if [ -n "$NBRUN_STUB_LOG" ]; then
  printf '%s\n' "$*" >> "$NBRUN_STUB_LOG"
fi
case "$1" in
  *fail*)
    printf 'PapermillExecutionError: scripted failure\n' >&2
    exit 1
    ;;
esac
cp "$1" "$2"
"#;

/// Setup a test root with a notebooks/ directory and a stub papermill binary.
/// Returns a TempDir that will be cleaned up when dropped.
pub fn setup_test_env() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp directory");
    fs::create_dir(temp.path().join("notebooks")).expect("Failed to create notebooks dir");
    write_stub(&temp);
    temp
}

/// Like [`setup_test_env`] but without the notebooks/ directory, for
/// configuration-error tests.
pub fn setup_test_env_without_notebooks() -> TempDir {
    let temp = TempDir::new().expect("Failed to create temp directory");
    write_stub(&temp);
    temp
}

fn write_stub(temp: &TempDir) {
    use std::os::unix::fs::PermissionsExt;

    let bin = temp.path().join("bin");
    fs::create_dir_all(&bin).expect("Failed to create bin dir");
    let stub = bin.join("papermill-stub");
    fs::write(&stub, STUB_SCRIPT).expect("Failed to write stub");
    fs::set_permissions(&stub, fs::Permissions::from_mode(0o755))
        .expect("Failed to mark stub executable");
}

pub fn stub_path(temp: &TempDir) -> PathBuf {
    temp.path().join("bin/papermill-stub")
}

pub fn stub_log_path(temp: &TempDir) -> PathBuf {
    temp.path().join("stub.log")
}

/// Create an (empty) notebook file under notebooks/.
pub fn write_notebook(temp: &TempDir, name: &str) -> PathBuf {
    let path = temp.path().join("notebooks").join(format!("{name}.ipynb"));
    fs::write(&path, "{}").expect("Failed to write notebook");
    path
}

/// Invocations recorded by the stub, one argv line per call, in order.
/// Empty if the stub was never invoked.
pub fn stub_calls(temp: &TempDir) -> Vec<String> {
    match fs::read_to_string(stub_log_path(temp)) {
        Ok(content) => content.lines().map(str::to_string).collect(),
        Err(_) => Vec::new(),
    }
}

/// Build an `nbrun` command wired to the test root and the stub executor,
/// with a clean timeout environment.
pub fn nbrun(temp: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("nbrun").expect("Failed to find nbrun binary");
    cmd.arg("--root").arg(temp.path());
    cmd.env_remove("E2E_TRANSITION_TIMEOUT");
    cmd.env("NBRUN_PAPERMILL", stub_path(temp));
    cmd.env("NBRUN_STUB_LOG", stub_log_path(temp));
    cmd
}
