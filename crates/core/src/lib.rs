// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! nbrun-core: Core library for the nbrun notebook batch runner
//!
//! This crate provides:
//! - Runner configuration and environment validation
//! - The executor adapter trait with a papermill implementation and a
//!   recording fake for tests
//! - The sequential batch runner itself

pub mod config;
pub mod executor;
pub mod runner;

// Re-exports
pub use config::{ConfigError, RunnerConfig};
pub use executor::{ExecuteError, FakeExecutor, NotebookExecutor, PapermillExecutor, Parameters};
pub use runner::{RunReport, Runner, RunnerError};
