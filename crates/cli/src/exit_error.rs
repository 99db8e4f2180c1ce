// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error type that carries a process exit code.
//!
//! Commands return `ExitError` instead of calling `std::process::exit()`
//! directly, so `main()` owns process termination.

use std::fmt;

use batchinfer_engine::{GuardError, LaunchError, PreflightError, TeardownError};

/// Control plane unreachable.
pub const CONNECTIVITY: i32 = 1;
/// Missing input, bad configuration or bad settings.
pub const PRECONDITION: i32 = 2;
/// Render, apply or delete failed.
pub const OPERATION: i32 = 3;
/// Interrupted (128 + SIGINT).
pub const CANCELLED: i32 = 130;

#[derive(Debug)]
pub struct ExitError {
    pub code: i32,
    pub message: String,
}

impl ExitError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for ExitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ExitError {}

fn guard_code(err: &GuardError, timed_out: i32) -> i32 {
    match err {
        GuardError::Cancelled { .. } => CANCELLED,
        GuardError::TimedOut { .. } => timed_out,
    }
}

impl From<PreflightError> for ExitError {
    fn from(err: PreflightError) -> Self {
        let code = match &err {
            PreflightError::Unreachable(_) => CONNECTIVITY,
            PreflightError::Guard(g) => guard_code(g, CONNECTIVITY),
        };
        Self::new(code, err.to_string())
    }
}

impl From<LaunchError> for ExitError {
    fn from(err: LaunchError) -> Self {
        let code = match &err {
            LaunchError::Precondition(_) | LaunchError::Validation(_) => PRECONDITION,
            LaunchError::Render(_) | LaunchError::Apply { .. } => OPERATION,
            LaunchError::Interrupted { source, .. } => guard_code(source, OPERATION),
        };
        let mut message = err.to_string();
        if let Some((job_name, applied)) = err.partial() {
            if !applied.is_empty() {
                message.push_str(&format!(
                    "\nalready applied: {}\nclean up with: batchinfer delete {job_name}",
                    applied.join(", ")
                ));
            }
        }
        Self::new(code, message)
    }
}

impl From<TeardownError> for ExitError {
    fn from(err: TeardownError) -> Self {
        let code = match &err {
            TeardownError::Precondition(_) => PRECONDITION,
            TeardownError::Partial { .. } => OPERATION,
            TeardownError::Cancelled(_) => CANCELLED,
        };
        Self::new(code, err.to_string())
    }
}

#[cfg(test)]
#[path = "exit_error_tests.rs"]
mod tests;
