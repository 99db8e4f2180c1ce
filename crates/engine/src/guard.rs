// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Deadline and cancellation wrapper for control-plane calls.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tokio_util::sync::CancellationToken;

/// Why a guarded call did not complete
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    #[error("{operation} cancelled")]
    Cancelled { operation: String },
    #[error("{operation} timed out after {after:?}")]
    TimedOut { operation: String, after: Duration },
}

/// Bounds each call by a deadline and a shared cancellation token.
#[derive(Clone, Debug)]
pub struct CallGuard {
    timeout: Duration,
    cancel: CancellationToken,
}

impl CallGuard {
    pub fn new(timeout: Duration, cancel: CancellationToken) -> Self {
        Self { timeout, cancel }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Run `fut`, giving up on cancellation or when the deadline passes.
    ///
    /// Cancellation wins when both are ready. The future is dropped on either.
    pub async fn run<F, T>(&self, operation: &str, fut: F) -> Result<T, GuardError>
    where
        F: Future<Output = T>,
    {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => {
                Err(GuardError::Cancelled {
                    operation: operation.to_string(),
                })
            }
            res = tokio::time::timeout(self.timeout, fut) => {
                res.map_err(|_| GuardError::TimedOut {
                    operation: operation.to_string(),
                    after: self.timeout,
                })
            }
        }
    }
}

#[cfg(test)]
#[path = "guard_tests.rs"]
mod tests;
