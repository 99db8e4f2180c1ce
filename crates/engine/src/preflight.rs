// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Control-plane connectivity check run before any command does real work.

use batchinfer_adapters::{ClusterClient, ClusterError};
use thiserror::Error;

use crate::guard::{CallGuard, GuardError};

#[derive(Debug, Error)]
pub enum PreflightError {
    #[error("failed to connect to Kubernetes:\n{}", .0.diagnostic())]
    Unreachable(#[source] ClusterError),
    #[error(transparent)]
    Guard(#[from] GuardError),
}

/// Probe the control plane once.
pub async fn preflight<C: ClusterClient>(
    client: &C,
    guard: &CallGuard,
) -> Result<(), PreflightError> {
    guard
        .run("connectivity probe", client.probe())
        .await?
        .map_err(PreflightError::Unreachable)?;
    tracing::info!("kubernetes is connected");
    Ok(())
}

#[cfg(test)]
#[path = "preflight_tests.rs"]
mod tests;
