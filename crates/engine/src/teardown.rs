// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Teardown orchestration
//!
//! Deletes every resource kind a launch creates, by job name. Kinds are
//! independent, so a failure on one never stops the others; failures are
//! collected and returned together. Cancellation is the exception and aborts
//! the remaining deletions.

use batchinfer_adapters::{ClusterClient, ClusterError, DeleteOutcome, ResourceKind};
use batchinfer_core::{JobName, PreconditionError};
use thiserror::Error;

use crate::guard::{CallGuard, GuardError};

/// Why one kind could not be deleted
#[derive(Debug, Error)]
pub enum DeleteError {
    #[error("{}", .0.diagnostic())]
    Cluster(#[source] ClusterError),
    #[error(transparent)]
    TimedOut(GuardError),
}

/// Per-kind outcomes of a teardown, in deletion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeardownReport {
    pub job_name: JobName,
    pub outcomes: Vec<(ResourceKind, DeleteOutcome)>,
}

#[derive(Debug, Error)]
pub enum TeardownError {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
    #[error("failed to delete {}", describe(.failures))]
    Partial {
        failures: Vec<(ResourceKind, DeleteError)>,
        /// Kinds that were deleted or already absent.
        report: TeardownReport,
    },
    #[error(transparent)]
    Cancelled(GuardError),
}

impl TeardownError {
    /// Kinds whose deletion failed, in deletion order.
    pub fn failed_kinds(&self) -> Vec<ResourceKind> {
        match self {
            TeardownError::Partial { failures, .. } => failures.iter().map(|(k, _)| *k).collect(),
            _ => Vec::new(),
        }
    }

    /// Outcomes of the kinds that did not fail, if teardown ran to the end.
    pub fn report(&self) -> Option<&TeardownReport> {
        match self {
            TeardownError::Partial { report, .. } => Some(report),
            _ => None,
        }
    }
}

fn describe(failures: &[(ResourceKind, DeleteError)]) -> String {
    failures.iter().map(|(kind, err)| format!("{kind}: {err}")).collect::<Vec<_>>().join("; ")
}

pub struct Teardown<C: ClusterClient> {
    client: C,
    guard: CallGuard,
}

impl<C: ClusterClient> Teardown<C> {
    pub fn new(client: C, guard: CallGuard) -> Self {
        Self { client, guard }
    }

    /// Delete the job, service, configmap and secret named `job_name`.
    pub async fn delete(&self, job_name: &JobName) -> Result<TeardownReport, TeardownError> {
        if job_name.is_empty() {
            return Err(PreconditionError::new(["job_name"]).into());
        }

        let mut report = TeardownReport {
            job_name: job_name.clone(),
            outcomes: Vec::new(),
        };
        let mut failures = Vec::new();

        for kind in ResourceKind::ALL {
            let operation = format!("delete {kind}/{job_name}");
            let delete = self.client.delete(kind, job_name.as_str());
            let result = match self.guard.run(&operation, delete).await {
                Ok(result) => result.map_err(DeleteError::Cluster),
                Err(e @ GuardError::TimedOut { .. }) => Err(DeleteError::TimedOut(e)),
                Err(e @ GuardError::Cancelled { .. }) => return Err(TeardownError::Cancelled(e)),
            };
            match result {
                Ok(outcome) => {
                    match outcome {
                        DeleteOutcome::Deleted => tracing::info!(%kind, %job_name, "deleted"),
                        DeleteOutcome::NotFound => {
                            tracing::info!(%kind, %job_name, "already absent")
                        }
                    }
                    report.outcomes.push((kind, outcome));
                }
                Err(err) => {
                    tracing::warn!(%kind, %job_name, error = %err, "delete failed");
                    failures.push((kind, err));
                }
            }
        }

        if failures.is_empty() {
            Ok(report)
        } else {
            Err(TeardownError::Partial { failures, report })
        }
    }
}

#[cfg(test)]
#[path = "teardown_tests.rs"]
mod tests;
