// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Control-plane client abstraction.
//!
//! # Module layout
//!
//! - [`kubectl`]: shells out to the `kubectl` CLI
//! - [`kube_api`]: talks to the API server directly via `kube-rs`
//!
//! Neither implementation retries; callers own deadlines and cancellation.

mod kube_api;
mod kubectl;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(coverage_nightly, coverage(off))]
mod fake;

use async_trait::async_trait;
use thiserror::Error;

pub use kube_api::KubeApiClient;
pub use kubectl::KubectlClient;

#[cfg(any(test, feature = "test-support"))]
pub use fake::{ClusterCall, FakeClusterClient};

/// Errors from control-plane operations
#[derive(Debug, Error)]
pub enum ClusterError {
    #[error("cannot run `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{command}` failed: {stderr}")]
    CommandFailed { command: String, stderr: String },
    #[error("invalid manifest: {0}")]
    InvalidManifest(String),
    #[error("kubernetes API error: {0}")]
    Api(#[from] kube::Error),
}

impl ClusterError {
    /// Human-readable diagnostic from the underlying client.
    pub fn diagnostic(&self) -> String {
        match self {
            ClusterError::CommandFailed { stderr, .. } => stderr.trim().to_string(),
            other => other.to_string(),
        }
    }
}

/// Resource kinds a launch creates, in teardown order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Job,
    Service,
    ConfigMap,
    Secret,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 4] =
        [ResourceKind::Job, ResourceKind::Service, ResourceKind::ConfigMap, ResourceKind::Secret];

    /// Resource name as accepted by `kubectl delete`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Job => "job",
            ResourceKind::Service => "service",
            ResourceKind::ConfigMap => "configmap",
            ResourceKind::Secret => "secret",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a delete that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    /// The resource was already absent.
    NotFound,
}

/// Client for the cluster control plane
#[async_trait]
pub trait ClusterClient: Clone + Send + Sync + 'static {
    /// Check that the control plane is reachable.
    async fn probe(&self) -> Result<(), ClusterError>;

    /// Submit one rendered manifest (create or update).
    async fn apply(&self, manifest: &str) -> Result<(), ClusterError>;

    /// Delete one resource by kind and name.
    async fn delete(&self, kind: ResourceKind, name: &str) -> Result<DeleteOutcome, ClusterError>;
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
