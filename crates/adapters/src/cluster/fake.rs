// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recording control-plane client for tests.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{ClusterClient, ClusterError, DeleteOutcome, ResourceKind};

/// Recorded control-plane call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterCall {
    Probe,
    Apply { manifest: String },
    Delete { kind: ResourceKind, name: String },
}

#[derive(Default)]
struct FakeClusterState {
    calls: Vec<ClusterCall>,
    probe_error: Option<String>,
    /// Zero-based apply call index -> error message
    apply_errors: HashMap<usize, String>,
    apply_hangs: HashSet<usize>,
    apply_count: usize,
    delete_errors: HashMap<ResourceKind, String>,
    delete_hangs: HashSet<ResourceKind>,
    absent: HashSet<ResourceKind>,
}

/// Fake cluster client that records calls and can be programmed to fail
#[derive(Clone, Default)]
pub struct FakeClusterClient {
    inner: Arc<Mutex<FakeClusterState>>,
}

fn injected(command: &str, message: &str) -> ClusterError {
    ClusterError::CommandFailed {
        command: command.to_string(),
        stderr: message.to_string(),
    }
}

impl FakeClusterClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ClusterCall> {
        self.inner.lock().calls.clone()
    }

    /// Manifests passed to `apply`, in order
    pub fn applied(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                ClusterCall::Apply { manifest } => Some(manifest),
                _ => None,
            })
            .collect()
    }

    pub fn fail_probe(&self, message: &str) {
        self.inner.lock().probe_error = Some(message.to_string());
    }

    /// Fail the `index`-th apply call (zero-based).
    pub fn fail_apply(&self, index: usize, message: &str) {
        self.inner.lock().apply_errors.insert(index, message.to_string());
    }

    /// Never complete the `index`-th apply call.
    pub fn hang_apply(&self, index: usize) {
        self.inner.lock().apply_hangs.insert(index);
    }

    pub fn fail_delete(&self, kind: ResourceKind, message: &str) {
        self.inner.lock().delete_errors.insert(kind, message.to_string());
    }

    pub fn hang_delete(&self, kind: ResourceKind) {
        self.inner.lock().delete_hangs.insert(kind);
    }

    /// Report `kind` as already deleted.
    pub fn mark_absent(&self, kind: ResourceKind) {
        self.inner.lock().absent.insert(kind);
    }
}

#[async_trait]
impl ClusterClient for FakeClusterClient {
    async fn probe(&self) -> Result<(), ClusterError> {
        let mut state = self.inner.lock();
        state.calls.push(ClusterCall::Probe);
        match &state.probe_error {
            Some(msg) => Err(injected("probe", msg)),
            None => Ok(()),
        }
    }

    async fn apply(&self, manifest: &str) -> Result<(), ClusterError> {
        let (hang, result) = {
            let mut state = self.inner.lock();
            state.calls.push(ClusterCall::Apply {
                manifest: manifest.to_string(),
            });
            let index = state.apply_count;
            state.apply_count += 1;
            let result = match state.apply_errors.get(&index) {
                Some(msg) => Err(injected("apply", msg)),
                None => Ok(()),
            };
            (state.apply_hangs.contains(&index), result)
        };
        if hang {
            std::future::pending::<()>().await;
        }
        result
    }

    async fn delete(&self, kind: ResourceKind, name: &str) -> Result<DeleteOutcome, ClusterError> {
        let (hang, result) = {
            let mut state = self.inner.lock();
            state.calls.push(ClusterCall::Delete {
                kind,
                name: name.to_string(),
            });
            let result = if let Some(msg) = state.delete_errors.get(&kind) {
                Err(injected("delete", msg))
            } else if state.absent.contains(&kind) {
                Ok(DeleteOutcome::NotFound)
            } else {
                Ok(DeleteOutcome::Deleted)
            };
            (state.delete_hangs.contains(&kind), result)
        };
        if hang {
            std::future::pending::<()>().await;
        }
        result
    }
}
