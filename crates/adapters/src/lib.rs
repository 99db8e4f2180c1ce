// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! batchinfer-adapters: control-plane clients

pub mod cluster;

pub use cluster::{
    ClusterClient, ClusterError, DeleteOutcome, KubeApiClient, KubectlClient, ResourceKind,
};

#[cfg(any(test, feature = "test-support"))]
pub use cluster::{ClusterCall, FakeClusterClient};
