// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the CLI.

use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_TEMPLATE_DIR: &str = "templates/batch_inference";

/// Template directory override
pub fn template_dir() -> Option<PathBuf> {
    non_empty("BATCHINFER_TEMPLATE_DIR").map(PathBuf::from)
}

/// Namespace for every resource; unset means the kubeconfig default.
pub fn namespace() -> Option<String> {
    non_empty("BATCHINFER_NAMESPACE")
}

/// Raw backend name, validated by the caller
pub fn backend() -> Option<String> {
    non_empty("BATCHINFER_BACKEND")
}

/// kubectl binary used by the kubectl backend (default `kubectl`)
pub fn kubectl() -> String {
    non_empty("BATCHINFER_KUBECTL").unwrap_or_else(|| "kubectl".to_string())
}

/// Deadline for each control-plane call (default 60s)
pub fn call_timeout() -> Duration {
    std::env::var("BATCHINFER_CALL_TIMEOUT_MS")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .map(Duration::from_millis)
        .unwrap_or(Duration::from_secs(60))
}

fn non_empty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
