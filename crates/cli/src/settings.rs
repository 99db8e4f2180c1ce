// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resolved CLI settings: flag, then environment, then default.

use std::path::PathBuf;
use std::time::Duration;

use clap::ValueEnum;

use crate::env;
use crate::exit_error::{ExitError, PRECONDITION};

/// Control-plane client implementation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Backend {
    /// Shell out to kubectl
    #[default]
    Kubectl,
    /// Talk to the API server directly
    Api,
}

/// Global flags, before resolution
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub template_dir: Option<PathBuf>,
    pub namespace: Option<String>,
    pub backend: Option<Backend>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub template_dir: PathBuf,
    pub namespace: Option<String>,
    pub backend: Backend,
    pub kubectl: String,
    pub call_timeout: Duration,
}

impl Settings {
    pub fn resolve(flags: Overrides) -> Result<Self, ExitError> {
        let backend = match (flags.backend, env::backend()) {
            (Some(b), _) => b,
            (None, Some(raw)) => Backend::from_str(&raw, true).map_err(|_| {
                ExitError::new(
                    PRECONDITION,
                    format!("invalid BATCHINFER_BACKEND `{raw}` (expected `kubectl` or `api`)"),
                )
            })?,
            (None, None) => Backend::default(),
        };
        Ok(Self {
            template_dir: flags
                .template_dir
                .or_else(env::template_dir)
                .unwrap_or_else(|| PathBuf::from(env::DEFAULT_TEMPLATE_DIR)),
            namespace: flags.namespace.or_else(env::namespace),
            backend,
            kubectl: env::kubectl(),
            call_timeout: env::call_timeout(),
        })
    }
}

#[cfg(test)]
#[path = "settings_tests.rs"]
mod tests;
