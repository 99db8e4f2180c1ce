// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Template error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while discovering or rendering manifests
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("cannot read template directory {}: {source}", dir.display())]
    Discover {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no manifest templates found in {}", dir.display())]
    NoTemplates { dir: PathBuf },
    #[error("template `{template}` failed to render: {source}")]
    Template {
        template: String,
        #[source]
        source: minijinja::Error,
    },
    #[error("template `{template}` rendered invalid YAML: {source}")]
    InvalidYaml {
        template: String,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("template `{template}` rendered no YAML documents")]
    Empty { template: String },
    #[error("config-carrier template `{template}` {reason}")]
    CarrierShape {
        template: String,
        reason: &'static str,
    },
    #[error(transparent)]
    Config(#[from] batchinfer_core::ValidationError),
}

impl RenderError {
    /// The template this error is attributed to, if any.
    pub fn template(&self) -> Option<&str> {
        match self {
            RenderError::Template { template, .. }
            | RenderError::InvalidYaml { template, .. }
            | RenderError::Empty { template }
            | RenderError::CarrierShape { template, .. } => Some(template),
            RenderError::Discover { .. }
            | RenderError::NoTemplates { .. }
            | RenderError::Config(_) => None,
        }
    }
}
