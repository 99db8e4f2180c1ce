// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Batch inference job configuration.
//!
//! The document is kept opaque apart from the handful of fields the launch
//! pipeline reads (`project.name`, `dataset.name`). Everything else is carried
//! through untouched so the running job can reconstruct the exact document
//! from the config-carrier manifest.

use serde_yaml::Value;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fields every job configuration must define as non-empty strings.
pub const REQUIRED_FIELDS: &[&str] = &["project.name", "dataset.name"];

/// Errors from loading or validating a job configuration
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("cannot read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config {} is not valid YAML: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("config document must be a mapping, found {found}")]
    NotAMapping { found: &'static str },
    #[error("config is missing required field `{field}`")]
    MissingField { field: &'static str },
    #[error("config field `{field}` must be a non-empty string")]
    InvalidField { field: &'static str },
    #[error("failed to serialize config: {0}")]
    Serialize(#[source] serde_yaml::Error),
}

/// A validated, immutable job configuration document.
#[derive(Debug, Clone, PartialEq)]
pub struct JobConfig {
    document: Value,
    project_name: String,
    dataset_name: String,
}

impl JobConfig {
    /// Validate an already-parsed document.
    pub fn from_document(document: Value) -> Result<Self, ValidationError> {
        if !document.is_mapping() {
            return Err(ValidationError::NotAMapping {
                found: kind_of(&document),
            });
        }
        let project_name = required_str(&document, "project.name")?;
        let dataset_name = required_str(&document, "dataset.name")?;
        Ok(Self {
            document,
            project_name,
            dataset_name,
        })
    }

    /// Parse and validate YAML text.
    pub fn from_yaml_str(text: &str, origin: &Path) -> Result<Self, ValidationError> {
        let document = serde_yaml::from_str(text)
            .map_err(|source| ValidationError::Parse {
                path: origin.to_path_buf(),
                source,
            })?;
        Self::from_document(document)
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    pub fn dataset_name(&self) -> &str {
        &self.dataset_name
    }

    /// The full document as loaded.
    pub fn document(&self) -> &Value {
        &self.document
    }
}

/// Load and validate the job configuration at `path`.
///
/// Reads the file and nothing else.
pub fn load(path: &Path) -> Result<JobConfig, ValidationError> {
    let text = std::fs::read_to_string(path)
        .map_err(|source| ValidationError::Read {
            path: path.to_path_buf(),
            source,
        })?;
    let config = JobConfig::from_yaml_str(&text, path)?;
    tracing::debug!(
        path = %path.display(),
        project = config.project_name(),
        dataset = config.dataset_name(),
        "loaded job config"
    );
    Ok(config)
}

/// Canonical YAML encoding of a job configuration.
///
/// This is the exact text embedded in the config-carrier manifest.
pub fn serialize(config: &JobConfig) -> Result<String, ValidationError> {
    serde_yaml::to_string(&config.document).map_err(ValidationError::Serialize)
}

/// Resolve a dotted path and require a non-empty string at the end of it.
fn required_str(document: &Value, field: &'static str) -> Result<String, ValidationError> {
    let mut node = document;
    for key in field.split('.') {
        node = node.get(key).ok_or(ValidationError::MissingField { field })?;
    }
    match node.as_str() {
        Some(s) if !s.is_empty() => Ok(s.to_string()),
        _ => Err(ValidationError::InvalidField { field }),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
