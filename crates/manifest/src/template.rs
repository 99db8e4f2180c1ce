// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Manifest template discovery

use std::path::Path;

use super::error::RenderError;

/// File name of the template whose rendered ConfigMap carries the job config.
pub const CONFIG_CARRIER_FILE: &str = "config_template.yaml";

/// Key under `data` that receives the serialized job config.
pub const CONFIG_PAYLOAD_KEY: &str = "config.yaml";

/// What a template produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestRole {
    /// An ordinary resource, submitted exactly as rendered.
    Resource,
    /// Holds the serialized job config under `data["config.yaml"]`.
    ConfigCarrier,
}

impl ManifestRole {
    pub fn for_file_name(name: &str) -> Self {
        if name == CONFIG_CARRIER_FILE {
            ManifestRole::ConfigCarrier
        } else {
            ManifestRole::Resource
        }
    }
}

/// A named template source and its role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestTemplate {
    pub name: String,
    pub source: String,
    pub role: ManifestRole,
}

impl ManifestTemplate {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        let name = name.into();
        let role = ManifestRole::for_file_name(&name);
        Self {
            name,
            source: source.into(),
            role,
        }
    }
}

/// Load every `*.yaml` / `*.yml` file in `dir` (not recursive), sorted by
/// file name so submission order is reproducible.
pub fn discover(dir: &Path) -> Result<Vec<ManifestTemplate>, RenderError> {
    let io_err = |source| RenderError::Discover {
        dir: dir.to_path_buf(),
        source,
    };

    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let entry = entry.map_err(io_err)?;
        let path = entry.path();
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e == "yaml" || e == "yml");
        if is_yaml && path.is_file() {
            paths.push(path);
        }
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));

    if paths.is_empty() {
        return Err(RenderError::NoTemplates {
            dir: dir.to_path_buf(),
        });
    }

    let mut templates = Vec::with_capacity(paths.len());
    for path in paths {
        let source = std::fs::read_to_string(&path).map_err(io_err)?;
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        tracing::debug!(template = %name, "discovered manifest template");
        templates.push(ManifestTemplate::new(name, source));
    }
    Ok(templates)
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
