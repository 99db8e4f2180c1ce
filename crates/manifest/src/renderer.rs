// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Manifest renderer
//!
//! Renders every template in a directory, in file name order. The
//! config-carrier template is rendered like the others and then rewritten
//! structurally: the rendered YAML is parsed, `data["config.yaml"]` is set to
//! the serialized job config, and the document is emitted again. The payload
//! is a whole nested document, so it never goes through textual substitution.

use std::path::Path;

use batchinfer_core::{config, JobConfig};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use super::context::RenderContext;
use super::engine::TemplateEngine;
use super::error::RenderError;
use super::template::{self, ManifestRole, ManifestTemplate, CONFIG_PAYLOAD_KEY};

/// A fully rendered manifest ready for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedManifest {
    /// Template file name the manifest came from.
    pub name: String,
    pub role: ManifestRole,
    pub content: String,
}

#[derive(Default)]
pub struct ManifestRenderer {
    engine: TemplateEngine,
}

impl ManifestRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discover and render every template in `template_dir`.
    pub fn render_all(
        &self,
        template_dir: &Path,
        ctx: &RenderContext,
        config: &JobConfig,
    ) -> Result<Vec<RenderedManifest>, RenderError> {
        let templates = template::discover(template_dir)?;
        self.render_templates(&templates, ctx, config)
    }

    /// Render an already-loaded template set, preserving its order.
    pub fn render_templates(
        &self,
        templates: &[ManifestTemplate],
        ctx: &RenderContext,
        config: &JobConfig,
    ) -> Result<Vec<RenderedManifest>, RenderError> {
        let mut rendered = Vec::with_capacity(templates.len());
        for tpl in templates {
            let text = self.engine.render(&tpl.name, &tpl.source, ctx)?;
            check_yaml(&tpl.name, &text)?;
            let content = match tpl.role {
                ManifestRole::Resource => text,
                ManifestRole::ConfigCarrier => {
                    embed_config(&tpl.name, &text, &config::serialize(config)?)?
                }
            };
            tracing::debug!(template = %tpl.name, role = ?tpl.role, "rendered manifest");
            rendered.push(RenderedManifest {
                name: tpl.name.clone(),
                role: tpl.role,
                content,
            });
        }
        Ok(rendered)
    }
}

/// Every document in the rendered text must parse, and at least one must
/// be non-null.
fn check_yaml(name: &str, text: &str) -> Result<(), RenderError> {
    let mut found = false;
    for doc in serde_yaml::Deserializer::from_str(text) {
        let value = Value::deserialize(doc)
            .map_err(|source| RenderError::InvalidYaml {
                template: name.to_string(),
                source,
            })?;
        found |= !value.is_null();
    }
    if found {
        Ok(())
    } else {
        Err(RenderError::Empty {
            template: name.to_string(),
        })
    }
}

/// Overwrite `data["config.yaml"]` with `payload` and re-serialize.
pub fn embed_config(name: &str, rendered: &str, payload: &str) -> Result<String, RenderError> {
    let shape = |reason| RenderError::CarrierShape {
        template: name.to_string(),
        reason,
    };
    let invalid = |source| RenderError::InvalidYaml {
        template: name.to_string(),
        source,
    };

    let mut doc: Value = serde_yaml::from_str(rendered).map_err(invalid)?;
    let root = doc.as_mapping_mut().ok_or_else(|| shape("must render a single mapping"))?;

    let data = root.entry(Value::from("data")).or_insert(Value::Null);
    if data.is_null() {
        *data = Value::Mapping(Mapping::new());
    }
    let data = data
        .as_mapping_mut()
        .ok_or_else(|| shape("has a `data` field that is not a mapping"))?;
    data.insert(Value::from(CONFIG_PAYLOAD_KEY), Value::from(payload));

    serde_yaml::to_string(&doc).map_err(invalid)
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
