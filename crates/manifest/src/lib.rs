// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! batchinfer-manifest: Kubernetes manifest templates for batch inference jobs
//!
//! Templates are Jinja files discovered from a directory, rendered against a
//! flat [`RenderContext`], and checked to be valid YAML. The config-carrier
//! template gets a second, structural pass that embeds the serialized job
//! configuration.

pub mod context;
pub mod engine;
pub mod error;
pub mod filters;
pub mod renderer;
pub mod template;

pub use context::{LaunchVars, RenderContext};
pub use engine::TemplateEngine;
pub use error::RenderError;
pub use renderer::{ManifestRenderer, RenderedManifest};
pub use template::{
    discover, ManifestRole, ManifestTemplate, CONFIG_CARRIER_FILE, CONFIG_PAYLOAD_KEY,
};
