// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Jinja template engine with strict undefined handling.

use minijinja::{Environment, UndefinedBehavior};

use super::context::RenderContext;
use super::error::RenderError;
use super::filters;

/// Template engine for manifest rendering
///
/// Any reference to a variable missing from the context is a render error;
/// nothing is silently left as literal placeholder text.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_filter("b64encode", filters::b64encode);
        env.add_filter("b64decode", filters::b64decode);
        Self { env }
    }

    /// Render `source` against `ctx`, attributing errors to `name`.
    pub fn render(
        &self,
        name: &str,
        source: &str,
        ctx: &RenderContext,
    ) -> Result<String, RenderError> {
        self.env.render_named_str(name, source, ctx.vars()).map_err(|source| {
            RenderError::Template {
                template: name.to_string(),
                source,
            }
        })
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
