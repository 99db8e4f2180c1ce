// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Render context for manifest templates
//!
//! A flat `name -> string` map. Every key a template may reference is always
//! present, possibly as an empty string, so optional credentials never leave a
//! slot half-substituted.

use std::collections::BTreeMap;

use batchinfer_core::{Credentials, JobConfig, JobName};

/// Inputs for building the launch render context.
pub struct LaunchVars<'a> {
    pub job_name: &'a JobName,
    pub credentials: &'a Credentials,
    pub config: &'a JobConfig,
    pub config_file: &'a str,
    pub distributed_config_file: &'a str,
}

/// Resolved variables available to templates. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderContext {
    vars: BTreeMap<String, String>,
}

impl RenderContext {
    /// Build the context for one launch.
    pub fn for_launch(v: &LaunchVars<'_>) -> Self {
        let creds = v.credentials;
        let job_name = v.job_name.as_str();
        let tags = wandb_tags(&creds.user, job_name, v.config.dataset_name());

        Self::from_pairs([
            ("job_name", job_name),
            ("wandb_job_name", job_name),
            ("project_name", v.config.project_name()),
            ("dataset_name", v.config.dataset_name()),
            ("config_file", v.config_file),
            ("distributed_config_file", v.distributed_config_file),
            ("container_image", creds.container_image.as_str()),
            ("hf_token", creds.hf_token.as_str()),
            ("s3_endpoint", creds.s3.endpoint.as_str()),
            ("s3_access_key_id", creds.s3.access_key_id.as_str()),
            ("s3_secret_access_key", creds.s3.secret_access_key.as_str()),
            ("s3_region", creds.s3.region.as_str()),
            ("s3_secure", creds.s3.secure.as_str()),
            ("wandb_api_key", creds.wandb_api_key.as_str()),
            ("wandb_username", creds.wandb_username.as_str()),
            ("wandb_tags", tags.as_str()),
            ("allow_custom_tests", creds.allow_custom_tests.as_str()),
            ("allow_custom_metrics", creds.allow_custom_metrics.as_str()),
            ("user", creds.user.as_str()),
            // GPU count is left to the templates' defaults
            ("num_gpu", ""),
        ])
    }

    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        Self {
            vars: pairs.into_iter().map(|(k, v)| (k.to_string(), v.to_string())).collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    pub fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }
}

/// Experiment-tracking tags: `{user},{job_name},{dataset}`.
pub fn wandb_tags(user: &str, job_name: &str, dataset: &str) -> String {
    format!("{},{},{}", user, job_name, dataset)
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
