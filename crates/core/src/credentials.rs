// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Credential collection for launched jobs.
//!
//! Jobs run in the cluster without access to the operator's machine, so the
//! launcher snapshots the secrets and parameters they need from the operator's
//! environment at launch time and renders them into the job's manifests.
//!
//! ```text
//! mandatory: container image, WANDB_API_KEY, WANDB_USERNAME
//! optional:  HF_TOKEN, S3_*, ALLOW_CUSTOM_TESTS, ALLOW_CUSTOM_METRICS,
//!            USER (falling back to USERNAME)
//! ```
//!
//! Optional values default to `""` so every template slot is always defined.

use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

pub const HF_TOKEN: &str = "HF_TOKEN";
pub const S3_ENDPOINT: &str = "S3_ENDPOINT";
pub const S3_ACCESS_KEY_ID: &str = "S3_ACCESS_KEY_ID";
pub const S3_SECRET_ACCESS_KEY: &str = "S3_SECRET_ACCESS_KEY";
pub const S3_REGION: &str = "S3_REGION";
pub const S3_SECURE: &str = "S3_SECURE";
pub const WANDB_API_KEY: &str = "WANDB_API_KEY";
pub const WANDB_USERNAME: &str = "WANDB_USERNAME";
pub const ALLOW_CUSTOM_TESTS: &str = "ALLOW_CUSTOM_TESTS";
pub const ALLOW_CUSTOM_METRICS: &str = "ALLOW_CUSTOM_METRICS";
pub const USER: &str = "USER";
pub const USERNAME: &str = "USERNAME";

/// Every variable the collector reads.
pub const ENV_VARS: &[&str] = &[
    HF_TOKEN,
    S3_ENDPOINT,
    S3_ACCESS_KEY_ID,
    S3_SECRET_ACCESS_KEY,
    S3_REGION,
    S3_SECURE,
    WANDB_API_KEY,
    WANDB_USERNAME,
    ALLOW_CUSTOM_TESTS,
    ALLOW_CUSTOM_METRICS,
    USER,
    USERNAME,
];

/// Name used for the container image in precondition reports.
pub const CONTAINER_IMAGE: &str = "container_image";

/// One or more mandatory inputs are missing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("missing required input: {}", missing.join(", "))]
pub struct PreconditionError {
    pub missing: Vec<String>,
}

impl PreconditionError {
    pub fn new(missing: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            missing: missing.into_iter().map(Into::into).collect(),
        }
    }
}

/// Object storage settings.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct S3Credentials {
    pub endpoint: String,
    pub access_key_id: String,
    pub secret_access_key: String,
    pub region: String,
    pub secure: String,
}

/// Immutable snapshot of everything a job needs from the operator's environment.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub container_image: String,
    pub hf_token: String,
    pub s3: S3Credentials,
    pub wandb_api_key: String,
    pub wandb_username: String,
    pub allow_custom_tests: String,
    pub allow_custom_metrics: String,
    /// Operator identity for tags; empty when neither USER nor USERNAME is set.
    pub user: String,
}

impl Credentials {
    /// Collect credentials from an environment snapshot.
    ///
    /// Reports every missing mandatory value at once.
    pub fn collect<I, K, V>(container_image: &str, env: I) -> Result<Self, PreconditionError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = env
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .filter(|(k, _)| ENV_VARS.contains(&k.as_str()))
            .collect();
        let get = |name: &str| vars.get(name).cloned().unwrap_or_default();

        let mut missing = Vec::new();
        if container_image.is_empty() {
            missing.push(CONTAINER_IMAGE.to_string());
        }
        for name in [WANDB_API_KEY, WANDB_USERNAME] {
            if get(name).is_empty() {
                missing.push(name.to_string());
            }
        }
        if !missing.is_empty() {
            return Err(PreconditionError { missing });
        }

        let user = match get(USER) {
            u if !u.is_empty() => u,
            _ => get(USERNAME),
        };

        Ok(Self {
            container_image: container_image.to_string(),
            hf_token: get(HF_TOKEN),
            s3: S3Credentials {
                endpoint: get(S3_ENDPOINT),
                access_key_id: get(S3_ACCESS_KEY_ID),
                secret_access_key: get(S3_SECRET_ACCESS_KEY),
                region: get(S3_REGION),
                secure: get(S3_SECURE),
            },
            wandb_api_key: get(WANDB_API_KEY),
            wandb_username: get(WANDB_USERNAME),
            allow_custom_tests: get(ALLOW_CUSTOM_TESTS),
            allow_custom_metrics: get(ALLOW_CUSTOM_METRICS),
            user,
        })
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}

impl fmt::Debug for S3Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("S3Credentials")
            .field("endpoint", &self.endpoint)
            .field("access_key_id", &redact(&self.access_key_id))
            .field("secret_access_key", &redact(&self.secret_access_key))
            .field("region", &self.region)
            .field("secure", &self.secure)
            .finish()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("container_image", &self.container_image)
            .field("hf_token", &redact(&self.hf_token))
            .field("s3", &self.s3)
            .field("wandb_api_key", &redact(&self.wandb_api_key))
            .field("wandb_username", &self.wandb_username)
            .field("allow_custom_tests", &self.allow_custom_tests)
            .field("allow_custom_metrics", &self.allow_custom_metrics)
            .field("user", &self.user)
            .finish()
    }
}

#[cfg(test)]
#[path = "credentials_tests.rs"]
mod tests;
