// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Launch orchestration
//!
//! Image check, config load, job naming, credential collection, rendering,
//! then one guarded apply per rendered manifest in discovery order. The first
//! failed apply stops the sequence. Manifests already applied stay in the
//! cluster and are listed in the error; `delete` removes them.

use std::path::{Path, PathBuf};

use batchinfer_adapters::{ClusterClient, ClusterError};
use batchinfer_core::{
    config, Clock, Credentials, JobName, NameGenerator, PreconditionError, ValidationError,
    CONTAINER_IMAGE,
};
use batchinfer_manifest::{LaunchVars, ManifestRenderer, RenderContext, RenderError};
use thiserror::Error;

use crate::guard::{CallGuard, GuardError};

#[derive(Debug, Error)]
pub enum LaunchError {
    #[error(transparent)]
    Precondition(#[from] PreconditionError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("failed to apply manifest #{index} ({manifest}): {}", .source.diagnostic())]
    Apply {
        job_name: JobName,
        index: usize,
        manifest: String,
        /// Manifests submitted before the failure.
        applied: Vec<String>,
        #[source]
        source: ClusterError,
    },
    /// An apply timed out or was cancelled; earlier manifests stay applied.
    #[error("{source} (manifest #{index})")]
    Interrupted {
        job_name: JobName,
        index: usize,
        manifest: String,
        applied: Vec<String>,
        #[source]
        source: GuardError,
    },
}

impl LaunchError {
    /// Job name and applied manifests when the launch stopped part way.
    pub fn partial(&self) -> Option<(&JobName, &[String])> {
        match self {
            LaunchError::Apply {
                job_name,
                applied,
                ..
            }
            | LaunchError::Interrupted {
                job_name,
                applied,
                ..
            } => Some((job_name, applied)),
            _ => None,
        }
    }
}

/// Inputs for one launch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub container_image: String,
    pub config_file: PathBuf,
    pub distributed_config_file: Option<PathBuf>,
}

/// What a successful launch produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchReceipt {
    pub job_name: JobName,
    /// Template names in the order they were applied.
    pub applied: Vec<String>,
}

pub struct Launcher<C: ClusterClient, K: Clock> {
    client: C,
    names: NameGenerator<K>,
    renderer: ManifestRenderer,
    template_dir: PathBuf,
    guard: CallGuard,
}

impl<C: ClusterClient, K: Clock> Launcher<C, K> {
    pub fn new(client: C, clock: K, template_dir: impl Into<PathBuf>, guard: CallGuard) -> Self {
        Self {
            client,
            names: NameGenerator::new(clock),
            renderer: ManifestRenderer::new(),
            template_dir: template_dir.into(),
            guard,
        }
    }

    pub fn template_dir(&self) -> &Path {
        &self.template_dir
    }

    /// Launch one job. `env` is read once, here, and nowhere else.
    pub async fn launch<I, Ke, V>(
        &self,
        request: &LaunchRequest,
        env: I,
    ) -> Result<LaunchReceipt, LaunchError>
    where
        I: IntoIterator<Item = (Ke, V)>,
        Ke: Into<String>,
        V: Into<String>,
    {
        if request.container_image.is_empty() {
            return Err(PreconditionError::new([CONTAINER_IMAGE]).into());
        }

        let job_config = config::load(&request.config_file)?;
        let config_file = request.config_file.display().to_string();
        let job_name = self.names.new_name(&config_file);
        tracing::info!(%job_name, config = %config_file, "launching job");

        let credentials = Credentials::collect(&request.container_image, env)?;
        let distributed = request
            .distributed_config_file
            .as_deref()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let ctx = RenderContext::for_launch(&LaunchVars {
            job_name: &job_name,
            credentials: &credentials,
            config: &job_config,
            config_file: &config_file,
            distributed_config_file: &distributed,
        });

        let manifests = self.renderer.render_all(&self.template_dir, &ctx, &job_config)?;

        let mut applied = Vec::with_capacity(manifests.len());
        for (index, manifest) in manifests.iter().enumerate() {
            let operation = format!("apply {}", manifest.name);
            let apply = self.client.apply(&manifest.content);
            let result = match self.guard.run(&operation, apply).await {
                Ok(result) => result,
                Err(source) => {
                    tracing::error!(
                        template = %manifest.name,
                        index,
                        error = %source,
                        "apply interrupted"
                    );
                    return Err(LaunchError::Interrupted {
                        job_name,
                        index,
                        manifest: manifest.name.clone(),
                        applied,
                        source,
                    });
                }
            };
            if let Err(source) = result {
                tracing::error!(template = %manifest.name, index, "apply failed");
                return Err(LaunchError::Apply {
                    job_name,
                    index,
                    manifest: manifest.name.clone(),
                    applied,
                    source,
                });
            }
            tracing::info!(template = %manifest.name, "applied");
            applied.push(manifest.name.clone());
        }

        Ok(LaunchReceipt { job_name, applied })
    }
}

#[cfg(test)]
#[path = "launch_tests.rs"]
mod tests;
