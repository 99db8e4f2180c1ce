// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `batchinfer launch`

use std::path::PathBuf;

use anyhow::Result;
use batchinfer_adapters::ClusterClient;
use batchinfer_core::Clock;
use batchinfer_engine::{CallGuard, LaunchReceipt, LaunchRequest, Launcher};
use clap::Args;

use crate::exit_error::ExitError;
use crate::output;
use crate::settings::Settings;

#[derive(Args, Debug)]
pub struct LaunchArgs {
    /// Container image the job runs
    #[arg(long = "container_image", alias = "container-image", default_value = "")]
    pub container_image: String,

    /// Job configuration YAML (must define project.name and dataset.name)
    #[arg(long = "config_file", alias = "config-file")]
    pub config_file: PathBuf,

    /// Distributed training config passed through to the templates
    #[arg(long = "distributed_config_file", alias = "distributed-config-file")]
    pub distributed_config_file: Option<PathBuf>,
}

pub async fn handle<C: ClusterClient, K: Clock>(
    client: C,
    clock: K,
    args: LaunchArgs,
    settings: &Settings,
    guard: CallGuard,
    env: Vec<(String, String)>,
) -> Result<()> {
    let receipt = launch(client, clock, args, settings, guard, env).await?;
    output::print_launch(&receipt);
    Ok(())
}

async fn launch<C: ClusterClient, K: Clock>(
    client: C,
    clock: K,
    args: LaunchArgs,
    settings: &Settings,
    guard: CallGuard,
    env: Vec<(String, String)>,
) -> Result<LaunchReceipt, ExitError> {
    let launcher = Launcher::new(client, clock, &settings.template_dir, guard);
    let request = LaunchRequest {
        container_image: args.container_image,
        config_file: args.config_file,
        distributed_config_file: args.distributed_config_file,
    };
    Ok(launcher.launch(&request, env).await?)
}

#[cfg(test)]
#[path = "launch_tests.rs"]
mod tests;
