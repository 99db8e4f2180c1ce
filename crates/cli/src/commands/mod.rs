// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI command implementations

pub mod delete;
pub mod launch;

use anyhow::Result;
use batchinfer_adapters::ClusterClient;
use batchinfer_core::Clock;
use batchinfer_engine::{preflight, CallGuard};
use clap::Subcommand;

use crate::exit_error::ExitError;
use crate::settings::Settings;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the manifest templates and submit a batch inference job
    Launch(launch::LaunchArgs),
    /// Delete every resource created for a job
    Delete(delete::DeleteArgs),
}

/// Probe the control plane once, then run `command` against it.
pub async fn run<C: ClusterClient, K: Clock>(
    client: C,
    clock: K,
    command: Command,
    settings: &Settings,
    guard: CallGuard,
    env: Vec<(String, String)>,
) -> Result<()> {
    preflight(&client, &guard).await.map_err(ExitError::from)?;
    match command {
        Command::Launch(args) => launch::handle(client, clock, args, settings, guard, env).await,
        Command::Delete(args) => delete::handle(client, args, guard).await,
    }
}
