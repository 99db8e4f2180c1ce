// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! batchinfer: launch and delete batch inference jobs on Kubernetes

mod color;
mod commands;
mod env;
mod exit_error;
mod output;
mod settings;

use std::path::PathBuf;

use anyhow::Result;
use batchinfer_adapters::{KubeApiClient, KubectlClient};
use batchinfer_core::SystemClock;
use batchinfer_engine::CallGuard;
use clap::{ArgAction, Parser};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::Command;
use exit_error::{ExitError, CONNECTIVITY};
use settings::{Backend, Overrides, Settings};

#[derive(Parser, Debug)]
#[command(name = "batchinfer", version, about = "Launch batch inference jobs on Kubernetes")]
#[command(styles = color::styles())]
struct Cli {
    /// More logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory of manifest templates [env: BATCHINFER_TEMPLATE_DIR]
    #[arg(long = "template_dir", alias = "template-dir", global = true)]
    template_dir: Option<PathBuf>,

    /// Namespace for all resources [env: BATCHINFER_NAMESPACE]
    #[arg(long, global = true)]
    namespace: Option<String>,

    /// Control-plane client [env: BATCHINFER_BACKEND]
    #[arg(long, value_enum, global = true)]
    backend: Option<Backend>,

    #[command(subcommand)]
    command: Command,
}

fn init_tracing(verbose: u8) {
    let fallback = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback)))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();
}

/// Cancel `token` on the first Ctrl-C.
fn cancel_on_interrupt(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("interrupted, cancelling");
            token.cancel();
        }
    });
}

async fn run(cli: Cli) -> Result<()> {
    let settings = Settings::resolve(Overrides {
        template_dir: cli.template_dir,
        namespace: cli.namespace,
        backend: cli.backend,
    })?;
    tracing::debug!(?settings, "resolved settings");

    let cancel = CancellationToken::new();
    cancel_on_interrupt(cancel.clone());
    let guard = CallGuard::new(settings.call_timeout, cancel);
    let env: Vec<(String, String)> = std::env::vars().collect();

    match settings.backend {
        Backend::Kubectl => {
            let client = KubectlClient::new(settings.kubectl.clone(), settings.namespace.clone());
            commands::run(client, SystemClock, cli.command, &settings, guard, env).await
        }
        Backend::Api => {
            let client = KubeApiClient::new(settings.namespace.clone())
                .await
                .map_err(|e| {
                    let message =
                        format!("failed to connect to Kubernetes:\n{}", e.diagnostic());
                    ExitError::new(CONNECTIVITY, message)
                })?;
            commands::run(client, SystemClock, cli.command, &settings, guard, env).await
        }
    }
}

#[tokio::main]
async fn main() {
    // A missing .env is fine; existing variables win over the file.
    let loaded = dotenv::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Ok(path) = loaded {
        tracing::debug!(path = %path.display(), "loaded .env");
    }

    if let Err(err) = run(cli).await {
        match err.downcast_ref::<ExitError>() {
            Some(exit) => {
                eprintln!("error: {exit}");
                std::process::exit(exit.code);
            }
            None => {
                eprintln!("error: {err:#}");
                std::process::exit(1);
            }
        }
    }
}
