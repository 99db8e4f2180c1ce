// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `batchinfer delete`

use anyhow::Result;
use batchinfer_adapters::ClusterClient;
use batchinfer_core::JobName;
use batchinfer_engine::{CallGuard, Teardown};
use clap::Args;

use crate::exit_error::ExitError;
use crate::output;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    /// Job name printed by `launch`
    pub job_name: String,
}

pub async fn handle<C: ClusterClient>(client: C, args: DeleteArgs, guard: CallGuard) -> Result<()> {
    let job_name = JobName::from_string(args.job_name);
    match Teardown::new(client, guard).delete(&job_name).await {
        Ok(report) => {
            output::print_teardown(&report);
            Ok(())
        }
        Err(err) => {
            if let Some(report) = err.report() {
                output::print_teardown(report);
            }
            Err(ExitError::from(err).into())
        }
    }
}

#[cfg(test)]
#[path = "delete_tests.rs"]
mod tests;
