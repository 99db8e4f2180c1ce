// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Operator-facing output on stdout.

use batchinfer_adapters::DeleteOutcome;
use batchinfer_core::JobName;
use batchinfer_engine::{LaunchReceipt, TeardownReport};

use crate::color;

/// Follow-up commands for a launched job: status, logs, delete.
pub fn hints(job_name: &JobName) -> [(&'static str, String); 3] {
    [
        ("status", format!("kubectl describe job/{job_name}")),
        ("logs", format!("kubectl logs job/{job_name} -f")),
        ("delete", format!("batchinfer delete {job_name}")),
    ]
}

pub fn format_launch(receipt: &LaunchReceipt) -> String {
    let mut out = String::new();
    for name in &receipt.applied {
        out.push_str(&format!("applied {name}\n"));
    }
    out.push_str(&format!("{} {}\n", color::header("Job:"), receipt.job_name));
    for (label, command) in hints(&receipt.job_name) {
        out.push_str(&format!("  {:<7} {}\n", color::context(label), color::literal(&command)));
    }
    out
}

pub fn format_teardown(report: &TeardownReport) -> String {
    let mut out = String::new();
    for (kind, outcome) in &report.outcomes {
        let status = match outcome {
            DeleteOutcome::Deleted => "deleted",
            DeleteOutcome::NotFound => "not found",
        };
        out.push_str(&format!("{kind}/{}: {status}\n", report.job_name));
    }
    out
}

pub fn print_launch(receipt: &LaunchReceipt) {
    print!("{}", format_launch(receipt));
}

pub fn print_teardown(report: &TeardownReport) {
    print!("{}", format_teardown(report));
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
