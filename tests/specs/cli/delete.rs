// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `batchinfer delete` specs

use crate::prelude::*;

#[test]
fn delete_removes_every_kind_in_order() {
    let project = Project::new();
    project
        .batchinfer()
        .args(&["delete", "brave-otter-0a1b2c"])
        .passes()
        .stdout_has("job/brave-otter-0a1b2c: deleted")
        .stdout_has("secret/brave-otter-0a1b2c: deleted");

    assert_eq!(
        project.kubectl_calls(),
        [
            "get po",
            "delete job brave-otter-0a1b2c --ignore-not-found",
            "delete service brave-otter-0a1b2c --ignore-not-found",
            "delete configmap brave-otter-0a1b2c --ignore-not-found",
            "delete secret brave-otter-0a1b2c --ignore-not-found",
        ]
    );
}

#[test]
fn delete_of_absent_job_succeeds() {
    let project = Project::new();
    project
        .batchinfer()
        .env("FAKE_KUBECTL_ABSENT", "1")
        .args(&["delete", "gone-job"])
        .passes()
        .stdout_has("job/gone-job: not found");
}

#[test]
fn one_rejected_kind_does_not_stop_the_rest() {
    let project = Project::new();
    project
        .batchinfer()
        .env("FAKE_KUBECTL_DENY_DELETE", "service")
        .args(&["delete", "job-123"])
        .fails_with(3)
        .stderr_has("service: Error from server (Forbidden)")
        .stdout_has("job/job-123: deleted")
        .stdout_has("configmap/job-123: deleted")
        .stdout_has("secret/job-123: deleted");

    assert_eq!(project.kubectl_calls().len(), 5);
}

#[test]
fn delete_probes_first() {
    let project = Project::new();
    project
        .batchinfer()
        .env("FAKE_KUBECTL_UNREACHABLE", "1")
        .args(&["delete", "job-123"])
        .fails_with(1);

    assert_eq!(project.kubectl_calls(), ["get po"]);
}
