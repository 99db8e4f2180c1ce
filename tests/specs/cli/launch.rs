// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `batchinfer launch` specs

use crate::prelude::*;

#[test]
fn launch_applies_shipped_templates_in_file_name_order() {
    let project = Project::new();
    let out = project
        .batchinfer()
        .with_tracking_credentials()
        .args(&["launch", "--container_image=registry.local/infer:3", "--config_file=infer.yaml"])
        .passes()
        .stdout_has("applied config_template.yaml")
        .stdout_has("applied service.yaml");
    let job_name = out.job_name();
    let out = out
        .stdout_has(&format!("kubectl describe job/{job_name}"))
        .stdout_has(&format!("kubectl logs job/{job_name} -f"));
    out.stdout_has(&format!("batchinfer delete {job_name}"));

    let calls = project.kubectl_calls();
    assert_eq!(calls[0], "get po");
    assert_eq!(calls.iter().filter(|c| *c == "apply -f -").count(), 4);

    let docs = project.applied();
    let kinds: Vec<_> = docs.iter().map(|d| d["kind"].as_str().unwrap().to_string()).collect();
    assert_eq!(kinds, ["ConfigMap", "Job", "Secret", "Service"]);
    for doc in &docs {
        assert_eq!(doc["metadata"]["name"].as_str(), Some(job_name.as_str()));
    }
}

#[test]
fn config_carrier_holds_the_exact_job_config() {
    let project = Project::new();
    project
        .batchinfer()
        .with_tracking_credentials()
        .args(&["launch", "--container_image=img", "--config_file=infer.yaml"])
        .passes();

    let carrier = &project.applied()[0];
    let embedded = carrier["data"]["config.yaml"].as_str().unwrap();
    let payload: serde_yaml::Value = serde_yaml::from_str(embedded).unwrap();
    let original: serde_yaml::Value = serde_yaml::from_str(CONFIG).unwrap();
    assert_eq!(payload, original);
}

#[test]
fn secret_values_are_base64_encoded() {
    let project = Project::new();
    project
        .batchinfer()
        .with_tracking_credentials()
        .args(&["launch", "--container_image=img", "--config_file=infer.yaml"])
        .passes();

    let secret = &project.applied()[2];
    // base64("alice")
    assert_eq!(secret["data"]["WANDB_USERNAME"].as_str(), Some("YWxpY2U="));
    assert_eq!(secret["data"]["HF_TOKEN"].as_str(), Some(""));
}

#[test]
fn missing_tracking_credentials_are_named_together() {
    let project = Project::new();
    project
        .batchinfer()
        .args(&["launch", "--container_image=img", "--config_file=infer.yaml"])
        .fails_with(2)
        .stderr_has("WANDB_API_KEY")
        .stderr_has("WANDB_USERNAME");

    assert_eq!(project.kubectl_calls(), ["get po"]);
}

#[test]
fn empty_container_image_is_rejected_after_probe() {
    let project = Project::new();
    project
        .batchinfer()
        .with_tracking_credentials()
        .args(&["launch", "--config_file=infer.yaml"])
        .fails_with(2)
        .stderr_has("container_image");

    assert_eq!(project.kubectl_calls(), ["get po"]);
}

#[test]
fn unreachable_cluster_exits_one_with_diagnostic() {
    let project = Project::new();
    project
        .batchinfer()
        .with_tracking_credentials()
        .env("FAKE_KUBECTL_UNREACHABLE", "1")
        .args(&["launch", "--container_image=img", "--config_file=infer.yaml"])
        .fails_with(1)
        .stderr_has("failed to connect to Kubernetes")
        .stderr_has("connection to the server localhost:8080 was refused");

    assert_eq!(project.kubectl_calls(), ["get po"]);
}

#[test]
fn config_without_dataset_is_rejected() {
    let project = Project::new();
    project.file("bad.yaml", "project:\n  name: p1\n");
    project
        .batchinfer()
        .with_tracking_credentials()
        .args(&["launch", "--container_image=img", "--config_file=bad.yaml"])
        .fails_with(2)
        .stderr_has("dataset.name");
}

#[test]
fn distributed_config_file_is_passed_to_the_job() {
    let project = Project::new();
    project
        .batchinfer()
        .with_tracking_credentials()
        .args(&[
            "launch",
            "--container_image=img",
            "--config_file=infer.yaml",
            "--distributed_config_file=ds_zero3.json",
        ])
        .passes();

    let job = &project.applied()[1];
    let args = job["spec"]["template"]["spec"]["containers"][0]["args"].as_sequence().unwrap();
    assert!(args.iter().any(|a| a.as_str() == Some("--distributed_config_file=ds_zero3.json")));
}
