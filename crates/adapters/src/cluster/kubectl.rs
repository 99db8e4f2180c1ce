// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `kubectl` subprocess client.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

use super::{ClusterClient, ClusterError, DeleteOutcome, ResourceKind};

/// Control-plane client that shells out to `kubectl`.
///
/// Children are killed when their future is dropped, so a caller-side
/// timeout never leaves a stray `kubectl` behind.
#[derive(Clone, Debug)]
pub struct KubectlClient {
    program: String,
    namespace: Option<String>,
}

impl Default for KubectlClient {
    fn default() -> Self {
        Self::new("kubectl", None)
    }
}

impl KubectlClient {
    pub fn new(program: impl Into<String>, namespace: Option<String>) -> Self {
        Self {
            program: program.into(),
            namespace,
        }
    }

    fn args<'a>(&'a self, args: &[&'a str]) -> Vec<&'a str> {
        let mut all = Vec::with_capacity(args.len() + 2);
        if let Some(ns) = self.namespace.as_deref() {
            all.extend(["--namespace", ns]);
        }
        all.extend_from_slice(args);
        all
    }

    /// Run kubectl, optionally feeding `stdin`, and return stdout.
    async fn run(&self, args: &[&str], stdin: Option<&str>) -> Result<String, ClusterError> {
        let args = self.args(args);
        let command = format!("{} {}", self.program, args.join(" "));
        tracing::debug!(%command, "running kubectl");

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(if stdin.is_some() { Stdio::piped() } else { Stdio::null() })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ClusterError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if let (Some(input), Some(mut pipe)) = (stdin, child.stdin.take()) {
            // kubectl may exit before reading stdin; its exit status reports why
            match pipe.write_all(input.as_bytes()).await {
                Err(e) if e.kind() != std::io::ErrorKind::BrokenPipe => {
                    return Err(ClusterError::Spawn {
                        program: self.program.clone(),
                        source: e,
                    });
                }
                _ => {}
            }
            drop(pipe);
        }

        let output = child
            .wait_with_output()
            .await
            .map_err(|source| ClusterError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(ClusterError::CommandFailed {
                command,
                stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

#[async_trait]
impl ClusterClient for KubectlClient {
    async fn probe(&self) -> Result<(), ClusterError> {
        self.run(&["get", "po"], None).await.map(|_| ())
    }

    async fn apply(&self, manifest: &str) -> Result<(), ClusterError> {
        let out = self.run(&["apply", "-f", "-"], Some(manifest)).await?;
        for line in out.lines() {
            tracing::info!("{}", line);
        }
        Ok(())
    }

    async fn delete(&self, kind: ResourceKind, name: &str) -> Result<DeleteOutcome, ClusterError> {
        // With --ignore-not-found kubectl prints nothing for an absent resource
        let out = self.run(&["delete", kind.as_str(), name, "--ignore-not-found"], None).await?;
        if out.trim().is_empty() {
            Ok(DeleteOutcome::NotFound)
        } else {
            Ok(DeleteOutcome::Deleted)
        }
    }
}

#[cfg(all(test, unix))]
#[path = "kubectl_tests.rs"]
mod tests;
