// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use assert_cmd::assert::Assert;
use assert_cmd::Command;
use tempfile::TempDir;

/// Path to the `batchinfer` binary, building it once if cargo did not.
///
/// Cargo sets `CARGO_BIN_EXE_*` only for binaries of the package under test,
/// and `batchinfer` lives in another workspace member.
fn binary() -> &'static Path {
    static BIN: OnceLock<PathBuf> = OnceLock::new();
    BIN.get_or_init(|| {
        if let Some(path) = option_env!("CARGO_BIN_EXE_batchinfer") {
            return PathBuf::from(path);
        }
        let root = Path::new(env!("CARGO_MANIFEST_DIR"));
        // Own target dir: the outer `cargo test` may still hold the default one
        let target = std::env::var_os("CARGO_TARGET_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| root.join("target"))
            .join("specs");
        let status = std::process::Command::new(
            std::env::var("CARGO").unwrap_or_else(|_| "cargo".to_string()),
        )
        .current_dir(root)
        .env("CARGO_TARGET_DIR", &target)
        .args(["build", "--quiet", "-p", "batchinfer", "--bin", "batchinfer"])
        .status()
        .expect("run cargo build");
        assert!(status.success(), "building batchinfer failed");
        target.join("debug").join(format!("batchinfer{}", std::env::consts::EXE_SUFFIX))
    })
}

fn command() -> Command {
    Command::new(binary())
}

/// Shipped manifest templates.
pub fn shipped_templates() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("templates/batch_inference")
}

/// Fake kubectl. Every invocation is appended to `kubectl.log`; apply stdin
/// is appended to `applied.yaml` as separate documents.
///
/// `FAKE_KUBECTL_UNREACHABLE` fails `get po`, `FAKE_KUBECTL_ABSENT` makes every
/// delete report nothing, `FAKE_KUBECTL_DENY_DELETE=<kind>` rejects that kind.
const FAKE_KUBECTL: &str = r#"#!/bin/sh
dir="$(dirname "$0")"
echo "$*" >> "$dir/kubectl.log"
case "$1 $2" in
  "get po")
    if [ -n "$FAKE_KUBECTL_UNREACHABLE" ]; then
      echo "The connection to the server localhost:8080 was refused" >&2
      exit 1
    fi
    ;;
  "apply -f")
    echo "---" >> "$dir/applied.yaml"
    cat >> "$dir/applied.yaml"
    echo "configured"
    ;;
  delete*)
    if [ "$FAKE_KUBECTL_DENY_DELETE" = "$2" ]; then
      echo "Error from server (Forbidden): $2 is forbidden" >&2
      exit 1
    fi
    if [ -z "$FAKE_KUBECTL_ABSENT" ]; then
      echo "$2 \"$3\" deleted"
    fi
    ;;
esac
"#;

/// Every credential variable the launcher reads; cleared so host values never leak in.
const CREDENTIAL_VARS: &[&str] = &[
    "HF_TOKEN",
    "S3_ENDPOINT",
    "S3_ACCESS_KEY_ID",
    "S3_SECRET_ACCESS_KEY",
    "S3_REGION",
    "S3_SECURE",
    "WANDB_API_KEY",
    "WANDB_USERNAME",
    "ALLOW_CUSTOM_TESTS",
    "ALLOW_CUSTOM_METRICS",
    "USER",
    "USERNAME",
];

pub const CONFIG: &str =
    "project:\n  name: p1\ndataset:\n  name: d1\nmodel:\n  prompt: \"Answer: {question}\"\n";

pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Working directory with a fake kubectl and a valid job config.
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("kubectl");
        std::fs::write(&bin, FAKE_KUBECTL).unwrap();
        std::fs::set_permissions(&bin, std::fs::Permissions::from_mode(0o755)).unwrap();
        std::fs::write(dir.path().join("infer.yaml"), CONFIG).unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: &str, contents: &str) {
        std::fs::write(self.path().join(name), contents).unwrap();
    }

    /// `batchinfer` running in this project with a clean credential environment.
    pub fn batchinfer(&self) -> Cli {
        let mut cmd = command();
        cmd.current_dir(self.path())
            .env("BATCHINFER_KUBECTL", self.path().join("kubectl"))
            .env("BATCHINFER_TEMPLATE_DIR", shipped_templates())
            .env("BATCHINFER_CALL_TIMEOUT_MS", "10000")
            .env("NO_COLOR", "1")
            .env_remove("BATCHINFER_BACKEND")
            .env_remove("BATCHINFER_NAMESPACE");
        for var in CREDENTIAL_VARS {
            cmd.env_remove(var);
        }
        Cli { cmd }
    }

    /// Lines kubectl was invoked with.
    pub fn kubectl_calls(&self) -> Vec<String> {
        std::fs::read_to_string(self.path().join("kubectl.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Documents submitted through `kubectl apply`, in order.
    pub fn applied(&self) -> Vec<serde_yaml::Value> {
        let text = std::fs::read_to_string(self.path().join("applied.yaml")).unwrap_or_default();
        text.split("---\n")
            .filter(|d| !d.trim().is_empty())
            .map(|d| serde_yaml::from_str(d).unwrap())
            .collect()
    }
}

pub fn cli() -> Cli {
    Cli { cmd: command() }
}

pub struct Cli {
    cmd: Command,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    pub fn with_tracking_credentials(self) -> Self {
        self.env("WANDB_API_KEY", "wandb-key").env("WANDB_USERNAME", "alice")
    }

    pub fn passes(mut self) -> Output {
        Output(self.cmd.assert().success())
    }

    pub fn fails_with(mut self, code: i32) -> Output {
        Output(self.cmd.assert().code(code))
    }
}

pub struct Output(Assert);

impl Output {
    fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.0.get_output().stdout).to_string()
    }

    fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.0.get_output().stderr).to_string()
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let out = self.stdout();
        assert!(out.contains(needle), "stdout missing {needle:?}:\n{out}");
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let err = self.stderr();
        assert!(err.contains(needle), "stderr missing {needle:?}:\n{err}");
        self
    }

    /// Value of the `Job: <name>` line.
    pub fn job_name(&self) -> String {
        self.stdout()
            .lines()
            .find_map(|l| l.strip_prefix("Job: "))
            .map(str::to_string)
            .unwrap_or_else(|| panic!("no job name in stdout:\n{}", self.stdout()))
    }
}
