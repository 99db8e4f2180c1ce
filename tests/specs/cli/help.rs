// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! CLI help output specs

use crate::prelude::*;

#[test]
fn help_lists_both_commands() {
    cli().args(&["--help"]).passes().stdout_has("Usage:").stdout_has("launch").stdout_has("delete");
}

#[test]
fn launch_help_shows_flags() {
    cli()
        .args(&["launch", "--help"])
        .passes()
        .stdout_has("--container_image")
        .stdout_has("--config_file")
        .stdout_has("--distributed_config_file");
}

#[test]
fn version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.2");
}
