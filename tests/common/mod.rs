//
//  logfire-cli
//  tests/common/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Shared helpers for driving the `logfire-cli` binary in tests.

use std::path::Path;

use assert_cmd::Command;

/// Collection path for the test organization and project.
#[allow(dead_code)]
pub const COLLECTION: &str = "/ui-api/organizations/test-org/projects/test-project/dashboards/";

/// Returns a hermetic `logfire-cli` command.
///
/// Connection settings from the host are cleared and the configuration file
/// points into `config_dir`, so nothing outside the test leaks in.
pub fn logfire_cmd(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("logfire-cli").unwrap();
    cmd.env_remove("LOGFIRE_TOKEN")
        .env_remove("LOGFIRE_ORGANIZATION")
        .env_remove("LOGFIRE_PROJECT")
        .env_remove("LOGFIRE_BASE_URL")
        .env_remove("LOGFIRE_TIMEOUT")
        .env_remove("LOGFIRE_NO_PROMPT")
        .env_remove("LOGFIRE_CLI_DEBUG")
        .env("LOGFIRE_CLI_CONFIG", config_dir.join("config.toml"))
        .env("NO_COLOR", "1")
        .current_dir(config_dir);
    cmd
}

/// Returns a command with credentials pointing at `base_url`.
#[allow(dead_code)]
pub fn connected_cmd(config_dir: &Path, base_url: &str) -> Command {
    let mut cmd = logfire_cmd(config_dir);
    cmd.env("LOGFIRE_TOKEN", "test-token")
        .env("LOGFIRE_ORGANIZATION", "test-org")
        .env("LOGFIRE_PROJECT", "test-project")
        .env("LOGFIRE_BASE_URL", base_url);
    cmd
}
