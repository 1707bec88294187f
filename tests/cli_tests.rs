//
//  logfire-cli
//  tests/cli_tests.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! End-to-end tests for the `logfire-cli` binary against a mock server.

mod common;

use common::{connected_cmd, logfire_cmd, COLLECTION};
use mockito::{Matcher, Server};
use predicates::prelude::*;
use serde_json::json;
use tempfile::tempdir;

const DASHBOARD_YAML: &str = "\
kind: Dashboard
metadata:
  name: Service Overview
  project: test-project
spec:
  display:
    name: Service Overview
  panels:
    Errors:
      kind: Panel
  layouts:
  - kind: Grid
    spec:
      items:
      - content:
          $ref: '#/spec/panels/Errors'
";

fn dashboard_json(name: &str, display: &str) -> serde_json::Value {
    json!({
        "kind": "Dashboard",
        "metadata": {"name": name, "project": "test-project"},
        "spec": {
            "display": {"name": display},
            "panels": {},
            "layouts": [],
            "duration": "1h",
            "refreshInterval": "30s"
        }
    })
}

#[test]
fn test_help_lists_commands() {
    let dir = tempdir().unwrap();
    logfire_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("list")
                .and(predicate::str::contains("pull"))
                .and(predicate::str::contains("push"))
                .and(predicate::str::contains("lint"))
                .and(predicate::str::contains("init")),
        );
}

#[test]
fn test_version() {
    let dir = tempdir().unwrap();
    logfire_cmd(dir.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_list_table() {
    let dir = tempdir().unwrap();
    let mut server = Server::new();
    let mock = server
        .mock("GET", COLLECTION)
        .match_header("authorization", "Bearer test-token")
        .with_status(200)
        .with_body(
            json!([{
                "id": "d87a3b26-4100-4026-9b42-ee4bbffe215e",
                "project_id": "4fbc915c-7847-4088-8516-05a1026b2b47",
                "created_at": "2024-01-01T00:00:00Z",
                "updated_at": null,
                "created_by_name": "alice",
                "updated_by_name": null,
                "dashboard_name": "Service Overview",
                "dashboard_slug": "service-overview"
            }])
            .to_string(),
        )
        .create();

    connected_cmd(dir.path(), &server.url())
        .arg("list")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("service-overview")
                .and(predicate::str::contains("Service Overview"))
                .and(predicate::str::contains("alice")),
        );
    mock.assert();
}

#[test]
fn test_list_empty() {
    let dir = tempdir().unwrap();
    let mut server = Server::new();
    server.mock("GET", COLLECTION).with_status(200).with_body("[]").create();

    connected_cmd(dir.path(), &server.url())
        .arg("ls")
        .assert()
        .success()
        .stdout(predicate::str::contains("No dashboards found."));
}

#[test]
fn test_get_prints_yaml_and_json() {
    let dir = tempdir().unwrap();
    let mut server = Server::new();
    server
        .mock("GET", format!("{}overview/", COLLECTION).as_str())
        .with_status(200)
        .with_body(json!({"dashboard": dashboard_json("overview", "Overview")}).to_string())
        .expect(2)
        .create();

    connected_cmd(dir.path(), &server.url())
        .args(["get", "overview"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("kind: Dashboard")
                .and(predicate::str::contains("refreshInterval: 30s")),
        );

    connected_cmd(dir.path(), &server.url())
        .args(["get", "overview", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"refreshInterval\": \"30s\""));
}

#[test]
fn test_pull_writes_file() {
    let dir = tempdir().unwrap();
    let mut server = Server::new();
    server
        .mock("GET", format!("{}overview/", COLLECTION).as_str())
        .with_status(200)
        .with_body(dashboard_json("overview", "Overview").to_string())
        .create();

    connected_cmd(dir.path(), &server.url())
        .args(["pull", "overview"])
        .assert()
        .success();

    let written = std::fs::read_to_string(dir.path().join("overview.yaml")).unwrap();
    assert!(written.contains("name: overview"));
    assert!(written.contains("refreshInterval: 30s"));

    connected_cmd(dir.path(), &server.url())
        .args(["pull", "overview"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn test_push_derives_slug_and_upserts() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("dash.yaml");
    std::fs::write(&file, DASHBOARD_YAML).unwrap();

    let mut server = Server::new();
    let mock = server
        .mock("PUT", format!("{}service-overview/", COLLECTION).as_str())
        .match_body(Matcher::PartialJson(json!({
            "slug": "service-overview",
            "name": "Service Overview"
        })))
        .with_status(200)
        .with_body(dashboard_json("service-overview", "Service Overview").to_string())
        .create();

    connected_cmd(dir.path(), &server.url())
        .args(["push", "dash.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("service-overview"));
    mock.assert();
}

#[test]
fn test_push_create_posts() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("dash.yaml"), DASHBOARD_YAML).unwrap();

    let mut server = Server::new();
    let mock = server
        .mock("POST", COLLECTION)
        .match_body(Matcher::PartialJson(json!({"slug": "custom"})))
        .with_status(201)
        .with_body(dashboard_json("custom", "Service Overview").to_string())
        .create();

    connected_cmd(dir.path(), &server.url())
        .args(["push", "dash.yaml", "--slug", "custom", "--create"])
        .assert()
        .success();
    mock.assert();
}

#[test]
fn test_delete_with_yes() {
    let dir = tempdir().unwrap();
    let mut server = Server::new();
    let mock = server
        .mock("DELETE", format!("{}old/", COLLECTION).as_str())
        .with_status(204)
        .create();

    connected_cmd(dir.path(), &server.url())
        .args(["delete", "old", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted dashboard old"));
    mock.assert();
}

#[test]
fn test_delete_without_prompt_requires_yes() {
    let dir = tempdir().unwrap();
    let mut server = Server::new();
    let mock = server
        .mock("DELETE", Matcher::Any)
        .with_status(204)
        .expect(0)
        .create();

    connected_cmd(dir.path(), &server.url())
        .args(["delete", "old", "--no-prompt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--yes"));
    mock.assert();
}

#[test]
fn test_no_prompt_env_accepts_numeric_switch() {
    let dir = tempdir().unwrap();
    let mut server = Server::new();
    let mock = server
        .mock("DELETE", Matcher::Any)
        .with_status(204)
        .expect(0)
        .create();

    connected_cmd(dir.path(), &server.url())
        .env("LOGFIRE_NO_PROMPT", "1")
        .args(["delete", "old"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--yes"));
    mock.assert();
}

#[test]
fn test_no_prompt_env_does_not_break_other_commands() {
    let dir = tempdir().unwrap();
    let mut server = Server::new();
    server.mock("GET", COLLECTION).with_status(200).with_body("[]").expect(2).create();

    for value in ["yes", "off"] {
        connected_cmd(dir.path(), &server.url())
            .env("LOGFIRE_NO_PROMPT", value)
            .arg("list")
            .assert()
            .success()
            .stdout(predicate::str::contains("No dashboards found."));
    }
}

#[test]
fn test_not_found_exit_code() {
    let dir = tempdir().unwrap();
    let mut server = Server::new();
    server
        .mock("GET", format!("{}missing/", COLLECTION).as_str())
        .with_status(404)
        .create();

    connected_cmd(dir.path(), &server.url())
        .args(["get", "missing"])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("missing"));
}

#[test]
fn test_auth_failure_exit_code() {
    let dir = tempdir().unwrap();
    let mut server = Server::new();
    server.mock("GET", COLLECTION).with_status(401).create();

    connected_cmd(dir.path(), &server.url())
        .arg("list")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("LOGFIRE_TOKEN"));
}

#[test]
fn test_missing_token_is_usage_error() {
    let dir = tempdir().unwrap();
    logfire_cmd(dir.path())
        .env("LOGFIRE_ORGANIZATION", "test-org")
        .env("LOGFIRE_PROJECT", "test-project")
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--token or LOGFIRE_TOKEN"));
}

#[test]
fn test_config_file_supplies_defaults() {
    let dir = tempdir().unwrap();
    let mut server = Server::new();
    let mock = server.mock("GET", COLLECTION).with_status(200).with_body("[]").create();

    logfire_cmd(dir.path())
        .args(["config", "set", "organization", "test-org"])
        .assert()
        .success();
    logfire_cmd(dir.path())
        .args(["config", "set", "project", "test-project"])
        .assert()
        .success();
    logfire_cmd(dir.path())
        .args(["config", "set", "base_url", &server.url()])
        .assert()
        .success();

    logfire_cmd(dir.path())
        .env("LOGFIRE_TOKEN", "test-token")
        .arg("list")
        .assert()
        .success();
    mock.assert();

    logfire_cmd(dir.path())
        .args(["config", "get", "project"])
        .assert()
        .success()
        .stdout("test-project\n");
}

#[test]
fn test_config_rejects_unknown_key() {
    let dir = tempdir().unwrap();
    logfire_cmd(dir.path())
        .args(["config", "set", "token", "secret"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Valid keys"));
}

#[test]
fn test_init_then_lint() {
    let dir = tempdir().unwrap();
    logfire_cmd(dir.path())
        .args(["init", "My Dashboard"])
        .assert()
        .success()
        .stdout(predicate::str::contains("my-dashboard"));

    let written = std::fs::read_to_string(dir.path().join("my-dashboard.yaml")).unwrap();
    assert!(written.contains("name: my-dashboard"));
    assert!(written.contains("project: your-project"));
    assert!(written.contains("LogfireTimeSeriesQuery"));

    logfire_cmd(dir.path())
        .args(["lint", "--no-percli", "--strict", "my-dashboard.yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Valid: my-dashboard.yaml"));

    logfire_cmd(dir.path())
        .args(["init", "My Dashboard"])
        .assert()
        .code(1);
}

#[test]
fn test_lint_reports_invalid_files() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("panel.yaml"), "kind: Panel\nmetadata:\n  name: x\nspec: {}\n")
        .unwrap();

    logfire_cmd(dir.path())
        .args(["lint", "--no-percli", "panel.yaml"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Dashboard must have kind: Dashboard"));
}

#[test]
fn test_lint_without_files_warns() {
    let dir = tempdir().unwrap();
    logfire_cmd(dir.path())
        .args(["lint", "--no-percli"])
        .assert()
        .success()
        .stderr(predicate::str::contains("No files specified."));
}
