//
//  logfire-cli
//  document/validate.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Structural validation of dashboard YAML.
//!
//! This is the fallback used by `lint` when `percli` is not installed. It
//! only checks shape, never query semantics.
//!
//! # Checks
//!
//! | Severity | Check |
//! |----------|-------|
//! | error | YAML parses and is a mapping with string keys |
//! | error | `kind: Dashboard` |
//! | error | `metadata` and `spec` sections exist |
//! | error | `metadata.name` exists |
//! | error | the document decodes into the dashboard model |
//! | warning | `metadata.name` is already in slug form |
//! | warning | the dashboard has at least one panel |
//! | warning | layout `$ref`s point at existing panels |

use std::fmt;
use std::path::Path;

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use super::DocumentError;
use crate::models::Dashboard;
use crate::util::slugify;

const PANEL_REF_PREFIX: &str = "#/spec/panels/";

/// How serious a validation finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The document cannot be pushed.
    Error,
    /// The document is usable but probably not what was intended.
    Warning,
}

/// A single validation finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    /// Severity of the finding.
    pub severity: Severity,
    /// Human readable description.
    pub message: String,
}

impl Issue {
    /// Creates an error finding.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }

    /// Creates a warning finding.
    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            message: message.into(),
        }
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", label, self.message)
    }
}

/// All findings for one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Findings in the order they were detected.
    pub issues: Vec<Issue>,
}

impl ValidationReport {
    /// Returns `true` if any finding is an error.
    pub fn has_errors(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Error)
    }

    /// Returns `true` if any finding is a warning.
    pub fn has_warnings(&self) -> bool {
        self.issues.iter().any(|i| i.severity == Severity::Warning)
    }

    /// Returns `true` if the document passes; in strict mode warnings fail too.
    pub fn passes(&self, strict: bool) -> bool {
        !self.has_errors() && !(strict && self.has_warnings())
    }
}

/// Validates a dashboard file.
///
/// # Errors
///
/// Only I/O failures are errors; invalid content is reported in the
/// returned [`ValidationReport`].
pub fn validate_file(path: &Path) -> Result<ValidationReport, DocumentError> {
    let content = super::read_file(path)?;
    Ok(validate_str(&content))
}

/// Validates dashboard YAML text.
pub fn validate_str(content: &str) -> ValidationReport {
    let mut report = ValidationReport::default();

    let value: Value = match serde_yaml::from_str(content) {
        Ok(value) => value,
        Err(e) => {
            report.issues.push(Issue::error(format!("invalid YAML: {}", e)));
            return report;
        }
    };

    let Some(root) = value.as_mapping() else {
        report
            .issues
            .push(Issue::error("Dashboard must be a YAML mapping/dictionary"));
        return report;
    };
    if !root.keys().all(Value::is_string) {
        report
            .issues
            .push(Issue::error("Dashboard keys must all be strings"));
        return report;
    }

    check_sections(root, &mut report);
    if report.has_errors() {
        return report;
    }

    match serde_yaml::from_value::<Dashboard>(value.clone()) {
        Ok(dashboard) => check_dashboard(&dashboard, &mut report),
        Err(e) => report
            .issues
            .push(Issue::error(format!("Dashboard does not match the expected shape: {}", e))),
    }

    report
}

fn check_sections(root: &Mapping, report: &mut ValidationReport) {
    if root.get("kind").and_then(Value::as_str) != Some("Dashboard") {
        report
            .issues
            .push(Issue::error("Dashboard must have kind: Dashboard"));
    }

    match root.get("metadata") {
        None => report
            .issues
            .push(Issue::error("Dashboard must have metadata section")),
        Some(metadata) => {
            let has_name = metadata
                .as_mapping()
                .is_some_and(|m| m.contains_key("name"));
            if !has_name {
                report
                    .issues
                    .push(Issue::error("Dashboard metadata must include name"));
            }
        }
    }

    if !root.contains_key("spec") {
        report
            .issues
            .push(Issue::error("Dashboard must have spec section"));
    }
}

fn check_dashboard(dashboard: &Dashboard, report: &mut ValidationReport) {
    let name = &dashboard.metadata.name;
    let slug = slugify(name.trim());
    if slug.is_empty() {
        report
            .issues
            .push(Issue::error("Dashboard metadata.name must not be blank"));
    } else if slug != *name {
        report.issues.push(Issue::warning(format!(
            "metadata.name '{}' is not in slug form; it will be pushed as '{}'",
            name, slug
        )));
    }

    if dashboard.spec.panels.is_empty() {
        report.issues.push(Issue::warning("Dashboard has no panels"));
    }

    for reference in panel_refs(&dashboard.spec.layouts) {
        let known = reference
            .strip_prefix(PANEL_REF_PREFIX)
            .is_some_and(|id| dashboard.spec.panels.contains_key(id));
        if !known {
            report.issues.push(Issue::warning(format!(
                "layout references unknown panel '{}'",
                reference
            )));
        }
    }
}

/// Collects every `$ref` string found anywhere inside the layouts.
fn panel_refs(layouts: &[serde_json::Value]) -> Vec<&str> {
    fn walk<'a>(value: &'a serde_json::Value, out: &mut Vec<&'a str>) {
        match value {
            serde_json::Value::Object(map) => {
                for (key, child) in map {
                    match (key.as_str(), child.as_str()) {
                        ("$ref", Some(reference)) => out.push(reference),
                        _ => walk(child, out),
                    }
                }
            }
            serde_json::Value::Array(items) => items.iter().for_each(|item| walk(item, out)),
            _ => {}
        }
    }

    let mut refs = Vec::new();
    for layout in layouts {
        walk(layout, &mut refs);
    }
    refs
}
