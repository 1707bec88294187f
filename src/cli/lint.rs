//
//  logfire-cli
//  cli/lint.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Lint command
//!
//! Validates dashboard files with `percli lint` when the Perses CLI is on
//! `PATH`, and with the built-in structural checks otherwise.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use anyhow::{bail, Result};
use clap::Args;
use console::style;
use serde::Serialize;

use crate::document::{validate_file, Issue, ValidationReport};
use crate::output::{OutputFormat, OutputWriter};

use super::GlobalOptions;

const PERCLI: &str = "percli";

#[derive(Args, Debug)]
pub struct LintCommand {
    /// Dashboard YAML files
    pub files: Vec<PathBuf>,

    /// Treat warnings as failures
    #[arg(long)]
    pub strict: bool,

    /// Skip percli even when it is installed
    #[arg(long)]
    pub no_percli: bool,
}

/// Which validator checked a file.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "lowercase")]
enum Validator {
    Percli,
    Builtin,
}

#[derive(Debug, Serialize)]
struct LintResult {
    file: String,
    validator: Validator,
    valid: bool,
    #[serde(flatten)]
    report: ValidationReport,
}

impl LintCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let writer = OutputWriter::new(global.output_format(OutputFormat::Table));

        if self.files.is_empty() {
            writer.write_warning("No files specified.");
            return Ok(());
        }

        let use_percli = !self.no_percli && percli_available();
        tracing::debug!(use_percli, "selected validator");

        let results: Vec<LintResult> = self
            .files
            .iter()
            .map(|file| self.lint_file(file, use_percli))
            .collect();

        if writer.format() == OutputFormat::Json {
            writer.write(&results)?;
        } else {
            for result in &results {
                print_result(&writer, result);
            }
        }

        let failed = results.iter().filter(|r| !r.valid).count();
        if failed > 0 {
            bail!("{} of {} file(s) failed validation", failed, results.len());
        }
        Ok(())
    }

    fn lint_file(&self, file: &Path, use_percli: bool) -> LintResult {
        let (validator, report) = if use_percli {
            (Validator::Percli, run_percli(file))
        } else {
            let report = validate_file(file).unwrap_or_else(|e| ValidationReport {
                issues: vec![Issue::error(e.to_string())],
            });
            (Validator::Builtin, report)
        };

        LintResult {
            file: file.display().to_string(),
            validator,
            valid: report.passes(self.strict),
            report,
        }
    }
}

fn print_result(writer: &OutputWriter, result: &LintResult) {
    if result.valid {
        writer.write_success(&format!("Valid: {}", result.file));
    } else {
        writer.write_error(&format!("Validation failed: {}", result.file));
    }
    for issue in &result.report.issues {
        let line = format!("  {}", issue);
        if writer.color_enabled() {
            eprintln!("{}", style(line).dim());
        } else {
            eprintln!("{}", line);
        }
    }
}

/// Returns `true` if `percli version` runs successfully.
fn percli_available() -> bool {
    Command::new(PERCLI)
        .arg("version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|status| status.success())
        .unwrap_or(false)
}

/// Runs `percli lint -f FILE`, turning its output into a report.
fn run_percli(file: &Path) -> ValidationReport {
    let output = match Command::new(PERCLI).arg("lint").arg("-f").arg(file).output() {
        Ok(output) => output,
        Err(e) => {
            return ValidationReport {
                issues: vec![Issue::error(format!("failed to run {}: {}", PERCLI, e))],
            }
        }
    };

    if output.status.success() {
        return ValidationReport::default();
    }

    let issues = [&output.stderr, &output.stdout]
        .iter()
        .flat_map(|bytes| String::from_utf8_lossy(bytes).lines().map(str::to_string).collect::<Vec<_>>())
        .filter(|line| !line.trim().is_empty())
        .map(Issue::error)
        .collect::<Vec<_>>();

    ValidationReport {
        issues: if issues.is_empty() {
            vec![Issue::error(format!("{} lint exited with {}", PERCLI, output.status))]
        } else {
            issues
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn lint(strict: bool) -> LintCommand {
        LintCommand {
            files: Vec::new(),
            strict,
            no_percli: true,
        }
    }

    #[test]
    fn test_missing_file_fails() {
        let dir = tempdir().unwrap();
        let result = lint(false).lint_file(&dir.path().join("absent.yaml"), false);
        assert!(!result.valid);
        assert_eq!(result.report.issues.len(), 1);
    }

    #[test]
    fn test_strict_fails_on_warnings() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.yaml");
        std::fs::write(
            &path,
            "kind: Dashboard\nmetadata:\n  name: empty\nspec:\n  display:\n    name: Empty\n",
        )
        .unwrap();

        assert!(lint(false).lint_file(&path, false).valid);
        assert!(!lint(true).lint_file(&path, false).valid);
    }

    #[test]
    fn test_json_shape() {
        let result = LintResult {
            file: "a.yaml".to_string(),
            validator: Validator::Builtin,
            valid: false,
            report: ValidationReport {
                issues: vec![Issue::error("boom")],
            },
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["validator"], "builtin");
        assert_eq!(json["issues"][0]["severity"], "error");
        assert_eq!(json["issues"][0]["message"], "boom");
    }
}
