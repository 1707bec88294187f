//
//  logfire-cli
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Output formatting for the Logfire CLI:
//!
//! - **Table format**: human-readable tables for listings
//! - **JSON format**: machine-readable output for scripting (`--json`)
//! - **YAML format**: dashboard documents, the same shape `pull` writes
//!
//! ## Architecture
//!
//! - [`table`]: table formatting using `comfy_table`
//! - [`json`]: JSON serialization using `serde_json`
//! - [`progress`]: spinners for network calls using `indicatif`
//!
//! Data goes to stdout; status lines (warnings, errors, spinners) go to
//! stderr so piped output stays clean.
//!
//! ## Example
//!
//! ```rust,ignore
//! use logfire_cli::output::{OutputFormat, OutputWriter};
//!
//! let writer = OutputWriter::new(OutputFormat::Json);
//! writer.write_list(&dashboards)?;
//! writer.write_success("Pushed dashboard 'service-overview'");
//! ```

mod json;
mod progress;
mod table;

pub use json::*;
pub use progress::*;
pub use table::*;

use serde::Serialize;

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable tables for listings.
    #[default]
    Table,
    /// Pretty-printed JSON.
    Json,
    /// YAML documents.
    Yaml,
}

/// Writes command results in the selected [`OutputFormat`].
///
/// Single values have no table form; under [`OutputFormat::Table`] they
/// are written as YAML.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    /// Creates a writer, detecting color support from the terminal.
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    /// Returns the writer's format.
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Returns `true` if styled output is enabled.
    pub fn color_enabled(&self) -> bool {
        self.color
    }

    /// Writes a single value as JSON or YAML.
    pub fn write<T: Serialize + ?Sized>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value),
            OutputFormat::Yaml | OutputFormat::Table => write_yaml(value),
        }
    }

    /// Writes a list of values.
    ///
    /// Under [`OutputFormat::Table`] the rows are rendered with the
    /// headers from [`TableOutput::headers`].
    pub fn write_list<T: Serialize + TableOutput>(&self, values: &[T]) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(values),
            OutputFormat::Yaml => write_yaml(values),
            OutputFormat::Table => {
                TableBuilder::new()
                    .color(self.color)
                    .headers(T::headers().iter().copied())
                    .rows(values.iter().map(|v| v.row(self.color)))
                    .print();
                Ok(())
            }
        }
    }

    /// Writes an error line to stderr.
    pub fn write_error(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("error:").red().bold(), msg);
        } else {
            eprintln!("error: {}", msg);
        }
    }

    /// Writes a warning line to stderr.
    pub fn write_warning(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    /// Writes a plain informational line to stdout.
    pub fn write_info(&self, msg: &str) {
        println!("{}", msg);
    }

    /// Writes a success line to stdout.
    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

/// Types that can be rendered as a row of a table.
///
/// # Example
///
/// ```rust,ignore
/// impl TableOutput for ListDashboardItem {
///     fn headers() -> &'static [&'static str] {
///         &["SLUG", "NAME"]
///     }
///
///     fn row(&self, _color: bool) -> Vec<String> {
///         vec![self.dashboard_slug.clone(), self.dashboard_name.clone()]
///     }
/// }
/// ```
pub trait TableOutput {
    /// Column headers, in display order.
    fn headers() -> &'static [&'static str];

    /// Cell values for this item, matching [`TableOutput::headers`].
    fn row(&self, color: bool) -> Vec<String>;
}

/// Writes a value as YAML to stdout.
pub fn write_yaml<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<()> {
    let yaml = serde_yaml::to_string(value)?;
    print!("{}", yaml);
    Ok(())
}
