//
//  logfire-cli
//  cli/dashboard.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Dashboard commands
//!
//! `list`, `get`, `pull`, `push` and `delete` talk to the API. Each one
//! resolves a client from the global options and performs its calls inside a
//! single connection scope.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use console::style;

use crate::config::Config;
use crate::document::{default_file_name, load_dashboard, write_dashboard, DocumentError};
use crate::interactive::confirm_destructive;
use crate::models::ListDashboardItem;
use crate::output::{format_optional, OutputFormat, OutputWriter, Spinner, TableOutput};
use crate::util::{format_relative_time, truncate};

use super::GlobalOptions;

const NAME_WIDTH: usize = 48;

#[derive(Args, Debug)]
pub struct ListCommand {}

#[derive(Args, Debug)]
pub struct GetCommand {
    /// Dashboard slug
    pub slug: String,
}

#[derive(Args, Debug)]
pub struct PullCommand {
    /// Dashboard slug
    pub slug: String,

    /// Output file [default: <slug>.yaml]
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long, short = 'f')]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct PushCommand {
    /// Dashboard YAML file
    pub file: PathBuf,

    /// Slug to push to [default: derived from metadata.name]
    #[arg(long, short = 's')]
    pub slug: Option<String>,

    /// Create with POST instead of upserting with PUT
    #[arg(long)]
    pub create: bool,
}

#[derive(Args, Debug)]
pub struct DeleteCommand {
    /// Dashboard slug
    pub slug: String,

    /// Skip confirmation
    #[arg(long, short = 'y')]
    pub yes: bool,
}

impl ListCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let mut client = global.client()?;
        let session = client.session()?;

        let spinner = Spinner::start("Fetching dashboards...");
        let result = session.list_dashboards().await;
        spinner.finish();
        let dashboards = result?;

        let writer = OutputWriter::new(global.output_format(OutputFormat::Table));
        if dashboards.is_empty() && writer.format() == OutputFormat::Table {
            writer.write_info("No dashboards found.");
            return Ok(());
        }
        writer.write_list(&dashboards)
    }
}

impl GetCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let mut client = global.client()?;
        let session = client.session()?;

        let spinner = Spinner::start(format!("Fetching dashboard '{}'...", self.slug));
        let result = session.get_dashboard(&self.slug).await;
        spinner.finish();
        let dashboard = result?;

        OutputWriter::new(global.output_format(OutputFormat::Yaml)).write(&dashboard)
    }
}

impl PullCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let path = self
            .output
            .clone()
            .unwrap_or_else(|| default_file_name(&self.slug));
        if !self.force && path.exists() {
            return Err(DocumentError::AlreadyExists(path).into());
        }

        let mut client = global.client()?;
        let session = client.session()?;

        let spinner = Spinner::start(format!("Fetching dashboard '{}'...", self.slug));
        let result = session.get_dashboard(&self.slug).await;
        spinner.finish();
        let dashboard = result?;

        write_dashboard(&path, &dashboard, self.force)?;

        let writer = OutputWriter::new(global.output_format(OutputFormat::Table));
        if writer.format() == OutputFormat::Json {
            writer.write(&serde_json::json!({
                "slug": self.slug,
                "path": path.display().to_string(),
            }))
        } else {
            writer.write_success(&format!(
                "Pulled dashboard {} to {}",
                style(&self.slug).cyan(),
                path.display()
            ));
            Ok(())
        }
    }
}

impl PushCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let dashboard = load_dashboard(&self.file)?;
        let slug = match &self.slug {
            Some(slug) => slug.clone(),
            None => dashboard
                .derived_slug()
                .with_context(|| format!("Cannot derive a slug from {}", self.file.display()))?,
        };

        let mut client = global.client()?;
        let session = client.session()?;

        let spinner = Spinner::start(format!("Pushing dashboard '{}'...", slug));
        let result = if self.create {
            session.create_dashboard(&slug, &dashboard).await
        } else {
            session.update_dashboard(&slug, &dashboard).await
        };
        spinner.finish();
        let saved = result?;

        let writer = OutputWriter::new(global.output_format(OutputFormat::Table));
        if writer.format() == OutputFormat::Json {
            writer.write(&saved)
        } else {
            let verb = if self.create { "Created" } else { "Pushed" };
            writer.write_success(&format!(
                "{} dashboard {} ({})",
                verb,
                style(&slug).cyan(),
                saved.metadata.name
            ));
            Ok(())
        }
    }
}

impl DeleteCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        confirm_destructive(
            &format!("Delete dashboard '{}'?", self.slug),
            self.yes,
            global.prompts_enabled(&config),
        )?;

        let mut client = global.settings(&config).build_client()?;
        let session = client.session()?;

        let spinner = Spinner::start(format!("Deleting dashboard '{}'...", self.slug));
        let result = session.delete_dashboard(&self.slug).await;
        spinner.finish();
        result?;

        let writer = OutputWriter::new(global.output_format(OutputFormat::Table));
        if writer.format() == OutputFormat::Json {
            writer.write(&serde_json::json!({
                "success": true,
                "deleted": self.slug,
            }))
        } else {
            writer.write_success(&format!("Deleted dashboard {}", style(&self.slug).red()));
            Ok(())
        }
    }
}

impl TableOutput for ListDashboardItem {
    fn headers() -> &'static [&'static str] {
        &["SLUG", "NAME", "UPDATED BY", "UPDATED"]
    }

    fn row(&self, color: bool) -> Vec<String> {
        let slug = if color {
            style(&self.dashboard_slug).cyan().bold().to_string()
        } else {
            self.dashboard_slug.clone()
        };
        vec![
            slug,
            truncate(&self.dashboard_name, NAME_WIDTH),
            format_optional(Some(self.last_modified_by()), color),
            format_relative_time(self.last_modified()),
        ]
    }
}
