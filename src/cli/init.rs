//
//  logfire-cli
//  cli/init.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Init command
//!
//! Writes a starter dashboard file. No network access; the project is taken
//! from the usual settings when available.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use console::style;

use crate::config::Config;
use crate::document::{default_file_name, write_dashboard};
use crate::models::{Dashboard, PLACEHOLDER_PROJECT};
use crate::output::{OutputFormat, OutputWriter};

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct InitCommand {
    /// Dashboard display name
    pub name: String,

    /// Output file [default: <slug>.yaml]
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Overwrite an existing file
    #[arg(long, short = 'f')]
    pub force: bool,
}

impl InitCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;
        let settings = global.settings(&config);

        let dashboard = Dashboard::scaffold(self.name.trim(), settings.project());
        let slug = dashboard.derived_slug()?;
        let path = self
            .output
            .clone()
            .unwrap_or_else(|| default_file_name(&slug));

        write_dashboard(&path, &dashboard, self.force)?;

        let writer = OutputWriter::new(global.output_format(OutputFormat::Table));
        if writer.format() == OutputFormat::Json {
            return writer.write(&serde_json::json!({
                "slug": slug,
                "path": path.display().to_string(),
            }));
        }

        writer.write_success(&format!(
            "Created {} ({})",
            style(path.display()).cyan(),
            slug
        ));
        if settings.project().is_none() {
            writer.write_warning(&format!(
                "metadata.project is set to '{}'; edit it before pushing",
                PLACEHOLDER_PROJECT
            ));
        }
        Ok(())
    }
}
