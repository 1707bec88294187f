//
//  logfire-cli
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! Reads and edits the defaults stored in the configuration file. The API
//! token is deliberately not one of the keys.

use anyhow::Result;
use clap::{Args, Subcommand};
use console::style;

use crate::config::{validate_key, Config};
use crate::output::{OutputFormat, OutputWriter, TableBuilder};

use super::GlobalOptions;

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Print a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// Remove a configuration value
    Unset(UnsetArgs),

    /// List all configuration values
    #[command(visible_alias = "ls")]
    List,

    /// Print the configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// New value
    pub value: String,
}

#[derive(Args, Debug)]
pub struct UnsetArgs {
    /// Configuration key
    pub key: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let writer = OutputWriter::new(global.output_format(OutputFormat::Table));
        match &self.command {
            ConfigSubcommand::Get(args) => self.get(args, &writer),
            ConfigSubcommand::Set(args) => self.set(args, &writer),
            ConfigSubcommand::Unset(args) => self.unset(args, &writer),
            ConfigSubcommand::List => self.list(&writer),
            ConfigSubcommand::Path => self.path(&writer),
        }
    }

    fn get(&self, args: &GetArgs, writer: &OutputWriter) -> Result<()> {
        validate_key(&args.key)?;
        let config = Config::load()?;
        let value = config.get(&args.key);

        if writer.format() == OutputFormat::Json {
            writer.write(&serde_json::json!({
                "key": args.key,
                "value": value,
            }))
        } else {
            if let Some(v) = value {
                writer.write_info(&v);
            }
            Ok(())
        }
    }

    fn set(&self, args: &SetArgs, writer: &OutputWriter) -> Result<()> {
        let mut config = Config::load()?;
        config.set(&args.key, &args.value)?;
        config.save()?;

        if writer.format() == OutputFormat::Json {
            writer.write(&serde_json::json!({
                "success": true,
                "key": args.key,
                "value": config.get(&args.key),
            }))
        } else {
            writer.write_success(&format!(
                "Set {} = {}",
                style(&args.key).cyan(),
                config.get(&args.key).unwrap_or_default()
            ));
            Ok(())
        }
    }

    fn unset(&self, args: &UnsetArgs, writer: &OutputWriter) -> Result<()> {
        let mut config = Config::load()?;
        config.unset(&args.key)?;
        config.save()?;

        if writer.format() == OutputFormat::Json {
            writer.write(&serde_json::json!({
                "success": true,
                "key": args.key,
            }))
        } else {
            writer.write_success(&format!("Unset {}", style(&args.key).cyan()));
            Ok(())
        }
    }

    fn list(&self, writer: &OutputWriter) -> Result<()> {
        let config = Config::load()?;
        let entries = config.entries();

        if writer.format() == OutputFormat::Json {
            let map: serde_json::Map<String, serde_json::Value> = entries
                .into_iter()
                .map(|(key, value)| (key.to_string(), value.into()))
                .collect();
            return writer.write(&map);
        }

        TableBuilder::new()
            .color(writer.color_enabled())
            .headers(["KEY", "VALUE"])
            .rows(
                entries
                    .into_iter()
                    .map(|(key, value)| [key.to_string(), value.unwrap_or_else(|| "-".to_string())]),
            )
            .print();
        Ok(())
    }

    fn path(&self, writer: &OutputWriter) -> Result<()> {
        let path = Config::config_path()?;
        if writer.format() == OutputFormat::Json {
            writer.write(&serde_json::json!({
                "path": path.display().to_string(),
                "exists": path.exists(),
            }))
        } else {
            writer.write_info(&path.display().to_string());
            Ok(())
        }
    }
}
