//
//  logfire-cli
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod completion;
mod config;
mod dashboard;
mod init;
mod lint;

pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use dashboard::{DeleteCommand, GetCommand, ListCommand, PullCommand, PushCommand};
pub use init::InitCommand;
pub use lint::LintCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::LogfireClient;
use crate::config::{Config, Settings};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "logfire-cli",
    version,
    about = "Manage Logfire dashboards from the command line",
    long_about = "logfire-cli lists, fetches, pushes and deletes Logfire dashboards.\n\n\
                  Dashboards are kept as YAML files so they can be reviewed and versioned \
                  alongside code.",
    propagate_version = true,
    after_help = "Use 'logfire-cli <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Options accepted by every command
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Logfire API token
    #[arg(long, global = true, env = "LOGFIRE_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Organization slug
    #[arg(long, visible_alias = "org", global = true, env = "LOGFIRE_ORGANIZATION")]
    pub organization: Option<String>,

    /// Project slug
    #[arg(long, short = 'p', global = true, env = "LOGFIRE_PROJECT")]
    pub project: Option<String>,

    /// API base URL [default: https://logfire-us.pydantic.dev]
    #[arg(long, global = true, env = "LOGFIRE_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds [default: 30]
    #[arg(
        long,
        global = true,
        env = "LOGFIRE_TIMEOUT",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout: Option<u64>,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable interactive prompts
    #[arg(
        long,
        global = true,
        env = "LOGFIRE_NO_PROMPT",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    pub no_prompt: bool,
}

impl GlobalOptions {
    /// Connection settings from flags and environment, completed from the
    /// configuration file.
    pub fn settings(&self, config: &Config) -> Settings {
        Settings {
            token: self.token.clone(),
            organization: self.organization.clone(),
            project: self.project.clone(),
            base_url: self.base_url.clone(),
            timeout: self.timeout,
        }
        .with_config(config)
    }

    /// Builds a closed client from the resolved settings.
    pub fn client(&self) -> Result<LogfireClient> {
        let config = Config::load()?;
        Ok(self.settings(&config).build_client()?)
    }

    /// `Json` when `--json` is set, `fallback` otherwise.
    pub fn output_format(&self, fallback: OutputFormat) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            fallback
        }
    }

    /// Whether interactive prompts may be shown.
    pub fn prompts_enabled(&self, config: &Config) -> bool {
        !self.no_prompt && config.prompts_enabled()
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List dashboards in the project
    #[command(visible_alias = "ls")]
    List(ListCommand),

    /// Print a dashboard
    Get(GetCommand),

    /// Download a dashboard to a YAML file
    Pull(PullCommand),

    /// Upload a dashboard from a YAML file
    Push(PushCommand),

    /// Delete a dashboard
    #[command(visible_alias = "rm")]
    Delete(DeleteCommand),

    /// Validate dashboard YAML files
    Lint(LintCommand),

    /// Scaffold a new dashboard file
    Init(InitCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print version information
    Version,
}
