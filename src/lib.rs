//
//  logfire-cli
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Logfire CLI Library
//!
//! A client and command-line tool for managing Logfire dashboards as code.
//!
//! ## Overview
//!
//! Dashboards are Perses-style documents. This library fetches them from
//! Logfire's dashboard API, writes them to YAML files for review and version
//! control, validates them, and pushes them back.
//!
//! ## Features
//!
//! - **Typed API client**: list, get, create, update and delete dashboards
//!   inside an explicit connection scope
//! - **Tolerant decoding**: wrapped and bare response shapes are both accepted
//! - **YAML round trips**: documents keep their field order and wire names
//! - **Linting**: `percli lint` when installed, structural checks otherwise
//! - **Scriptable**: JSON output, non-interactive mode and stable exit codes
//!
//! ## Module Structure
//!
//! - [`api`]: HTTP client and error taxonomy
//! - [`models`]: dashboard document model and API envelopes
//! - [`document`]: YAML file I/O and structural validation
//! - [`config`]: configuration file and settings resolution
//! - [`cli`]: command-line interface definitions using clap
//! - [`output`]: output formatting (Table, JSON, YAML) and spinners
//! - [`interactive`]: confirmation prompts
//! - [`util`]: utility functions
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use logfire_cli::api::LogfireClient;
//! use logfire_cli::document::write_dashboard;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let mut client = LogfireClient::new("token", "acme", "checkout");
//! let session = client.session()?;
//!
//! for item in session.list_dashboards().await? {
//!     let dashboard = session.get_dashboard(&item.dashboard_slug).await?;
//!     let path = format!("{}.yaml", item.dashboard_slug);
//!     write_dashboard(path.as_ref(), &dashboard, true)?;
//! }
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions.
///
/// Contains all CLI commands, arguments, and subcommands defined using the
/// clap derive API.
pub mod cli;

/// API client for Logfire's dashboard endpoints.
///
/// The client handles authentication headers, request paths, response
/// classification and decoding.
pub mod api;

/// Dashboard document model and API request/response types.
pub mod models;

/// Dashboard YAML files on disk.
pub mod document;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/logfire-cli/config.toml`
/// - macOS: `~/Library/Application Support/logfire-cli/config.toml`
/// - Windows: `%APPDATA%\logfire-cli\config\config.toml`
pub mod config;

/// Output formatting and display utilities.
pub mod output;

/// Interactive terminal prompts.
pub mod interactive;

/// Common utility functions.
pub mod util;

pub use api::{LogfireClient, LogfireError};

pub use cli::Cli;

pub use config::Config;

pub use models::Dashboard;

/// Application name used in completions and messages.
pub const APP_NAME: &str = "logfire-cli";

/// Application version from Cargo.toml.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Process exit codes.
///
/// Codes are powers of two so wrappers can test them individually.
pub mod exit_codes {
    /// Command completed successfully.
    pub const SUCCESS: i32 = 0;

    /// General error: API failure, file error, lint failure.
    pub const ERROR: i32 = 1;

    /// Invalid usage or missing configuration.
    pub const USAGE: i32 = 2;

    /// Invalid or expired token, or access denied.
    pub const AUTH_ERROR: i32 = 4;

    /// The dashboard does not exist.
    pub const NOT_FOUND: i32 = 8;

    /// The user declined a confirmation prompt.
    pub const CANCELLED: i32 = 16;
}
