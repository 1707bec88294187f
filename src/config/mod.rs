//
//  logfire-cli
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Persistent defaults for the Logfire CLI, stored as TOML in a
//! platform-specific directory, and the resolution of connection settings
//! from flags, environment and that file.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/logfire-cli/config.toml`
//! - **macOS**: `~/Library/Application Support/logfire-cli/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\logfire-cli\config\config.toml`
//!
//! The location can be overridden with the `LOGFIRE_CLI_CONFIG` environment
//! variable.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [defaults]
//! organization = "acme"
//! project = "checkout"
//! base_url = "https://logfire-eu.pydantic.dev"
//! timeout = 60
//!
//! [core]
//! prompt = "disabled"
//! ```
//!
//! The API token is never written to this file.
//!
//! ## Submodules
//!
//! - [`settings`]: flag → environment → file → default resolution

mod settings;

pub use settings::*;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::LogfireError;

/// Environment variable that overrides the configuration file path.
pub const CONFIG_PATH_ENV: &str = "LOGFIRE_CLI_CONFIG";

/// Keys accepted by `config get|set|unset`.
pub const VALID_KEYS: &[&str] = &["organization", "project", "base_url", "timeout", "prompt"];

const PROMPT_ENABLED: &str = "enabled";
const PROMPT_DISABLED: &str = "disabled";

/// Global configuration container for the Logfire CLI.
///
/// # Examples
///
/// ```rust
/// use logfire_cli::config::Config;
///
/// let config = Config::default();
/// assert!(config.prompts_enabled());
/// assert_eq!(config.get("project"), None);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// Fallback values for connection options.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// General CLI behaviour.
    #[serde(default)]
    pub core: CoreConfig,
}

/// Fallback connection options, used when neither a flag nor an
/// environment variable provides a value.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct DefaultsConfig {
    /// Default organization.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    /// Default project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Default API base URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Default request timeout in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

/// Core configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CoreConfig {
    /// Interactive prompt behaviour, `"enabled"` or `"disabled"`.
    ///
    /// Setting to `"disabled"` is useful for scripting and CI environments;
    /// destructive commands then require `--yes`.
    #[serde(default = "default_prompt")]
    pub prompt: String,
}

fn default_prompt() -> String {
    PROMPT_ENABLED.to_string()
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
        }
    }
}

impl Config {
    /// Loads configuration from the default location.
    ///
    /// A missing file is not an error; defaults are returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not
    /// valid TOML.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to an explicit path, creating parent
    /// directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        tracing::debug!(path = %path.display(), "saved config");
        Ok(())
    }

    /// Returns the path to the configuration file.
    ///
    /// `LOGFIRE_CLI_CONFIG` wins when set and non-empty; otherwise the
    /// platform config directory is used. The file may not exist.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }
        let dirs = ProjectDirs::from("", "", "logfire-cli")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Returns `true` unless prompts have been disabled.
    pub fn prompts_enabled(&self) -> bool {
        self.core.prompt != PROMPT_DISABLED
    }

    /// Gets a configuration value by key.
    ///
    /// Returns `None` for unknown keys and for unset optional values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use logfire_cli::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.get("prompt"), Some("enabled".to_string()));
    /// assert_eq!(config.get("timeout"), None);
    /// assert_eq!(config.get("token"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "organization" => self.defaults.organization.clone(),
            "project" => self.defaults.project.clone(),
            "base_url" => self.defaults.base_url.clone(),
            "timeout" => self.defaults.timeout.map(|t| t.to_string()),
            "prompt" => Some(self.core.prompt.clone()),
            _ => None,
        }
    }

    /// Sets a configuration value by key.
    ///
    /// # Errors
    ///
    /// Returns a usage error for unknown keys, and an invalid-input error
    /// when the value does not fit the key:
    ///
    /// | Key | Accepted values |
    /// |-----|-----------------|
    /// | `timeout` | positive integer (seconds) |
    /// | `prompt` | `enabled`, `disabled` |
    /// | `base_url` | absolute `http`/`https` URL |
    ///
    /// Changes are only persisted when [`Config::save`] is called.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), LogfireError> {
        match key {
            "organization" => self.defaults.organization = Some(value.to_string()),
            "project" => self.defaults.project = Some(value.to_string()),
            "base_url" => self.defaults.base_url = Some(validate_base_url(value)?),
            "timeout" => self.defaults.timeout = Some(parse_timeout(value)?),
            "prompt" => {
                if value != PROMPT_ENABLED && value != PROMPT_DISABLED {
                    return Err(LogfireError::invalid_input(format!(
                        "prompt must be '{}' or '{}', got '{}'",
                        PROMPT_ENABLED, PROMPT_DISABLED, value
                    )));
                }
                self.core.prompt = value.to_string();
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// Removes a configuration value, restoring its default.
    pub fn unset(&mut self, key: &str) -> Result<(), LogfireError> {
        match key {
            "organization" => self.defaults.organization = None,
            "project" => self.defaults.project = None,
            "base_url" => self.defaults.base_url = None,
            "timeout" => self.defaults.timeout = None,
            "prompt" => self.core.prompt = default_prompt(),
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// Returns every known key with its current value.
    pub fn entries(&self) -> Vec<(&'static str, Option<String>)> {
        VALID_KEYS.iter().map(|key| (*key, self.get(key))).collect()
    }
}

/// Returns the canonical form of a known key.
///
/// # Errors
///
/// Returns a usage error listing [`VALID_KEYS`] for unknown keys.
pub fn validate_key(key: &str) -> Result<&'static str, LogfireError> {
    VALID_KEYS
        .iter()
        .copied()
        .find(|valid| *valid == key)
        .ok_or_else(|| unknown_key(key))
}

fn unknown_key(key: &str) -> LogfireError {
    LogfireError::usage(format!(
        "Unknown config key '{}'. Valid keys: {}",
        key,
        VALID_KEYS.join(", ")
    ))
}

/// Parses a timeout in whole seconds.
pub fn parse_timeout(value: &str) -> Result<u64, LogfireError> {
    match value.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(LogfireError::invalid_input(format!(
            "timeout must be a positive number of seconds, got '{}'",
            value
        ))),
    }
}
