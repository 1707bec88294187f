//
//  logfire-cli
//  config/settings.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Connection settings resolution.
//!
//! Each setting is taken from the first source that provides a non-empty
//! value:
//!
//! 1. command-line flag
//! 2. environment variable (`LOGFIRE_TOKEN`, `LOGFIRE_ORGANIZATION`, ...)
//! 3. configuration file
//! 4. built-in default
//!
//! Flags and environment variables are merged by clap before they reach
//! [`Settings`]; this module layers the configuration file and the defaults
//! on top.

use std::time::Duration;

use url::Url;

use super::Config;
use crate::api::{LogfireClient, LogfireError, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

/// Connection settings gathered from flags and environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    /// API token. Never read from the configuration file.
    pub token: Option<String>,
    /// Organization slug.
    pub organization: Option<String>,
    /// Project slug.
    pub project: Option<String>,
    /// API base URL.
    pub base_url: Option<String>,
    /// Request timeout in seconds.
    pub timeout: Option<u64>,
}

impl Settings {
    /// Fills unset values from the configuration file.
    ///
    /// Empty strings count as unset, so `LOGFIRE_PROJECT=` falls through to
    /// the file.
    pub fn with_config(self, config: &Config) -> Self {
        Self {
            token: non_empty(self.token),
            organization: non_empty(self.organization)
                .or_else(|| config.defaults.organization.clone()),
            project: non_empty(self.project).or_else(|| config.defaults.project.clone()),
            base_url: non_empty(self.base_url).or_else(|| config.defaults.base_url.clone()),
            timeout: self.timeout.or(config.defaults.timeout),
        }
    }

    /// Returns the resolved project, if any.
    pub fn project(&self) -> Option<&str> {
        self.project.as_deref().filter(|p| !p.is_empty())
    }

    /// Builds a client from the resolved settings.
    ///
    /// The client is returned closed; callers enter its connection scope
    /// with [`LogfireClient::session`].
    ///
    /// # Errors
    ///
    /// - Usage error when the token, organization or project is missing
    /// - Invalid-input error when the base URL is not an http(s) URL
    pub fn build_client(&self) -> Result<LogfireClient, LogfireError> {
        let token = require(&self.token, "--token", "LOGFIRE_TOKEN")?;
        let organization = require(&self.organization, "--organization", "LOGFIRE_ORGANIZATION")?;
        let project = require(&self.project, "--project", "LOGFIRE_PROJECT")?;

        let base_url = match self.base_url.as_deref() {
            Some(url) if !url.is_empty() => validate_base_url(url)?,
            _ => DEFAULT_BASE_URL.to_string(),
        };
        let timeout = self.timeout.map(Duration::from_secs).unwrap_or(DEFAULT_TIMEOUT);

        tracing::debug!(%organization, %project, %base_url, ?timeout, "resolved connection settings");

        Ok(LogfireClient::new(token, organization, project)
            .with_base_url(base_url)
            .with_timeout(timeout))
    }
}

/// Validates an API base URL and returns it without a trailing slash.
///
/// # Errors
///
/// Returns an invalid-input error if the value does not parse as an
/// absolute URL or its scheme is not `http` or `https`.
///
/// # Examples
///
/// ```rust
/// use logfire_cli::config::validate_base_url;
///
/// assert_eq!(
///     validate_base_url("https://logfire-eu.pydantic.dev/").unwrap(),
///     "https://logfire-eu.pydantic.dev"
/// );
/// assert!(validate_base_url("logfire-eu.pydantic.dev").is_err());
/// ```
pub fn validate_base_url(value: &str) -> Result<String, LogfireError> {
    let parsed = Url::parse(value.trim())
        .map_err(|e| LogfireError::invalid_input(format!("invalid base URL '{}': {}", value, e)))?;
    match parsed.scheme() {
        "http" | "https" => Ok(value.trim().trim_end_matches('/').to_string()),
        scheme => Err(LogfireError::invalid_input(format!(
            "invalid base URL '{}': unsupported scheme '{}'",
            value, scheme
        ))),
    }
}

fn require<'a>(value: &'a Option<String>, flag: &str, env: &str) -> Result<&'a str, LogfireError> {
    value
        .as_deref()
        .filter(|v| !v.is_empty())
        .ok_or_else(|| {
            LogfireError::usage(format!(
                "Missing required option: {} or {} environment variable",
                flag, env
            ))
        })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ErrorKind;

    fn complete() -> Settings {
        Settings {
            token: Some("tok".to_string()),
            organization: Some("acme".to_string()),
            project: Some("web".to_string()),
            base_url: None,
            timeout: None,
        }
    }

    #[test]
    fn test_builds_client_with_defaults() {
        let client = complete().build_client().unwrap();
        assert_eq!(client.organization(), "acme");
        assert_eq!(client.project(), "web");
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        assert_eq!(client.timeout(), DEFAULT_TIMEOUT);
        assert!(!client.is_open());
    }

    #[test]
    fn test_missing_values_are_usage_errors() {
        for (settings, needle) in [
            (Settings { token: None, ..complete() }, "LOGFIRE_TOKEN"),
            (Settings { organization: Some(String::new()), ..complete() }, "LOGFIRE_ORGANIZATION"),
            (Settings { project: None, ..complete() }, "LOGFIRE_PROJECT"),
        ] {
            let err = settings.build_client().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Usage);
            assert!(err.to_string().contains(needle), "{}", err);
        }
    }

    #[test]
    fn test_config_fills_gaps_only() {
        let mut config = Config::default();
        config.set("organization", "from-file").unwrap();
        config.set("project", "file-project").unwrap();
        config.set("timeout", "5").unwrap();
        config.set("base_url", "http://localhost:8000").unwrap();

        let settings = Settings {
            project: Some(String::new()),
            ..complete()
        }
        .with_config(&config);

        assert_eq!(settings.organization.as_deref(), Some("acme"));
        assert_eq!(settings.project(), Some("file-project"));

        let client = settings.build_client().unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");
        assert_eq!(client.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_rejects_bad_base_url() {
        let settings = Settings {
            base_url: Some("not a url".to_string()),
            ..complete()
        };
        assert_eq!(settings.build_client().unwrap_err().kind(), ErrorKind::Client);
        assert!(validate_base_url("file:///tmp").is_err());
        assert_eq!(validate_base_url("http://127.0.0.1:1234").unwrap(), "http://127.0.0.1:1234");
    }
}
