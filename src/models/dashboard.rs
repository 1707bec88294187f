//
//  logfire-cli
//  models/dashboard.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Perses dashboard document types.
//!
//! A dashboard document is the user-facing entity: it is read from and
//! written to YAML files, and sent to / received from the Logfire API.
//!
//! # Document Shape
//!
//! ```text
//! kind: Dashboard
//! metadata:
//!   name: my-dashboard        # required, canonical identity
//!   project: my-project
//!   version: 3                # server assigned
//!   createdAt: ...            # server assigned
//!   updatedAt: ...            # server assigned
//! spec:
//!   display:
//!     name: My Dashboard
//!     description: ...
//!   datasources: {}           # opaque
//!   panels: {}                # opaque
//!   layouts: []               # opaque
//!   variables: []             # opaque
//!   duration: 1h
//!   refreshInterval: 0s
//! ```
//!
//! # Field Names
//!
//! Wire names are camelCase (`createdAt`, `refreshInterval`). Both the wire
//! name and the snake_case name are accepted on input; output always uses
//! the wire name. Absent optional fields are omitted from output, empty
//! collections are not.
//!
//! # Notes
//!
//! - `panels`, `layouts`, `variables` and `datasources` belong to the Perses
//!   schema and are carried as raw JSON values, in document order
//! - Unknown top-level, metadata and spec fields are ignored on input

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::api::LogfireError;
use crate::util::slugify;

/// Default time range shown by a dashboard.
pub const DEFAULT_DURATION: &str = "1h";

/// Default auto-refresh interval (`0s` disables refresh).
pub const DEFAULT_REFRESH_INTERVAL: &str = "0s";

/// The `kind` discriminator of a dashboard document.
///
/// Only `Dashboard` is accepted; documents without a `kind` default to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DashboardKind {
    /// The literal `Dashboard`.
    #[default]
    Dashboard,
}

/// A Perses dashboard definition as used by Logfire.
///
/// # Example
///
/// ```rust
/// use logfire_cli::models::Dashboard;
///
/// let dashboard = Dashboard::new("service-overview", "Service Overview");
/// assert_eq!(dashboard.spec.duration, "1h");
/// assert_eq!(dashboard.derived_slug().unwrap(), "service-overview");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dashboard {
    /// Resource kind, always `Dashboard`.
    #[serde(default)]
    pub kind: DashboardKind,

    /// Identity and server bookkeeping.
    pub metadata: DashboardMetadata,

    /// Display settings and the opaque Perses payloads.
    pub spec: DashboardSpec,
}

/// Metadata for a dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetadata {
    /// Dashboard name, unique within the project.
    pub name: String,

    /// Project the dashboard belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,

    /// Version number assigned by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,

    /// Creation timestamp assigned by the server.
    #[serde(
        rename = "createdAt",
        alias = "created_at",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<String>,

    /// Last update timestamp assigned by the server.
    #[serde(
        rename = "updatedAt",
        alias = "updated_at",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<String>,
}

/// Display settings shown in the Logfire UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardDisplay {
    /// Human readable name.
    pub name: String,

    /// Optional description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// The `spec` section of a dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSpec {
    /// Display settings.
    pub display: DashboardDisplay,

    /// Datasource definitions keyed by name.
    #[serde(default)]
    pub datasources: Map<String, Value>,

    /// Panel definitions keyed by panel id.
    #[serde(default)]
    pub panels: Map<String, Value>,

    /// Layout definitions, in order.
    #[serde(default)]
    pub layouts: Vec<Value>,

    /// Dashboard variables, in order.
    #[serde(default)]
    pub variables: Vec<Value>,

    /// Default time range duration.
    #[serde(default = "default_duration")]
    pub duration: String,

    /// Auto-refresh interval.
    #[serde(
        rename = "refreshInterval",
        alias = "refresh_interval",
        default = "default_refresh_interval"
    )]
    pub refresh_interval: String,
}

fn default_duration() -> String {
    DEFAULT_DURATION.to_string()
}

fn default_refresh_interval() -> String {
    DEFAULT_REFRESH_INTERVAL.to_string()
}

impl DashboardMetadata {
    /// Creates metadata carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            project: None,
            version: None,
            created_at: None,
            updated_at: None,
        }
    }
}

impl DashboardSpec {
    /// Creates an empty spec with the default duration and refresh interval.
    pub fn with_display_name(display_name: impl Into<String>) -> Self {
        Self {
            display: DashboardDisplay {
                name: display_name.into(),
                description: None,
            },
            datasources: Map::new(),
            panels: Map::new(),
            layouts: Vec::new(),
            variables: Vec::new(),
            duration: default_duration(),
            refresh_interval: default_refresh_interval(),
        }
    }
}

impl Dashboard {
    /// Creates an empty dashboard with the given name and display name.
    ///
    /// # Parameters
    ///
    /// * `name` - The `metadata.name` identifier
    /// * `display_name` - The `spec.display.name` shown in the UI
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            kind: DashboardKind::Dashboard,
            metadata: DashboardMetadata::named(name),
            spec: DashboardSpec::with_display_name(display_name),
        }
    }

    /// Returns the slug derived from `metadata.name`.
    ///
    /// The name is lowercased and spaces/underscores become hyphens. The
    /// server may still assign a different slug; this is only the value the
    /// CLI targets when no explicit slug is given.
    ///
    /// # Errors
    ///
    /// Returns [`LogfireError::InvalidInput`] if the name is blank.
    pub fn derived_slug(&self) -> Result<String, LogfireError> {
        let name = self.metadata.name.trim();
        if name.is_empty() {
            return Err(LogfireError::invalid_input(
                "dashboard metadata.name is required to derive a slug",
            ));
        }
        Ok(slugify(name))
    }

    /// Returns the panel ids in document order.
    pub fn panel_ids(&self) -> impl Iterator<Item = &str> {
        self.spec.panels.keys().map(String::as_str)
    }
}
