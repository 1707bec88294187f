//
//  logfire-cli
//  models/responses.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Response envelopes and request bodies of the dashboard API.
//!
//! The envelope types exist to unwrap server JSON into a [`Dashboard`] and
//! are discarded after decoding. They are strict: unknown fields make the
//! decode fail, so a changed server contract surfaces as an error instead of
//! silently dropping data.
//!
//! # Shapes
//!
//! | Endpoint | Shape |
//! |----------|-------|
//! | `GET dashboards/` | `[ListDashboardItem]` or `{"dashboards": [...]}` |
//! | `GET dashboards/{slug}/` | `{"dashboard": Dashboard}` or a bare `Dashboard` |
//! | `POST`/`PUT` | [`DashboardResponse`] or a bare `Dashboard` |

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Dashboard;

/// Summary of a dashboard as returned by the listing endpoint.
///
/// ```json
/// {
///     "id": "d87a3b26-4100-4026-9b42-ee4bbffe215e",
///     "project_id": "4fbc915c-7847-4088-8516-05a1026b2b47",
///     "created_at": "2025-12-16T04:37:26.837478Z",
///     "updated_at": "2026-01-18T02:00:59.541420Z",
///     "created_by_name": "strawgate",
///     "updated_by_name": "strawgate",
///     "dashboard_name": "my test dashboard",
///     "dashboard_slug": "my-test-dashboard"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ListDashboardItem {
    /// Dashboard id.
    pub id: Uuid,

    /// Project id.
    pub project_id: Uuid,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp, if the dashboard was ever updated.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Name of the user who created the dashboard.
    pub created_by_name: String,

    /// Name of the user who last updated the dashboard.
    #[serde(default)]
    pub updated_by_name: Option<String>,

    /// Display name of the dashboard.
    pub dashboard_name: String,

    /// Server-assigned slug.
    pub dashboard_slug: String,
}

impl ListDashboardItem {
    /// Returns the most recent modification time.
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }

    /// Returns the name of whoever last touched the dashboard.
    pub fn last_modified_by(&self) -> &str {
        self.updated_by_name
            .as_deref()
            .unwrap_or(&self.created_by_name)
    }
}

/// Listing wrapped in an object.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WrappedDashboardList {
    /// The listed dashboards.
    pub dashboards: Vec<ListDashboardItem>,
}

/// Body of the listing endpoint.
///
/// The wrapped shape is tried first, then the bare array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListDashboards {
    /// `{"dashboards": [...]}`
    Wrapped(WrappedDashboardList),
    /// `[...]`
    Bare(Vec<ListDashboardItem>),
}

impl ListDashboards {
    /// Returns the listed items regardless of the response shape.
    pub fn into_items(self) -> Vec<ListDashboardItem> {
        match self {
            Self::Wrapped(list) => list.dashboards,
            Self::Bare(items) => items,
        }
    }
}

/// Envelope returned when fetching a single dashboard.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GetDashboardResponse {
    /// The dashboard definition.
    pub dashboard: Dashboard,
}

/// Envelope returned by create and update.
///
/// Carries the same bookkeeping fields as [`ListDashboardItem`] plus the
/// stored definition.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DashboardResponse {
    /// Dashboard id.
    pub id: Uuid,

    /// Project id.
    pub project_id: Uuid,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// Last update timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    /// Name of the user who created the dashboard.
    pub created_by_name: String,

    /// Name of the user who last updated the dashboard.
    #[serde(default)]
    pub updated_by_name: Option<String>,

    /// Display name of the dashboard.
    pub dashboard_name: String,

    /// Server-assigned slug.
    pub dashboard_slug: String,

    /// The stored definition.
    pub definition: Dashboard,
}

/// Body of the get endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum GetDashboardEnvelope {
    Wrapped(GetDashboardResponse),
    Bare(Dashboard),
}

impl GetDashboardEnvelope {
    pub(crate) fn into_dashboard(self) -> Dashboard {
        match self {
            Self::Wrapped(response) => response.dashboard,
            Self::Bare(dashboard) => dashboard,
        }
    }
}

/// Body of the create and update endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum SavedDashboardEnvelope {
    Wrapped(Box<DashboardResponse>),
    Bare(Dashboard),
}

impl SavedDashboardEnvelope {
    pub(crate) fn into_dashboard(self) -> Dashboard {
        match self {
            Self::Wrapped(response) => response.definition,
            Self::Bare(dashboard) => dashboard,
        }
    }
}

/// Request body for create and update.
///
/// The slug and name travel in the body independently of the URL.
#[derive(Debug, Serialize)]
pub struct DashboardPayload<'a> {
    /// The dashboard, serialized with wire names and without absent fields.
    pub definition: &'a Dashboard,
    /// Target slug.
    pub slug: &'a str,
    /// `metadata.name` of the dashboard.
    pub name: &'a str,
}

impl<'a> DashboardPayload<'a> {
    /// Builds the body for `dashboard` stored under `slug`.
    pub fn new(slug: &'a str, dashboard: &'a Dashboard) -> Self {
        Self {
            definition: dashboard,
            slug,
            name: &dashboard.metadata.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(slug: &str) -> serde_json::Value {
        json!({
            "id": "d87a3b26-4100-4026-9b42-ee4bbffe215e",
            "project_id": "4fbc915c-7847-4088-8516-05a1026b2b47",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": null,
            "created_by_name": "test-user",
            "updated_by_name": null,
            "dashboard_name": slug.replace('-', " "),
            "dashboard_slug": slug
        })
    }

    fn dashboard_json() -> serde_json::Value {
        json!({
            "kind": "Dashboard",
            "metadata": {"name": "t1"},
            "spec": {"display": {"name": "T1"}}
        })
    }

    #[test]
    fn test_bare_and_wrapped_lists_decode_alike() {
        let bare: ListDashboards =
            serde_json::from_value(json!([item("dashboard-1"), item("dashboard-2")])).unwrap();
        let wrapped: ListDashboards = serde_json::from_value(json!({
            "dashboards": [item("dashboard-1"), item("dashboard-2")]
        }))
        .unwrap();

        let bare = bare.into_items();
        assert_eq!(bare.len(), 2);
        assert_eq!(bare, wrapped.into_items());
        assert_eq!(bare[1].dashboard_slug, "dashboard-2");
    }

    #[test]
    fn test_list_item_rejects_unknown_fields() {
        let mut value = item("x");
        value["surprise"] = json!(true);
        assert!(serde_json::from_value::<ListDashboardItem>(value).is_err());
    }

    #[test]
    fn test_list_item_requires_creator() {
        let mut value = item("x");
        value.as_object_mut().unwrap().remove("created_by_name");
        assert!(serde_json::from_value::<ListDashboardItem>(value).is_err());
    }

    #[test]
    fn test_last_modified_falls_back_to_creation() {
        let item: ListDashboardItem = serde_json::from_value(item("x")).unwrap();
        assert_eq!(item.last_modified(), item.created_at);
        assert_eq!(item.last_modified_by(), "test-user");
    }

    #[test]
    fn test_get_envelope_wrapped_and_bare() {
        let wrapped: GetDashboardEnvelope =
            serde_json::from_value(json!({"dashboard": dashboard_json()})).unwrap();
        let bare: GetDashboardEnvelope = serde_json::from_value(dashboard_json()).unwrap();
        assert_eq!(wrapped.into_dashboard(), bare.into_dashboard());
    }

    #[test]
    fn test_get_envelope_rejects_unknown_shape() {
        let result = serde_json::from_value::<GetDashboardEnvelope>(json!({"detail": "nope"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_saved_envelope_unwraps_definition() {
        let mut envelope = item("t1");
        envelope["definition"] = dashboard_json();
        let saved: SavedDashboardEnvelope = serde_json::from_value(envelope).unwrap();
        let dashboard = saved.into_dashboard();
        assert_eq!(dashboard.metadata.name, "t1");
        assert_eq!(dashboard.spec.display.name, "T1");
    }

    #[test]
    fn test_payload_shape() {
        let mut dashboard = Dashboard::new("t1", "T1");
        dashboard.metadata.project = None;
        let body = serde_json::to_value(DashboardPayload::new("t1-slug", &dashboard)).unwrap();
        assert_eq!(body["slug"], "t1-slug");
        assert_eq!(body["name"], "t1");
        assert_eq!(body["definition"]["metadata"], json!({"name": "t1"}));
        assert_eq!(body["definition"]["spec"]["refreshInterval"], "0s");
    }
}
