//
//  logfire-cli
//  models/template.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Starter dashboard used by `logfire-cli init`.

use serde_json::json;

use super::Dashboard;
use crate::util::slugify;

/// Project written into templates when none is configured.
pub const PLACEHOLDER_PROJECT: &str = "your-project";

/// Id of the example panel in the template.
pub const EXAMPLE_PANEL_ID: &str = "ExamplePanel";

const EXAMPLE_QUERY: &str = "SELECT\n  time_bucket($resolution, start_timestamp) AS x,\n  count(1) as y\nFROM records\nGROUP BY x\nORDER BY x";

impl Dashboard {
    /// Builds a starter dashboard without touching the network.
    ///
    /// The template holds one time series panel backed by a
    /// `LogfireTimeSeriesQuery` and a grid layout that places it.
    ///
    /// # Parameters
    ///
    /// * `display_name` - Name shown in the UI; `metadata.name` is its slug
    /// * `project` - Project to record in metadata, or [`PLACEHOLDER_PROJECT`]
    pub fn scaffold(display_name: &str, project: Option<&str>) -> Self {
        let mut dashboard = Self::new(slugify(display_name), display_name);
        dashboard.metadata.project = Some(project.unwrap_or(PLACEHOLDER_PROJECT).to_string());

        dashboard.spec.panels.insert(
            EXAMPLE_PANEL_ID.to_string(),
            json!({
                "kind": "Panel",
                "spec": {
                    "display": {"name": "Example Panel"},
                    "plugin": {
                        "kind": "TimeSeriesChart",
                        "spec": {"legend": {"position": "bottom"}}
                    },
                    "queries": [{
                        "kind": "TimeSeriesQuery",
                        "spec": {
                            "plugin": {
                                "kind": "LogfireTimeSeriesQuery",
                                "spec": {"query": EXAMPLE_QUERY}
                            }
                        }
                    }]
                }
            }),
        );

        dashboard.spec.layouts.push(json!({
            "kind": "Grid",
            "spec": {
                "items": [{
                    "x": 0,
                    "y": 0,
                    "width": 12,
                    "height": 6,
                    "content": {"$ref": format!("#/spec/panels/{EXAMPLE_PANEL_ID}")}
                }]
            }
        }));

        dashboard
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scaffold_metadata() {
        let dashboard = Dashboard::scaffold("My New Dashboard", Some("prod"));
        assert_eq!(dashboard.metadata.name, "my-new-dashboard");
        assert_eq!(dashboard.metadata.project.as_deref(), Some("prod"));
        assert_eq!(dashboard.spec.display.name, "My New Dashboard");
        assert_eq!(dashboard.spec.duration, "1h");
        assert_eq!(dashboard.spec.refresh_interval, "0s");
    }

    #[test]
    fn test_scaffold_placeholder_project() {
        let dashboard = Dashboard::scaffold("x", None);
        assert_eq!(dashboard.metadata.project.as_deref(), Some(PLACEHOLDER_PROJECT));
    }

    #[test]
    fn test_scaffold_layout_references_panel() {
        let dashboard = Dashboard::scaffold("x", None);
        let panel = &dashboard.spec.panels[EXAMPLE_PANEL_ID];
        assert_eq!(
            panel["spec"]["queries"][0]["spec"]["plugin"]["kind"],
            "LogfireTimeSeriesQuery"
        );
        assert_eq!(
            dashboard.spec.layouts[0]["spec"]["items"][0]["content"]["$ref"],
            "#/spec/panels/ExamplePanel"
        );
    }
}
