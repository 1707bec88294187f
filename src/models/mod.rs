//
//  logfire-cli
//  models/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Document Model
//!
//! Typed data-transfer shapes consumed and produced by the API client.
//!
//! - [`dashboard`]: the Perses dashboard document
//! - [`responses`]: list items, response envelopes and request bodies
//! - [`template`]: the starter document written by `init`

pub mod dashboard;
pub mod responses;
pub mod template;

pub use dashboard::*;
pub use responses::{
    DashboardPayload, DashboardResponse, GetDashboardResponse, ListDashboardItem, ListDashboards,
    WrappedDashboardList,
};
pub use template::{EXAMPLE_PANEL_ID, PLACEHOLDER_PROJECT};
