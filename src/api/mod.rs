//
//  logfire-cli
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! HTTP access to Logfire's dashboard-management endpoints.
//!
//! - [`client`]: [`LogfireClient`] and its connection scope [`Session`]
//! - [`error`]: [`LogfireError`] and its [`ErrorKind`] classification
//!
//! ## Usage
//!
//! ```rust,no_run
//! use logfire_cli::api::LogfireClient;
//!
//! # async fn example() -> Result<(), logfire_cli::api::LogfireError> {
//! let mut client = LogfireClient::new("token", "my-org", "my-project")
//!     .with_base_url("https://logfire-eu.pydantic.dev");
//!
//! let session = client.session()?;
//! let dashboard = session.get_dashboard("service-overview").await?;
//! println!("{}", dashboard.spec.display.name);
//! # Ok(())
//! # }
//! ```

/// Core HTTP client for the dashboard API.
pub mod client;

/// Error taxonomy shared by all API operations.
pub mod error;

pub use client::{LogfireClient, Session, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use error::{ErrorKind, LogfireError};
