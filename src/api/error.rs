//
//  logfire-cli
//  api/error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Error types for the Logfire dashboard API.
//!
//! Every failure produced by [`LogfireClient`](super::LogfireClient) is a
//! [`LogfireError`]. The variants are fine-grained for diagnostics, but they
//! collapse into four [`ErrorKind`]s that callers branch on:
//!
//! | Kind | Produced by |
//! |------|-------------|
//! | `Authentication` | HTTP 401 / 403 |
//! | `NotFound` | HTTP 404 |
//! | `Client` | any other non-2xx status, undecodable bodies, transport errors, bad local input |
//! | `Usage` | operation outside a connection scope, missing configuration |
//!
//! # Example
//!
//! ```rust,ignore
//! use logfire_cli::api::{ErrorKind, LogfireError};
//!
//! match client.get_dashboard("missing").await {
//!     Ok(dashboard) => println!("{}", dashboard.metadata.name),
//!     Err(e) if e.kind() == ErrorKind::NotFound => println!("no such dashboard"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use reqwest::StatusCode;
use thiserror::Error;

/// Coarse classification of a [`LogfireError`].
///
/// The CLI maps each kind to a user-facing message and an exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid or expired token, or insufficient access.
    Authentication,
    /// The referenced dashboard does not exist.
    NotFound,
    /// Any other server, transport, decoding or input failure.
    Client,
    /// The client was used incorrectly or is missing configuration.
    Usage,
}

/// Error type for all Logfire API operations.
///
/// # Notes
///
/// - `Api` keeps the raw response body so that server-side validation
///   messages reach the user unchanged
/// - `Transport` covers connection failures and timeouts
#[derive(Error, Debug)]
pub enum LogfireError {
    /// The server rejected the credentials (401) or denied access (403).
    #[error("{message}")]
    Authentication {
        /// The HTTP status that triggered the failure.
        status: StatusCode,
        /// Human readable description.
        message: String,
    },

    /// The requested resource was not found (404).
    #[error("Not found: {0}")]
    NotFound(String),

    /// The server answered with a non-success status other than 401/403/404.
    #[error("API request failed with status {status}: {body}")]
    Api {
        /// The HTTP status returned by the server.
        status: StatusCode,
        /// The raw response body.
        body: String,
    },

    /// A success response did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The request could not be sent or the response could not be read.
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Local input that cannot be turned into a request.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The client was used outside its connection scope or is misconfigured.
    #[error("{0}")]
    Usage(String),
}

impl LogfireError {
    /// Returns the coarse [`ErrorKind`] of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Authentication { .. } => ErrorKind::Authentication,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Api { .. } | Self::Decode(_) | Self::Transport(_) | Self::InvalidInput(_) => {
                ErrorKind::Client
            }
            Self::Usage(_) => ErrorKind::Usage,
        }
    }

    /// Classifies a non-success HTTP status.
    ///
    /// `resource` names what was requested and ends up in not-found
    /// messages. `body` is only kept for statuses that fall into the generic
    /// client kind; authentication and not-found failures are reported
    /// regardless of what the server sent.
    pub fn from_status(status: StatusCode, resource: &str, body: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::Authentication {
                status,
                message: "Invalid or expired authentication token".to_string(),
            },
            StatusCode::FORBIDDEN => Self::Authentication {
                status,
                message: "Access denied to this resource".to_string(),
            },
            StatusCode::NOT_FOUND => Self::NotFound(resource.to_string()),
            _ => Self::Api { status, body },
        }
    }

    /// Creates a usage fault.
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Creates an invalid-input failure.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
