//
//  logfire-cli
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # HTTP Client for the Logfire Dashboard API
//!
//! This module provides the client used to manage Perses dashboards through
//! Logfire's `ui-api` endpoints.
//!
//! ## Features
//!
//! - Connection scope with guaranteed release ([`Session`])
//! - Bearer authentication, JSON content type and a fixed User-Agent on
//!   every request
//! - Resource path construction that skips absent segments
//! - Status classification into [`LogfireError`] before any decoding
//!
//! ## Endpoints
//!
//! | Operation | Method | Path |
//! |-----------|--------|------|
//! | list | `GET` | `/ui-api/organizations/{org}/projects/{project}/dashboards/` |
//! | get | `GET` | `.../dashboards/{slug}/` |
//! | create | `POST` | `.../dashboards/` |
//! | update | `PUT` | `.../dashboards/{slug}/` |
//! | delete | `DELETE` | `.../dashboards/{slug}/` |

use std::fmt;
use std::ops::Deref;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::error::LogfireError;
use crate::models::responses::{GetDashboardEnvelope, SavedDashboardEnvelope};
use crate::models::{Dashboard, DashboardPayload, ListDashboardItem, ListDashboards};

/// Default Logfire API base URL (US region).
pub const DEFAULT_BASE_URL: &str = "https://logfire-us.pydantic.dev";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Path prefix of the dashboard-management API.
pub const API_PREFIX: &str = "ui-api";

/// User-Agent sent with every request.
///
/// The `ui-api` endpoints are the ones the Logfire web UI talks to, so the
/// client identifies itself as a browser.
pub const CLIENT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/605.1.15 (KHTML, like Gecko) Version/26.2 Safari/605.1.15";

/// Async client for the Logfire dashboard API.
///
/// A client is scoped to one organization/project/token triple. Creating it
/// does not open a connection; operations only work inside a connection
/// scope, entered with [`LogfireClient::session`] (or the explicit
/// [`open`](LogfireClient::open)/[`close`](LogfireClient::close) pair).
///
/// # Example
///
/// ```rust,no_run
/// use logfire_cli::api::LogfireClient;
///
/// # async fn example() -> Result<(), logfire_cli::api::LogfireError> {
/// let mut client = LogfireClient::new("your-token", "my-org", "my-project");
///
/// let session = client.session()?;
/// for item in session.list_dashboards().await? {
///     println!("{} ({})", item.dashboard_name, item.dashboard_slug);
/// }
/// // the connection is closed when `session` goes out of scope
/// # Ok(())
/// # }
/// ```
///
/// # Notes
///
/// - Every operation issues exactly one HTTP request; nothing is retried
/// - The token is never printed by `Debug` or written to logs
pub struct LogfireClient {
    token: String,
    organization: String,
    project: String,
    base_url: String,
    timeout: Duration,
    /// The open connection, present only inside a scope.
    http: Option<Client>,
}

impl fmt::Debug for LogfireClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogfireClient")
            .field("organization", &self.organization)
            .field("project", &self.project)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("open", &self.is_open())
            .finish_non_exhaustive()
    }
}

impl LogfireClient {
    /// Creates a client for the default base URL and timeout.
    ///
    /// # Parameters
    ///
    /// * `token` - Logfire API token
    /// * `organization` - Organization slug
    /// * `project` - Project slug
    pub fn new(
        token: impl Into<String>,
        organization: impl Into<String>,
        project: impl Into<String>,
    ) -> Self {
        Self {
            token: token.into(),
            organization: organization.into(),
            project: project.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            http: None,
        }
    }

    /// Sets the base URL. A trailing `/` is removed.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the total request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the organization slug.
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Returns the project slug.
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Returns the base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns `true` while a connection scope is open.
    pub fn is_open(&self) -> bool {
        self.http.is_some()
    }

    /// Opens the underlying connection.
    ///
    /// Opening an already open client is a no-op. Prefer
    /// [`session`](Self::session), which also guarantees the matching
    /// [`close`](Self::close).
    ///
    /// # Errors
    ///
    /// - [`LogfireError::Usage`] if the token cannot be used as a header value
    /// - [`LogfireError::Transport`] if the HTTP client cannot be built
    pub fn open(&mut self) -> Result<(), LogfireError> {
        if self.http.is_none() {
            let http = Client::builder()
                .default_headers(self.default_headers()?)
                .timeout(self.timeout)
                .build()?;
            tracing::debug!(base_url = %self.base_url, "opened connection");
            self.http = Some(http);
        }
        Ok(())
    }

    /// Closes the underlying connection, releasing pooled sockets.
    pub fn close(&mut self) {
        if self.http.take().is_some() {
            tracing::debug!(base_url = %self.base_url, "closed connection");
        }
    }

    /// Opens the connection and returns a guard that closes it on drop.
    ///
    /// All operations are reachable through the guard. The connection is
    /// released on every exit path, including early returns through `?`.
    pub fn session(&mut self) -> Result<Session<'_>, LogfireError> {
        self.open()?;
        Ok(Session { client: self })
    }

    /// Builds the resource path for the dashboards collection or one dashboard.
    ///
    /// Absent or empty segments are skipped and the path always ends with `/`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use logfire_cli::api::LogfireClient;
    ///
    /// let client = LogfireClient::new("t", "acme", "web");
    /// assert_eq!(
    ///     client.build_resource_path(None),
    ///     "/ui-api/organizations/acme/projects/web/dashboards/"
    /// );
    /// assert_eq!(
    ///     client.build_resource_path(Some("latency")),
    ///     "/ui-api/organizations/acme/projects/web/dashboards/latency/"
    /// );
    /// ```
    pub fn build_resource_path(&self, slug: Option<&str>) -> String {
        let segments = [
            Some(API_PREFIX),
            Some("organizations"),
            Some(self.organization.as_str()),
            Some("projects"),
            Some(self.project.as_str()),
            Some("dashboards"),
            slug,
        ];

        let joined = segments
            .into_iter()
            .flatten()
            .map(|segment| segment.trim_matches('/'))
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("/");

        format!("/{}/", joined)
    }

    /// Lists all dashboards in the project.
    ///
    /// Both a bare JSON array and a `{"dashboards": [...]}` object are accepted.
    pub async fn list_dashboards(&self) -> Result<Vec<ListDashboardItem>, LogfireError> {
        let resource = format!("dashboards of project '{}'", self.project);
        let request = self.request(Method::GET, None)?;
        let response = self.execute(request).await?;
        let list: ListDashboards = handle_response(response, &resource).await?;
        Ok(list.into_items())
    }

    /// Fetches a dashboard by slug.
    ///
    /// # Errors
    ///
    /// Returns [`LogfireError::NotFound`] if the dashboard does not exist.
    pub async fn get_dashboard(&self, slug: &str) -> Result<Dashboard, LogfireError> {
        let request = self.request(Method::GET, Some(slug))?;
        let response = self.execute(request).await?;
        let envelope: GetDashboardEnvelope =
            handle_response(response, &dashboard_resource(slug)).await?;
        Ok(envelope.into_dashboard())
    }

    /// Creates a dashboard.
    ///
    /// The slug and `metadata.name` are sent in the body; the URL is the
    /// collection path.
    pub async fn create_dashboard(
        &self,
        slug: &str,
        dashboard: &Dashboard,
    ) -> Result<Dashboard, LogfireError> {
        let request = self
            .request(Method::POST, None)?
            .json(&DashboardPayload::new(slug, dashboard));
        let response = self.execute(request).await?;
        let envelope: SavedDashboardEnvelope =
            handle_response(response, &dashboard_resource(slug)).await?;
        Ok(envelope.into_dashboard())
    }

    /// Creates or updates a dashboard.
    ///
    /// The API treats `PUT` on a slug as an upsert.
    pub async fn update_dashboard(
        &self,
        slug: &str,
        dashboard: &Dashboard,
    ) -> Result<Dashboard, LogfireError> {
        let request = self
            .request(Method::PUT, Some(slug))?
            .json(&DashboardPayload::new(slug, dashboard));
        let response = self.execute(request).await?;
        let envelope: SavedDashboardEnvelope =
            handle_response(response, &dashboard_resource(slug)).await?;
        Ok(envelope.into_dashboard())
    }

    /// Deletes a dashboard.
    ///
    /// Only `204 No Content` counts as success; any other status, including
    /// other 2xx codes, is reported as an error.
    pub async fn delete_dashboard(&self, slug: &str) -> Result<(), LogfireError> {
        let request = self.request(Method::DELETE, Some(slug))?;
        let response = self.execute(request).await?;
        let status = response.status();

        if status == StatusCode::NO_CONTENT {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        if status.is_success() {
            return Err(LogfireError::Api { status, body });
        }
        Err(LogfireError::from_status(status, &dashboard_resource(slug), body))
    }

    fn default_headers(&self) -> Result<HeaderMap, LogfireError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", self.token))
            .map_err(|_| LogfireError::usage("authentication token contains invalid characters"))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
        Ok(headers)
    }

    fn http(&self) -> Result<&Client, LogfireError> {
        self.http.as_ref().ok_or_else(|| {
            LogfireError::usage("connection not open; enter a client session before issuing requests")
        })
    }

    fn request(&self, method: Method, slug: Option<&str>) -> Result<RequestBuilder, LogfireError> {
        let http = self.http()?;
        let url = format!("{}{}", self.base_url, self.build_resource_path(slug));
        tracing::debug!(%method, %url, "sending request");
        Ok(http.request(method, url))
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Response, LogfireError> {
        let response = request.send().await?;
        tracing::debug!(status = %response.status(), url = %response.url(), "received response");
        Ok(response)
    }
}

/// Connection scope of a [`LogfireClient`].
///
/// Dereferences to the client so operations can be called directly on the
/// guard. Dropping it closes the connection.
pub struct Session<'a> {
    client: &'a mut LogfireClient,
}

impl Deref for Session<'_> {
    type Target = LogfireClient;

    fn deref(&self) -> &Self::Target {
        self.client
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        self.client.close();
    }
}

fn dashboard_resource(slug: &str) -> String {
    format!("dashboard '{}'", slug)
}

/// Classifies the status, then decodes a success body into `T`.
async fn handle_response<T: DeserializeOwned>(
    response: Response,
    resource: &str,
) -> Result<T, LogfireError> {
    let status = response.status();

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(LogfireError::from_status(status, resource, body));
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(LogfireError::Decode)
}
