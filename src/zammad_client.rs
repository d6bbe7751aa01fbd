//! HTTP client for the Zammad REST API.
//!
//! This module provides `ZammadClient`, a thin typed wrapper over the
//! `/api/v1` resource endpoints. Every call is a single request: there is
//! no retry, no caching and no classification of error statuses beyond
//! success or failure.
//!
//! # Security
//!
//! The token is sent in the `Authorization` header and never logged.
//! Error bodies are redacted before they are stored in an error.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::error::ZmError;
use crate::models::{Article, CreateTicket, EntityId, Group, Ticket, UpdateTicket, User};

/// Request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// API path appended to the configured base URL.
const API_PATH: &str = "/api/v1";

/// Maximum length for HTTP error response bodies kept in errors.
const MAX_ERROR_BODY_LEN: usize = 500;

/// HTTP client for the Zammad API.
///
/// # Example
///
/// ```ignore
/// let config = Config::from_env()?;
/// let client = ZammadClient::new(&config)?;
///
/// let tickets = client.list_tickets(&TicketListParams::new().with_expand(true)).await?;
/// ```
#[derive(Clone)]
pub struct ZammadClient {
    /// The underlying HTTP client (cloning is cheap).
    http: Client,

    /// Base URL including the API path (e.g., `https://helpdesk.example.com/api/v1`).
    base_url: String,

    /// API token. Never log this value.
    token: String,
}

impl ZammadClient {
    /// Creates a new client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `ZmError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(config: &Config) -> Result<Self, ZmError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .user_agent(concat!("zm/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ZmError::HttpClient)?;

        Ok(Self {
            http,
            base_url: Self::normalize_base_url(&config.base_url),
            token: config.token.clone(),
        })
    }

    /// Ensures the base URL ends with `/api/v1`.
    fn normalize_base_url(url: &str) -> String {
        let url = url.trim_end_matches('/');
        if url.ends_with(API_PATH) {
            url.to_string()
        } else if url.ends_with("/api") {
            format!("{}/v1", url)
        } else {
            format!("{}{}", url, API_PATH)
        }
    }

    /// Returns the token for redacting error messages. Never log it.
    pub fn token_for_sanitization(&self) -> &str {
        &self.token
    }

    /// Returns the browser URL of a ticket in the Zammad web UI.
    pub fn ticket_web_url(&self, ticket_id: EntityId) -> String {
        let web_base = self.base_url.trim_end_matches(API_PATH);
        format!("{}/#ticket/zoom/{}", web_base, ticket_id)
    }

    fn authorized(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);

        tracing::debug!(method = %method, path = %path, "Making Zammad API request");

        self.http
            .request(method, url)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Token token={}", self.token),
            )
            .header(reqwest::header::ACCEPT, "application/json")
    }

    /// Sends a request and decodes a JSON response body.
    async fn send<T>(&self, request: RequestBuilder) -> Result<T, ZmError>
    where
        T: DeserializeOwned,
    {
        let response = request.send().await.map_err(ZmError::Http)?;
        let status = response.status();

        if !status.is_success() {
            return Err(self.handle_http_error(status, response).await);
        }

        let body = response.text().await.map_err(ZmError::Http)?;

        tracing::trace!(body = %body, "Zammad API response");

        serde_json::from_str(&body).map_err(ZmError::Serialization)
    }

    async fn get<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T, ZmError>
    where
        T: DeserializeOwned,
    {
        let mut request = self.authorized(Method::GET, path);
        if !query.is_empty() {
            request = request.query(query);
        }
        self.send(request).await
    }

    async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ZmError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.authorized(Method::POST, path).json(body)).await
    }

    async fn put<T, B>(&self, path: &str, body: &B) -> Result<T, ZmError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.send(self.authorized(Method::PUT, path).json(body)).await
    }

    /// Converts a non-success response into `ZmError::HttpStatus`.
    async fn handle_http_error(&self, status: StatusCode, response: reqwest::Response) -> ZmError {
        let body = response.text().await.unwrap_or_default();
        let body = ZmError::sanitize_message(&body, &self.token);
        let body = if body.len() > MAX_ERROR_BODY_LEN {
            let mut end = MAX_ERROR_BODY_LEN;
            while !body.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}...[truncated]", &body[..end])
        } else {
            body
        };

        tracing::debug!(status = %status, "Zammad API returned an error status");

        ZmError::HttpStatus { status, body }
    }

    // ========================================================================
    // Tickets
    // ========================================================================

    /// Lists one page of tickets.
    pub async fn list_tickets(&self, params: &TicketListParams) -> Result<Vec<Ticket>, ZmError> {
        self.get("/tickets", &params.to_query()).await
    }

    /// Gets a single ticket.
    pub async fn get_ticket(&self, id: EntityId) -> Result<Ticket, ZmError> {
        self.get(&format!("/tickets/{}", id), &[]).await
    }

    /// Creates a ticket and returns the stored record.
    pub async fn create_ticket(&self, ticket: &CreateTicket) -> Result<Ticket, ZmError> {
        tracing::debug!(title = %ticket.title, group_id = ticket.group_id, "Creating ticket");
        self.post("/tickets", ticket).await
    }

    /// Updates the given fields of a ticket and returns the stored record.
    ///
    /// # Errors
    ///
    /// Returns `ZmError::Validation` without making a request if `update`
    /// changes nothing.
    pub async fn update_ticket(
        &self,
        id: EntityId,
        update: &UpdateTicket,
    ) -> Result<Ticket, ZmError> {
        if !update.has_updates() {
            return Err(ZmError::validation(
                "at least one field must be provided for update \
                 (title, state, priority, group or owner)",
            ));
        }
        self.put(&format!("/tickets/{}", id), update).await
    }

    /// Runs a search with a prebuilt filter-query string.
    ///
    /// Results come back expanded and in the order the server ranked them.
    pub async fn search_tickets(&self, query: &str) -> Result<Vec<Ticket>, ZmError> {
        let params = [("query", query.to_string()), ("expand", "true".to_string())];
        self.get("/tickets/search", &params).await
    }

    /// Lists the articles of a ticket.
    pub async fn list_ticket_articles(&self, ticket_id: EntityId) -> Result<Vec<Article>, ZmError> {
        self.get(&format!("/ticket_articles/by_ticket/{}", ticket_id), &[])
            .await
    }

    /// Fetches a ticket and its articles concurrently.
    ///
    /// Both requests must succeed; if either fails the whole call fails and
    /// the other result is discarded.
    pub async fn get_ticket_with_articles(
        &self,
        id: EntityId,
    ) -> Result<(Ticket, Vec<Article>), ZmError> {
        tokio::try_join!(self.get_ticket(id), self.list_ticket_articles(id))
    }

    // ========================================================================
    // Users
    // ========================================================================

    pub async fn list_users(&self) -> Result<Vec<User>, ZmError> {
        self.get("/users", &[]).await
    }

    pub async fn get_user(&self, id: EntityId) -> Result<User, ZmError> {
        self.get(&format!("/users/{}", id), &[]).await
    }

    /// Returns the user the token belongs to.
    pub async fn current_user(&self) -> Result<User, ZmError> {
        self.get("/users/me", &[]).await
    }

    // ========================================================================
    // Groups
    // ========================================================================

    pub async fn list_groups(&self) -> Result<Vec<Group>, ZmError> {
        self.get("/groups", &[]).await
    }

    pub async fn get_group(&self, id: EntityId) -> Result<Group, ZmError> {
        self.get(&format!("/groups/{}", id), &[]).await
    }
}

/// Query parameters for listing tickets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketListParams {
    /// 1-based page number.
    pub page: Option<u32>,

    /// Tickets per page.
    pub per_page: Option<u32>,

    /// Ask the server to resolve relation ids to names.
    pub expand: bool,
}

impl TicketListParams {
    /// Creates empty parameters (server defaults).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn with_expand(mut self, expand: bool) -> Self {
        self.expand = expand;
        self
    }

    /// Converts to query pairs; unset values are omitted.
    fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(page) = self.page {
            query.push(("page", page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            query.push(("per_page", per_page.to_string()));
        }
        if self.expand {
            query.push(("expand", "true".to_string()));
        }
        query
    }
}
