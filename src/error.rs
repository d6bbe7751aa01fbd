//! Error types for the zm client.
//!
//! This module defines `ZmError`, the error type returned by every library
//! operation. The binary wraps it with `anyhow` context at the command
//! boundary.
//!
//! # Security
//!
//! The API token must never appear in anything printed to the terminal.
//! Use `sanitized_display()` before showing an error that may contain
//! text from the remote server.

use thiserror::Error;

/// Unified error type for all zm operations.
#[derive(Error, Debug)]
pub enum ZmError {
    /// Configuration error - missing or invalid environment variables.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP request failed during transmission.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// HTTP response returned a non-success status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: reqwest::StatusCode,
        /// The response body, potentially containing error details.
        body: String,
    },

    /// JSON serialization or deserialization failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Input validation failed before any request was made.
    #[error("validation error: {0}")]
    Validation(String),
}

impl ZmError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        ZmError::Config(format!(
            "missing required environment variable: {}. \
             Set ZAMMAD_URL and ZAMMAD_TOKEN in your .env file or environment",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        ZmError::Config(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ZmError::Validation(message.into())
    }

    /// Replaces every occurrence of the token in `message` with `[REDACTED]`.
    #[must_use]
    pub fn sanitize_message(message: &str, token: &str) -> String {
        if token.is_empty() {
            return message.to_string();
        }
        message.replace(token, "[REDACTED]")
    }

    /// Display message of this error with the token redacted.
    #[must_use]
    pub fn sanitized_display(&self, token: &str) -> String {
        Self::sanitize_message(&self.to_string(), token)
    }
}
