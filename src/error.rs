//! Error types for the Taboola Backstage API client.
//!
//! HTTP failures are classified by status code into a small set of
//! variants, each carrying the message, status and raw response body.
//! Transport failures (connection errors, timeouts) are surfaced as
//! [`Error::Http`] without translation.

use serde_json::Value;
use thiserror::Error;

/// A specialized `Result` type for Taboola operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for all Taboola API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A local argument check failed; no request was sent.
    #[error("Validation error: {0}")]
    Validation(String),

    /// HTTP 401
    #[error("Authentication failed ({status}): {message}")]
    Authentication {
        /// Error message
        message: String,
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: Value,
    },

    /// HTTP 403
    #[error("Authorization failed ({status}): {message}")]
    Authorization {
        /// Error message
        message: String,
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: Value,
    },

    /// HTTP 429
    #[error("Rate limited ({status}): {message}")]
    RateLimit {
        /// Error message
        message: String,
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: Value,
    },

    /// Any other HTTP 4xx
    #[error("Invalid request ({status}): {message}")]
    InvalidRequest {
        /// Error message
        message: String,
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: Value,
    },

    /// HTTP 5xx
    #[error("API error ({status}): {message}")]
    Api {
        /// Error message
        message: String,
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: Value,
    },

    /// Any other non-success status
    #[error("HTTP error ({status}): {message}")]
    Generic {
        /// Error message
        message: String,
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: Value,
    },

    /// The OAuth token endpoint rejected the credentials.
    #[error("Token exchange failed ({status}): {body}")]
    TokenExchange {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: Value,
    },

    /// HTTP transport failed (after retries)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading an upload failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Classify a non-success response.
    ///
    /// The message is the body's `message` field when the body is a JSON
    /// object carrying one, otherwise the raw body text, otherwise
    /// `"HTTP <status>"`.
    pub fn from_response(status: u16, body: Value) -> Self {
        let message = match &body {
            Value::Object(map) => map
                .get("message")
                .and_then(|m| m.as_str())
                .map(String::from),
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
        .unwrap_or_else(|| format!("HTTP {}", status));

        match status {
            401 => Error::Authentication { message, status, body },
            403 => Error::Authorization { message, status, body },
            429 => Error::RateLimit { message, status, body },
            400..=499 => Error::InvalidRequest { message, status, body },
            500..=599 => Error::Api { message, status, body },
            _ => Error::Generic { message, status, body },
        }
    }

    /// HTTP status code of a classified response error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Error::Authentication { status, .. }
            | Error::Authorization { status, .. }
            | Error::RateLimit { status, .. }
            | Error::InvalidRequest { status, .. }
            | Error::Api { status, .. }
            | Error::Generic { status, .. }
            | Error::TokenExchange { status, .. } => Some(*status),
            Error::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Raw response body of a classified response error.
    pub fn body(&self) -> Option<&Value> {
        match self {
            Error::Authentication { body, .. }
            | Error::Authorization { body, .. }
            | Error::RateLimit { body, .. }
            | Error::InvalidRequest { body, .. }
            | Error::Api { body, .. }
            | Error::Generic { body, .. }
            | Error::TokenExchange { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Error message of a classified response error or validation failure.
    pub fn message(&self) -> Option<&str> {
        match self {
            Error::Authentication { message, .. }
            | Error::Authorization { message, .. }
            | Error::RateLimit { message, .. }
            | Error::InvalidRequest { message, .. }
            | Error::Api { message, .. }
            | Error::Generic { message, .. } => Some(message),
            Error::Validation(message) => Some(message),
            _ => None,
        }
    }

    /// Returns `true` if this error is potentially transient and the
    /// operation could be retried by the caller.
    ///
    /// # Example
    ///
    /// ```
    /// use taboola_rs::Error;
    ///
    /// fn handle_error(err: Error) {
    ///     if err.is_retryable() {
    ///         println!("Retrying operation...");
    ///     }
    /// }
    /// ```
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::Http(_) | Error::RateLimit { .. } | Error::Api { .. })
    }

    /// Returns `true` for 401/403 responses and token exchange failures.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Error::Authentication { .. } | Error::Authorization { .. } | Error::TokenExchange { .. }
        )
    }

    /// Returns `true` if this error indicates a client-side issue
    /// (invalid input, bad request, etc.).
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Validation(_) | Error::Config(_) => true,
            _ => matches!(self.status_code(), Some(400..=499)),
        }
    }

    /// Returns `true` if this error indicates a server-side issue.
    pub fn is_server_error(&self) -> bool {
        matches!(self, Error::Api { .. })
    }
}
