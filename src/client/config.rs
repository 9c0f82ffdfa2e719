//! Client configuration options.

use reqwest::Method;
use std::time::Duration;

use crate::{Error, Result};

/// Production Backstage host.
pub const DEFAULT_HOST: &str = "https://backstage.taboola.com";

const API_PATH: &str = "backstage/api/1.0";
const TOKEN_PATH: &str = "backstage/oauth/token";

/// Configuration for the Taboola client.
///
/// Only the host and User-Agent can be changed; timeouts and the retry
/// policy are fixed.
///
/// # Example
///
/// ```
/// use taboola_rs::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_host("http://localhost:8080")
///     .with_user_agent("my-app/1.0");
/// assert_eq!(config.api_base_url(), "http://localhost:8080/backstage/api/1.0");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub(crate) host: String,
    pub(crate) user_agent: String,
    pub(crate) timeout: Duration,
    pub(crate) upload_timeout: Duration,
    pub(crate) connect_timeout: Duration,
    pub(crate) max_redirects: usize,
    pub(crate) retry: RetryConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            user_agent: format!("taboola-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            timeout: Duration::from_secs(60),
            upload_timeout: Duration::from_secs(120),
            connect_timeout: Duration::from_secs(30),
            max_redirects: 10,
            retry: RetryConfig::default(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the host override from `TABOOLA_HOST`, if set.
    pub fn from_env() -> Self {
        match std::env::var("TABOOLA_HOST") {
            Ok(host) if !host.trim().is_empty() => Self::default().with_host(host),
            _ => Self::default(),
        }
    }

    /// Point the client at a different host (sandbox, proxy or stub).
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// The configured host.
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Base URL every resource path is appended to.
    pub fn api_base_url(&self) -> String {
        format!("{}/{}", self.host, API_PATH)
    }

    /// OAuth client-credentials endpoint.
    pub fn token_url(&self) -> String {
        format!("{}/{}", self.host, TOKEN_PATH)
    }

    /// Full URL for a resource path relative to the API base.
    pub(crate) fn endpoint(&self, path: &str) -> Result<url::Url> {
        let url = format!("{}/{}", self.api_base_url(), path.trim_start_matches('/'));
        Ok(url::Url::parse(&url)?)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.host)?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::Config(format!(
                "host must be an http(s) URL, got {}",
                self.host
            )));
        }
        Ok(())
    }
}

/// Retry policy for transport failures.
///
/// Connection errors are retried for every method. Timeouts are retried
/// only for idempotent methods, since a timed-out POST may already have
/// been applied. Any HTTP response, including 4xx/5xx, is returned to the
/// caller on the first attempt.
#[derive(Debug, Clone)]
pub(crate) struct RetryConfig {
    /// Total attempts, including the first
    pub max_attempts: u32,
    /// Delay before the second attempt
    pub initial_backoff: Duration,
    /// Cap on the delay between attempts
    pub max_backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_backoff: Duration::from_millis(500),
            max_backoff: Duration::from_secs(5),
        }
    }
}

impl RetryConfig {
    /// Backoff before retry number `attempt` (0-based).
    pub fn backoff_for_attempt(&self, attempt: u32) -> Duration {
        let backoff_millis = self.initial_backoff.as_millis() as u64 * 2u64.pow(attempt);
        let max_millis = self.max_backoff.as_millis() as u64;
        Duration::from_millis(backoff_millis.min(max_millis))
    }

    /// Whether a transport error is worth another attempt.
    pub fn should_retry(&self, method: &Method, err: &reqwest::Error) -> bool {
        err.is_connect() || (err.is_timeout() && is_idempotent(method))
    }
}

fn is_idempotent(method: &Method) -> bool {
    matches!(
        *method,
        Method::GET | Method::HEAD | Method::PUT | Method::DELETE | Method::OPTIONS
    )
}
