//! Credential and access-token management.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{Error, Result};

const GRANT_TYPE: &str = "client_credentials";

/// Authentication state for the Backstage API.
///
/// Holds the OAuth client credentials and the current bearer token. The
/// token is only ever replaced by [`Session::refresh`], never cleared.
///
/// # Thread Safety
///
/// `Session` is cheap to clone and may be shared across tasks. Each
/// request reads the token once while building its headers, so a refresh
/// running concurrently with in-flight requests may or may not be seen by
/// them.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    client_id: String,
    client_secret: SecretString,
    access_token: RwLock<SecretString>,
}

impl Session {
    /// Create a session from client credentials and an existing token.
    ///
    /// # Example
    ///
    /// ```
    /// use taboola_rs::Session;
    ///
    /// let session = Session::new("my-client-id", "my-client-secret", "current-token");
    /// assert_eq!(session.client_id(), "my-client-id");
    /// ```
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Self {
        Self {
            inner: Arc::new(SessionInner {
                client_id: client_id.into(),
                client_secret: SecretString::from(client_secret.into()),
                access_token: RwLock::new(SecretString::from(access_token.into())),
            }),
        }
    }

    /// The OAuth client id.
    pub fn client_id(&self) -> &str {
        &self.inner.client_id
    }

    /// Get the current access token.
    pub async fn access_token(&self) -> SecretString {
        self.inner.access_token.read().await.clone()
    }

    /// Replace the access token with one obtained elsewhere.
    pub async fn set_access_token(&self, token: impl Into<String>) {
        *self.inner.access_token.write().await = SecretString::from(token.into());
    }

    /// Exchange the client credentials for a fresh access token.
    ///
    /// Posts `client_id`, `client_secret` and `grant_type=client_credentials`
    /// form-encoded to `token_url`, without a bearer header. On success the
    /// new token replaces the stored one and is returned.
    ///
    /// # Errors
    ///
    /// - [`Error::Http`] if the token endpoint is unreachable
    /// - [`Error::TokenExchange`] if it answers with a non-success status
    /// - [`Error::Json`] if the response carries no `access_token`
    pub async fn refresh(&self, http: &reqwest::Client, token_url: &str) -> Result<SecretString> {
        tracing::debug!(client_id = %self.inner.client_id, "Requesting new access token");

        let form = [
            ("client_id", self.inner.client_id.as_str()),
            ("client_secret", self.inner.client_secret.expose_secret()),
            ("grant_type", GRANT_TYPE),
        ];
        let response = http.post(token_url).form(&form).send().await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            let body = serde_json::from_str(&text).unwrap_or(serde_json::Value::String(text));
            tracing::warn!(status = status.as_u16(), "Token exchange rejected");
            return Err(Error::TokenExchange {
                status: status.as_u16(),
                body,
            });
        }

        let token_response: TokenResponse = serde_json::from_str(&text)?;
        let token = SecretString::from(token_response.access_token);
        *self.inner.access_token.write().await = token.clone();

        tracing::debug!("Access token refreshed");
        Ok(token)
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("client_id", &self.inner.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("access_token", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}
