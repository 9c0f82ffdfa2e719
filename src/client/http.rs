//! HTTP client implementation for the Taboola Backstage API.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use std::sync::Arc;

use crate::api::{
    AccountsService, CampaignItemsService, CampaignsService, MotionAdsService,
    OperationsService, ReportingsService,
};
use crate::auth::Session;
use crate::models::{MultipartPayload, Params};
use crate::{Error, Result};

use super::config::ClientConfig;

const MULTIPART_FORM_DATA: &str = "multipart/form-data";

/// The main client for interacting with the Taboola Backstage API.
///
/// The client holds the credentials and a pooled HTTP connection; the
/// resource services it hands out are thin, stateless views over it.
///
/// # Example
///
/// ```no_run
/// use taboola_rs::{TaboolaClient, AccountId, CampaignId};
///
/// # async fn example() -> taboola_rs::Result<()> {
/// let client = TaboolaClient::new("client-id", "client-secret", "access-token")?;
///
/// let accounts = client.accounts().list_all().await?;
/// println!("{}", accounts["results"]);
///
/// let account = AccountId::new("demo-advertiser");
/// let campaign = client.campaigns().get(&account, &CampaignId::new("1234")).await?;
/// println!("{}", campaign["name"]);
/// # Ok(())
/// # }
/// ```
pub struct TaboolaClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) session: Session,
    pub(crate) config: ClientConfig,
}

/// What a request sends besides its headers.
#[derive(Debug, Clone)]
pub(crate) enum RequestBody {
    /// Query string for GET/DELETE, JSON body for POST/PUT
    Params(Params),
    /// `multipart/form-data` body for POST/PUT
    Multipart(MultipartPayload),
}

impl TaboolaClient {
    /// Create a client for the production API.
    ///
    /// `access_token` may be empty if [`refresh_access_token`](Self::refresh_access_token)
    /// is called before the first request.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        access_token: impl Into<String>,
    ) -> Result<Self> {
        Self::with_config(client_id, client_secret, access_token, ClientConfig::default())
    }

    /// Create a client with custom configuration.
    pub fn with_config(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        access_token: impl Into<String>,
        config: ClientConfig,
    ) -> Result<Self> {
        let session = Session::new(client_id, client_secret, access_token);
        Self::with_session(session, config)
    }

    /// Create a client from `TABOOLA_CLIENT_ID`, `TABOOLA_CLIENT_SECRET`
    /// and `TABOOLA_ACCESS_TOKEN`, honouring `TABOOLA_HOST` if set.
    pub fn from_env() -> Result<Self> {
        let var = |name: &str| {
            std::env::var(name).map_err(|_| Error::Config(format!("{} must be set", name)))
        };
        Self::with_config(
            var("TABOOLA_CLIENT_ID")?,
            var("TABOOLA_CLIENT_SECRET")?,
            var("TABOOLA_ACCESS_TOKEN")?,
            ClientConfig::from_env(),
        )
    }

    /// Create a new client with an existing session and custom configuration.
    pub fn with_session(session: Session, config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                session,
                config,
            }),
        })
    }

    /// Get the accounts service.
    pub fn accounts(&self) -> AccountsService {
        AccountsService::new(self.inner.clone())
    }

    /// Get the campaigns service.
    pub fn campaigns(&self) -> CampaignsService {
        CampaignsService::new(self.inner.clone())
    }

    /// Get the campaign items service.
    pub fn campaign_items(&self) -> CampaignItemsService {
        CampaignItemsService::new(self.inner.clone())
    }

    /// Get the motion ads (performance video) service.
    pub fn motion_ads(&self) -> MotionAdsService {
        MotionAdsService::new(self.inner.clone())
    }

    /// Get the operations (image upload) service.
    pub fn operations(&self) -> OperationsService {
        OperationsService::new(self.inner.clone())
    }

    /// Get the reporting service.
    pub fn reportings(&self) -> ReportingsService {
        ReportingsService::new(self.inner.clone())
    }

    /// Exchange the client credentials for a new access token.
    ///
    /// Subsequent requests use the returned token. The SDK never does this
    /// on its own.
    pub async fn refresh_access_token(&self) -> Result<SecretString> {
        self.inner
            .session
            .refresh(&self.inner.http, &self.inner.config.token_url())
            .await
    }

    /// Call an endpoint that has no dedicated service method.
    ///
    /// `path` is relative to the API base URL. For GET and DELETE `params`
    /// become the query string, for POST and PUT the JSON body.
    pub async fn request(&self, method: Method, path: &str, params: Params) -> Result<Value> {
        self.request_with_headers(method, path, params, HeaderMap::new())
            .await
    }

    /// Like [`request`](Self::request), with extra headers merged over the
    /// defaults. A header given here replaces the default of the same name,
    /// including `Authorization` and `Content-Type`.
    ///
    /// File uploads go through the dedicated services; a `multipart/form-data`
    /// content type with a plain `Params` body is rejected as a validation
    /// error before anything is sent.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use taboola_rs::header::{HeaderMap, HeaderValue};
    /// use taboola_rs::{Method, Params, TaboolaClient};
    ///
    /// # async fn example(client: TaboolaClient) -> taboola_rs::Result<()> {
    /// let mut headers = HeaderMap::new();
    /// headers.insert("x-request-id", HeaderValue::from_static("nightly-sync-42"));
    /// let account = client
    ///     .request_with_headers(Method::GET, "users/current/account", Params::new(), headers)
    ///     .await?;
    /// println!("{}", account["account_id"]);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn request_with_headers(
        &self,
        method: Method,
        path: &str,
        params: Params,
        headers: HeaderMap,
    ) -> Result<Value> {
        self.inner
            .request(method, path, RequestBody::Params(params), headers)
            .await
    }

    /// Get a reference to the session.
    pub fn session(&self) -> &Session {
        &self.inner.session
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl ClientInner {
    /// Build the default headers: bearer token and JSON content type.
    pub(crate) async fn build_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();

        let token = self.session.access_token().await;
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
            .map_err(|_| Error::Validation("Invalid token format".to_string()))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        Ok(headers)
    }

    /// Make a GET request; `params` become the query string.
    pub(crate) async fn get(&self, path: &str, params: Params) -> Result<Value> {
        self.request(Method::GET, path, RequestBody::Params(params), HeaderMap::new())
            .await
    }

    /// Make a POST request with a JSON body.
    pub(crate) async fn post(&self, path: &str, params: Params) -> Result<Value> {
        self.request(Method::POST, path, RequestBody::Params(params), HeaderMap::new())
            .await
    }

    /// Make a PUT request with a JSON body.
    pub(crate) async fn put(&self, path: &str, params: Params) -> Result<Value> {
        self.request(Method::PUT, path, RequestBody::Params(params), HeaderMap::new())
            .await
    }

    /// Make a DELETE request.
    pub(crate) async fn delete(&self, path: &str) -> Result<Value> {
        self.request(
            Method::DELETE,
            path,
            RequestBody::Params(Params::new()),
            HeaderMap::new(),
        )
        .await
    }

    /// Make a multipart POST request with the extended upload timeout.
    pub(crate) async fn post_multipart(
        &self,
        path: &str,
        payload: MultipartPayload,
    ) -> Result<Value> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(MULTIPART_FORM_DATA));
        self.request(Method::POST, path, RequestBody::Multipart(payload), headers)
            .await
    }

    /// Perform one authenticated call and normalize its outcome.
    ///
    /// Connect errors are retried for any method and timeouts only for
    /// idempotent ones, up to the configured attempt count. Any HTTP
    /// response, success or not, ends the loop.
    pub(crate) async fn request(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
        headers: HeaderMap,
    ) -> Result<Value> {
        let url = self.config.endpoint(path)?;
        let retry = &self.config.retry;
        let mut attempt = 0;

        loop {
            attempt += 1;
            let builder = self
                .build_request(method.clone(), url.clone(), &body, &headers)
                .await?;

            tracing::debug!(%method, path, attempt, "Sending request");

            match builder.send().await {
                Ok(response) => return self.handle_response(response).await,
                Err(err)
                    if attempt < retry.max_attempts && retry.should_retry(&method, &err) =>
                {
                    let backoff = retry.backoff_for_attempt(attempt - 1);
                    tracing::warn!(
                        %method,
                        path,
                        attempt,
                        error = %err,
                        backoff_ms = backoff.as_millis() as u64,
                        "Transport failure, retrying"
                    );
                    tokio::time::sleep(backoff).await;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    async fn build_request(
        &self,
        method: Method,
        url: url::Url,
        body: &RequestBody,
        extra_headers: &HeaderMap,
    ) -> Result<RequestBuilder> {
        let mut headers = self.build_headers().await?;
        headers.extend(extra_headers.clone());
        let multipart = is_multipart(&headers);

        let builder = match (&method, body) {
            (&Method::GET | &Method::DELETE, RequestBody::Params(params)) => {
                let builder = self.http.request(method.clone(), url).headers(headers);
                if params.is_empty() {
                    builder
                } else {
                    builder.query(&params.to_query_pairs())
                }
            }
            (&Method::POST | &Method::PUT, RequestBody::Params(_)) if multipart => {
                return Err(Error::Validation(
                    "multipart/form-data requests need file parts, not plain params".to_string(),
                ));
            }
            (&Method::POST | &Method::PUT, RequestBody::Params(params)) => {
                let builder = self.http.request(method.clone(), url).headers(headers);
                if params.is_empty() {
                    builder
                } else {
                    builder.body(serde_json::to_vec(params)?)
                }
            }
            (&Method::POST | &Method::PUT, RequestBody::Multipart(payload)) if multipart => {
                // The form encoder supplies the boundary-bearing content type.
                headers.remove(CONTENT_TYPE);
                self.http
                    .request(method.clone(), url)
                    .headers(headers)
                    .timeout(self.config.upload_timeout)
                    .multipart(payload.to_form()?)
            }
            (&Method::POST | &Method::PUT, RequestBody::Multipart(_)) => {
                return Err(Error::Validation(format!(
                    "multipart bodies must be sent as {}",
                    MULTIPART_FORM_DATA
                )));
            }
            (_, RequestBody::Multipart(_)) => {
                return Err(Error::Validation(format!(
                    "multipart bodies require POST or PUT, got {}",
                    method
                )));
            }
            _ => {
                return Err(Error::Validation(format!(
                    "unsupported HTTP method {}",
                    method
                )));
            }
        };

        Ok(builder)
    }

    /// Decode a successful body or classify the failure.
    async fn handle_response(&self, response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let is_json = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.contains("json"));
        let text = response.text().await?;

        if status.is_success() {
            return decode_body(&text, is_json).map_err(Error::from);
        }

        let body = decode_body(&text, is_json).unwrap_or(Value::String(text));
        let err = Error::from_response(status.as_u16(), body);
        tracing::debug!(status = status.as_u16(), error = %err, "Request failed");
        Err(err)
    }
}

fn is_multipart(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|ct| ct.trim_start().starts_with(MULTIPART_FORM_DATA))
}

/// Empty bodies decode to `null`; JSON is parsed only when the response
/// says it is JSON.
fn decode_body(text: &str, is_json: bool) -> std::result::Result<Value, serde_json::Error> {
    if text.trim().is_empty() {
        Ok(Value::Null)
    } else if is_json {
        serde_json::from_str(text)
    } else {
        Ok(Value::String(text.to_string()))
    }
}

impl Clone for TaboolaClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for TaboolaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaboolaClient")
            .field("session", &self.inner.session)
            .field("config", &self.inner.config)
            .finish()
    }
}
