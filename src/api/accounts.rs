//! Accounts service.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::models::Params;
use crate::Result;

/// Service for account-related operations.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: taboola_rs::TaboolaClient) -> taboola_rs::Result<()> {
/// let accounts = client.accounts().list_all().await?;
/// for account in accounts["results"].as_array().into_iter().flatten() {
///     println!("Account: {} ({})", account["account_id"], account["type"]);
/// }
/// # Ok(())
/// # }
/// ```
pub struct AccountsService {
    inner: Arc<ClientInner>,
}

impl AccountsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List the accounts the current credentials are allowed to access.
    pub async fn list_all(&self) -> Result<Value> {
        self.inner
            .get("users/current/allowed-accounts", Params::new())
            .await
    }
}
