//! Campaigns service.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::models::{AccountId, CampaignId, Params};
use crate::Result;

/// Service for campaign operations.
///
/// # Example
///
/// ```no_run
/// use taboola_rs::{AccountId, Params};
///
/// # async fn example(client: taboola_rs::TaboolaClient) -> taboola_rs::Result<()> {
/// let account = AccountId::new("demo-advertiser");
/// let running = client
///     .campaigns()
///     .list_all(&account, Some(Params::new().with("fetch_level", "R")))
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct CampaignsService {
    inner: Arc<ClientInner>,
}

impl CampaignsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// List campaigns for an account, with optional filters.
    pub async fn list_all(&self, account_id: &AccountId, params: Option<Params>) -> Result<Value> {
        self.inner
            .get(
                &format!("{}/campaigns", account_id),
                params.unwrap_or_default(),
            )
            .await
    }

    /// Get a single campaign.
    pub async fn get(&self, account_id: &AccountId, campaign_id: &CampaignId) -> Result<Value> {
        self.inner
            .get(
                &format!("{}/campaigns/{}", account_id, campaign_id),
                Params::new(),
            )
            .await
    }
}
