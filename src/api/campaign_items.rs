//! Campaign items service.

use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::models::{AccountId, CampaignId, ItemId, Params};
use crate::Result;

/// Service for campaign item (creative) operations.
///
/// # Example
///
/// ```no_run
/// use taboola_rs::{AccountId, CampaignId, ItemId, Params};
///
/// # async fn example(client: taboola_rs::TaboolaClient) -> taboola_rs::Result<()> {
/// let account = AccountId::new("demo-advertiser");
/// let campaign = CampaignId::new("1234");
///
/// let item = client
///     .campaign_items()
///     .create(&account, &campaign, Params::new().with("url", "https://example.com/landing"))
///     .await?;
///
/// let item_id = ItemId::new(item["id"].as_str().unwrap_or_default());
/// client
///     .campaign_items()
///     .update(&account, &campaign, &item_id, Params::new().with("title", "Spring sale"))
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct CampaignItemsService {
    inner: Arc<ClientInner>,
}

impl CampaignItemsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    fn items_path(account_id: &AccountId, campaign_id: &CampaignId) -> String {
        format!("{}/campaigns/{}/items", account_id, campaign_id)
    }

    fn item_path(account_id: &AccountId, campaign_id: &CampaignId, item_id: &ItemId) -> String {
        format!("{}/{}", Self::items_path(account_id, campaign_id), item_id)
    }

    /// Get a single item.
    pub async fn get(
        &self,
        account_id: &AccountId,
        campaign_id: &CampaignId,
        item_id: &ItemId,
    ) -> Result<Value> {
        self.inner
            .get(&Self::item_path(account_id, campaign_id, item_id), Params::new())
            .await
    }

    /// List a campaign's items, with optional filters such as `limit`/`offset`.
    pub async fn list_all(
        &self,
        account_id: &AccountId,
        campaign_id: &CampaignId,
        params: Option<Params>,
    ) -> Result<Value> {
        self.inner
            .get(
                &Self::items_path(account_id, campaign_id),
                params.unwrap_or_default(),
            )
            .await
    }

    /// Create an item. `params` is sent as the JSON body.
    pub async fn create(
        &self,
        account_id: &AccountId,
        campaign_id: &CampaignId,
        params: Params,
    ) -> Result<Value> {
        self.inner
            .post(&Self::items_path(account_id, campaign_id), params)
            .await
    }

    /// Update an item.
    ///
    /// Backstage updates items with POST, not PUT.
    pub async fn update(
        &self,
        account_id: &AccountId,
        campaign_id: &CampaignId,
        item_id: &ItemId,
        params: Params,
    ) -> Result<Value> {
        self.inner
            .post(&Self::item_path(account_id, campaign_id, item_id), params)
            .await
    }

    /// Delete an item.
    pub async fn delete(
        &self,
        account_id: &AccountId,
        campaign_id: &CampaignId,
        item_id: &ItemId,
    ) -> Result<Value> {
        self.inner
            .delete(&Self::item_path(account_id, campaign_id, item_id))
            .await
    }
}
