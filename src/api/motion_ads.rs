//! Motion ads (performance video) service.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use crate::client::ClientInner;
use crate::models::{AccountId, CampaignId, FilePart, ItemId, MultipartPayload, Params};
use crate::Result;

/// Service for motion ad operations.
///
/// Motion ads are video creatives with a still fallback image. Creating
/// one uploads both files in a single multipart request.
///
/// # Example
///
/// ```no_run
/// use taboola_rs::{AccountId, CampaignId, FilePart, Params};
///
/// # async fn example(client: taboola_rs::TaboolaClient) -> taboola_rs::Result<()> {
/// let account = AccountId::new("demo-advertiser");
/// let campaign = CampaignId::new("1234");
///
/// let video = FilePart::open("spot.mp4").await?;
/// let fallback = FilePart::open("spot.jpg").await?;
/// let item = client
///     .motion_ads()
///     .create(
///         &account,
///         &campaign,
///         video,
///         fallback,
///         Params::new().with("url", "https://example.com/landing"),
///     )
///     .await?;
/// println!("Created motion ad {}", item["id"]);
/// # Ok(())
/// # }
/// ```
pub struct MotionAdsService {
    inner: Arc<ClientInner>,
}

impl MotionAdsService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    fn items_path(account_id: &AccountId, campaign_id: &CampaignId) -> String {
        format!("{}/campaigns/{}/performance-video/items", account_id, campaign_id)
    }

    /// Get a single motion ad.
    pub async fn get(
        &self,
        account_id: &AccountId,
        campaign_id: &CampaignId,
        item_id: &ItemId,
    ) -> Result<Value> {
        let path = format!("{}/{}", Self::items_path(account_id, campaign_id), item_id);
        self.inner.get(&path, Params::new()).await
    }

    /// List a campaign's motion ads, with optional filters.
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

    /// Create a motion ad from a video and a fallback image.
    ///
    /// Sends a three-part multipart body: `new_item` (the JSON-encoded
    /// `params`), `video_file` and `fallback_file`.
    pub async fn create(
        &self,
        account_id: &AccountId,
        campaign_id: &CampaignId,
        video_file: FilePart,
        fallback_file: FilePart,
        params: Params,
    ) -> Result<Value> {
        let payload = Self::create_payload(video_file, fallback_file, params);
        self.inner
            .post_multipart(&Self::items_path(account_id, campaign_id), payload)
            .await
    }

    /// Open both files and create a motion ad from them.
    ///
    /// Fails with [`Error::Validation`](crate::Error::Validation) before
    /// any request is sent if either path is not a readable regular file.
    pub async fn create_from_paths(
        &self,
        account_id: &AccountId,
        campaign_id: &CampaignId,
        video_path: impl AsRef<Path>,
        fallback_path: impl AsRef<Path>,
        params: Params,
    ) -> Result<Value> {
        let video_file = FilePart::open(video_path).await?;
        let fallback_file = FilePart::open(fallback_path).await?;
        self.create(account_id, campaign_id, video_file, fallback_file, params)
            .await
    }

    /// Update a motion ad (PUT).
    pub async fn update(
        &self,
        account_id: &AccountId,
        campaign_id: &CampaignId,
        item_id: &ItemId,
        params: Params,
    ) -> Result<Value> {
        let path = format!("{}/{}", Self::items_path(account_id, campaign_id), item_id);
        self.inner.put(&path, params).await
    }

    fn create_payload(
        video_file: FilePart,
        fallback_file: FilePart,
        params: Params,
    ) -> MultipartPayload {
        MultipartPayload::new()
            .json("new_item", Value::Object(params.as_map().clone()))
            .file("video_file", video_file)
            .file("fallback_file", fallback_file)
    }
}
