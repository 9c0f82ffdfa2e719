//! # taboola-rs
//!
//! An async Rust client for the Taboola Backstage advertising API.
//!
//! The crate wraps the Backstage REST endpoints behind one service per
//! resource group and handles bearer authentication, the OAuth
//! client-credentials token exchange, multipart uploads and error
//! classification.
//!
//! ## Features
//!
//! - **Accounts**: list the accounts the credentials can access
//! - **Campaigns**: list and fetch campaigns
//! - **Campaign Items**: full CRUD on campaign items
//! - **Motion Ads**: video creatives, uploaded with a fallback image
//! - **Operations**: image uploads
//! - **Reports**: top campaign content and realtime reports
//!
//! Response bodies are returned as [`serde_json::Value`] exactly as the API
//! sent them; the SDK performs no schema validation.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use taboola_rs::{TaboolaClient, AccountId, CampaignId, Params};
//!
//! #[tokio::main]
//! async fn main() -> taboola_rs::Result<()> {
//!     let client = TaboolaClient::new("client-id", "client-secret", "")?;
//!     client.refresh_access_token().await?;
//!
//!     let accounts = client.accounts().list_all().await?;
//!     println!("{}", accounts);
//!
//!     let account = AccountId::new("demo-advertiser");
//!     let campaign = CampaignId::new("1234");
//!     let items = client
//!         .campaign_items()
//!         .list_all(&account, &campaign, Some(Params::new().with("limit", 10)))
//!         .await?;
//!     println!("{}", items);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! ```rust,no_run
//! use taboola_rs::{TaboolaClient, AccountId, CampaignId, ItemId, Error};
//!
//! # async fn example(client: TaboolaClient) {
//! let account = AccountId::new("demo-advertiser");
//! match client
//!     .campaign_items()
//!     .get(&account, &CampaignId::new("1"), &ItemId::new("2"))
//!     .await
//! {
//!     Ok(item) => println!("{}", item),
//!     Err(Error::Authentication { .. }) => {
//!         client.refresh_access_token().await.ok();
//!     }
//!     Err(err) => eprintln!("request failed: {}", err),
//! }
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::Session;
pub use client::{ClientConfig, TaboolaClient};
pub use error::{Error, Result};
pub use models::{AccountId, CampaignId, FilePart, ItemId, MultipartPayload, Params, PayloadPart};
pub use reqwest::{header, Method};

/// Prelude module for convenient imports.
///
/// ```rust
/// use taboola_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        AccountsService, CampaignItemsService, CampaignsService, MotionAdsService,
        OperationsService, ReportingsService, TopCampaignContentQuery,
    };
    pub use crate::auth::Session;
    pub use crate::client::{ClientConfig, TaboolaClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{AccountId, CampaignId, FilePart, ItemId, Params};
}
