//! API service modules for Taboola Backstage endpoints.
//!
//! Each service covers one resource group and maps its methods one to one
//! onto REST endpoints. Response bodies are returned exactly as decoded.

mod accounts;
mod campaign_items;
mod campaigns;
mod motion_ads;
mod operations;
mod reportings;

pub use accounts::AccountsService;
pub use campaign_items::CampaignItemsService;
pub use campaigns::CampaignsService;
pub use motion_ads::MotionAdsService;
pub use operations::OperationsService;
pub use reportings::{ReportingsService, TopCampaignContentQuery};
