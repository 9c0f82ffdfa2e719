//! Data models for the Taboola Backstage API.
//!
//! Response bodies are passed through as [`serde_json::Value`]; the types
//! here only cover what goes *into* a request:
//!
//! - [`primitives`] - Id newtypes like `AccountId`, `CampaignId`, `ItemId`
//! - [`params`] - The untyped parameter mapping sent as query or body
//! - [`upload`] - File parts for multipart uploads

pub mod primitives;
pub mod params;
pub mod upload;

// Re-export commonly used types
pub use primitives::*;
pub use params::*;
pub use upload::*;
