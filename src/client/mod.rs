//! HTTP client and service layer for the Taboola Backstage API.
//!
//! This module provides the main entry point [`TaboolaClient`] and the
//! shared request pipeline every resource service goes through.
//!
//! # Example
//!
//! ```no_run
//! use taboola_rs::{TaboolaClient, ClientConfig};
//!
//! # async fn example() -> taboola_rs::Result<()> {
//! let config = ClientConfig::default().with_user_agent("reporting-bot/2.1");
//! let client = TaboolaClient::with_config("client-id", "client-secret", "", config)?;
//! client.refresh_access_token().await?;
//!
//! let accounts = client.accounts().list_all().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;

pub use config::{ClientConfig, DEFAULT_HOST};
pub use http::TaboolaClient;
pub(crate) use http::ClientInner;
