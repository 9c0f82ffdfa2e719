//! Authentication for the Taboola Backstage API.
//!
//! Every API call carries `Authorization: Bearer <token>`. The token is
//! obtained with the OAuth client-credentials grant; the SDK does not
//! detect expiry, so callers refresh when a token is known to be stale
//! or a request fails with [`Error::Authentication`](crate::Error::Authentication).
//!
//! ```no_run
//! use taboola_rs::TaboolaClient;
//!
//! # async fn example() -> taboola_rs::Result<()> {
//! let client = TaboolaClient::new("client-id", "client-secret", "")?;
//! client.refresh_access_token().await?;
//! # Ok(())
//! # }
//! ```

mod session;

pub use session::Session;
