//! List campaigns example.
//!
//! Exchanges client credentials for a token, then lists every allowed
//! account and its campaigns.
//!
//! Run with: cargo run --example list_campaigns

use taboola_rs::{AccountId, Params, TaboolaClient};

#[tokio::main]
async fn main() -> taboola_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let client_id = std::env::var("TABOOLA_CLIENT_ID")
        .expect("TABOOLA_CLIENT_ID environment variable required");
    let client_secret = std::env::var("TABOOLA_CLIENT_SECRET")
        .expect("TABOOLA_CLIENT_SECRET environment variable required");

    let client = TaboolaClient::new(client_id, client_secret, "")?;
    client.refresh_access_token().await?;
    println!("Successfully authenticated!");

    let accounts = client.accounts().list_all().await?;
    let results = accounts["results"].as_array().cloned().unwrap_or_default();
    println!("\nFound {} account(s):", results.len());

    for account in &results {
        let Some(account_id) = account["account_id"].as_str() else {
            continue;
        };
        println!("  - {} ({})", account_id, account["type"]);

        let campaigns = client
            .campaigns()
            .list_all(
                &AccountId::new(account_id),
                Some(Params::new().with("fetch_level", "R")),
            )
            .await?;
        for campaign in campaigns["results"].as_array().into_iter().flatten() {
            println!("    {} {} [{}]", campaign["id"], campaign["name"], campaign["status"]);
        }
    }

    println!("\nDone!");
    Ok(())
}
