//! Motion ad upload example.
//!
//! Run with:
//! cargo run --example upload_motion_ad -- <account> <campaign> <video> <fallback-image>

use taboola_rs::{AccountId, CampaignId, FilePart, Params, TaboolaClient};

#[tokio::main]
async fn main() -> taboola_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [account, campaign, video, fallback] = args.as_slice() else {
        eprintln!("usage: upload_motion_ad <account> <campaign> <video> <fallback-image>");
        std::process::exit(2);
    };

    // Reads TABOOLA_CLIENT_ID, TABOOLA_CLIENT_SECRET, TABOOLA_ACCESS_TOKEN
    let client = TaboolaClient::from_env()?;

    let video = FilePart::open(video).await?;
    let fallback = FilePart::open(fallback).await?;
    println!(
        "Uploading {} ({}, {} bytes) with fallback {} ({})",
        video.filename(),
        video.mime_type(),
        video.len(),
        fallback.filename(),
        fallback.mime_type()
    );

    let item = client
        .motion_ads()
        .create(
            &AccountId::new(account.as_str()),
            &CampaignId::new(campaign.as_str()),
            video,
            fallback,
            Params::new()
                .with("url", "https://example.com/landing")
                .with("title", "Motion ad from taboola-rs"),
        )
        .await?;

    println!("Created motion ad: {}", item["id"]);
    Ok(())
}
