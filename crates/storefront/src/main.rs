//! Simple test harness for the storefront orchestrator.
//!
//! This binary seeds the marketplace and walks one browse page and a
//! suggestion round end to end.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use query::FilterSpec;
use services::Latency;
use storefront::Storefront;
use suggest::{DEFAULT_SUGGESTION_COUNT, SuggestionRequest};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter("info,storefront=debug,services=debug,query=debug")
        .init();

    info!("Starting NameFast storefront test harness");

    info!("Loading seed data...");
    let storefront = Storefront::from_seed_dir(Path::new("data/seed"), Latency::simulated())
        .context("Failed to load seed data")?;
    info!("Storefront ready");

    let spec = FilterSpec {
        sort_by: "newest".to_string(),
        ..Default::default()
    };
    let page = storefront.browse(&spec, 1).await?;
    info!(
        "Browse: showing {}-{} of {} domains across {} page(s)",
        page.start_record, page.end_record, page.total_matches, page.total_pages
    );
    for (i, listing) in page.items.iter().enumerate() {
        info!(
            "{}. {} - ${} [{}] {}",
            i + 1,
            listing.name,
            listing.price,
            listing.category,
            listing.status.label()
        );
    }

    let request = SuggestionRequest {
        business_type: "Startup".to_string(),
        keywords: "fast, smart, innovative, tech".to_string(),
        ..Default::default()
    };
    let suggestions = storefront
        .suggest(&request, DEFAULT_SUGGESTION_COUNT)
        .await?;
    info!("Received {} suggestions:", suggestions.len());
    for (i, suggestion) in suggestions.iter().enumerate() {
        info!(
            "{}. {} - ${} (score {}, {})",
            i + 1,
            suggestion.name,
            suggestion.price,
            suggestion.score,
            if suggestion.available {
                "available"
            } else {
                "taken"
            }
        );
    }

    let overview = storefront.admin_overview().await?;
    info!(
        "Admin: {} listing(s) pending review, {} purchase(s), ${} total revenue",
        overview.pending_listings.len(),
        overview.purchases.len(),
        overview.total_revenue
    );

    Ok(())
}
