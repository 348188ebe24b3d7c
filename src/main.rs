use anyhow::Result;
use tracing::{info, Level};

use qafzh_market::api::{ApiClient, ProductFilter};
use qafzh_market::marketplace::ProductFeed;
use qafzh_market::search::unified_search;

const DEFAULT_API_URL: &str = "https://srv694651.hstgr.cloud/solar/api/v1";

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let base_url =
        std::env::var("QAFZH_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
    let keyword = std::env::args().nth(1);

    info!("☀️ Qafzh Market - Marketplace Browser");
    info!("=====================================");
    info!("API: {}", base_url);

    let client = ApiClient::new(&base_url)?;

    // Browse the first page of approved listings
    let mut feed = ProductFeed::new(client.clone(), ProductFilter::default());
    feed.fetch_next_page().await?;

    info!(
        "\n✅ Loaded {} of {} listings\n",
        feed.products().len(),
        feed.total_count()
    );

    for (i, product) in feed.products().iter().enumerate() {
        println!(
            "{}. {} ({} {:?})",
            i + 1,
            product.name,
            product.price,
            product.currency
        );
        println!("   Type: {}", product.product_type.as_str());
        if let Some(city) = &product.city {
            println!("   Location: {}, {}", product.governorate, city);
        } else {
            println!("   Location: {}", product.governorate);
        }
        println!("   Contact: {}", product.phone);
        println!();
    }

    // Run a unified search when a keyword was given
    if let Some(keyword) = keyword {
        info!("Searching everything for '{}'...", keyword);
        let results = unified_search(&client, &keyword).await;
        info!(
            "🔎 {} products, {} engineers, {} shops, {} ads",
            results.products.total,
            results.engineers.total,
            results.shops.total,
            results.ads.total
        );
    }

    // Save the browsed page for inspection
    let json = serde_json::to_string_pretty(feed.products())?;
    tokio::fs::write("browsed_products.json", json).await?;
    info!("💾 Saved listings to browsed_products.json");

    Ok(())
}
