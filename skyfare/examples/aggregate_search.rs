//! Run one aggregated search against the three simulated providers and
//! print the merged, price-sorted results.
//!
//! ```sh
//! cargo run --example aggregate_search
//! ```

use std::sync::Arc;

use chrono::NaiveDate;

use skyfare::{CabinClass, SearchEngine, SearchParams, SkyfareError};
use skyfare_providers::{GdsProvider, MetaSearchProvider, NdcProvider};

#[tokio::main]
async fn main() -> Result<(), SkyfareError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skyfare=debug".into()),
        )
        .init();

    let engine = SearchEngine::builder()
        .with_provider(Arc::new(GdsProvider::new()))
        .with_provider(Arc::new(NdcProvider::new()))
        .with_provider(Arc::new(MetaSearchProvider::new()))
        .build()?;

    let params = SearchParams::new(
        "JFK",
        "LAX",
        NaiveDate::from_ymd_opt(2025, 6, 15).expect("valid date"),
        2,
        CabinClass::Economy,
    )?;

    let response = engine.search(&params).await?;
    println!(
        "request {}: {} flights (gds: {}, ndc: {}, meta: {})",
        response.request_id,
        response.flights.len(),
        response.providers.gds.count,
        response.providers.ndc.count,
        response.providers.aggregator.count,
    );
    for flight in response.flights.iter().take(5) {
        println!(
            "  {} {} {} -> {}  {} {}  ({} min, {} stops)",
            flight.airline,
            flight.flight_number,
            flight.origin.code,
            flight.destination.code,
            flight.price.amount,
            flight.price.currency,
            flight.duration_minutes,
            flight.stops,
        );
    }

    // Second identical search: served from the cache.
    let cached = engine.search(&params).await?;
    println!("second search cached: {}", cached.cached);
    let stats = engine.cache_stats().await;
    println!(
        "cache: {} entries, {} hits, {} misses, hit rate {:.2}",
        stats.size, stats.hits, stats.misses, stats.hit_rate
    );

    Ok(())
}
