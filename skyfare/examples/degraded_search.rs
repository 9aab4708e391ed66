//! Show partial-failure tolerance: providers tuned to fail often still
//! leave the search usable, and the response stats say who was down.
//!
//! ```sh
//! cargo run --example degraded_search
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
                .unwrap_or_else(|_| "skyfare=info".into()),
        )
        .init();

    // High failure rates so degraded responses actually show up.
    let engine = SearchEngine::builder()
        .with_provider(Arc::new(GdsProvider::with_tuning(100..=300, 0.6)))
        .with_provider(Arc::new(NdcProvider::with_tuning(100..=300, 0.6)))
        .with_provider(Arc::new(MetaSearchProvider::with_tuning(100..=300, 0.2)))
        .build()?;

    for day in 10..15 {
        let params = SearchParams::new(
            "SFO",
            "SEA",
            NaiveDate::from_ymd_opt(2025, 7, day).expect("valid date"),
            1,
            CabinClass::Economy,
        )?;
        let response = engine.search(&params).await?;
        println!(
            "2025-07-{day:02}: {} flights  [gds {} | ndc {} | meta {}]",
            response.flights.len(),
            if response.providers.gds.success { "up" } else { "down" },
            if response.providers.ndc.success { "up" } else { "down" },
            if response.providers.aggregator.success { "up" } else { "down" },
        );
    }

    Ok(())
}
