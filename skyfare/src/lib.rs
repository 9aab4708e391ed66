//! skyfare
//!
//! Flight search aggregation engine. One [`SearchEngine::search`] call fans
//! out to every registered provider in parallel, retries transient failures
//! per branch, normalizes each provider's native schema into unified
//! [`Flight`](skyfare_types::Flight) records, and merges the survivors into
//! one price-sorted, deduplicated response.
//!
//! Around the fan-out sit the resilience layers:
//!
//! - a TTL response cache keyed on the search params,
//! - in-flight deduplication so concurrent identical searches share one
//!   upstream computation,
//! - a token-bucket rate limiter protecting the aggregate downstream
//!   budget,
//! - bounded exponential-backoff retry per provider branch.
//!
//! Providers can fail independently; a degraded search still returns the
//! flights the healthy providers produced, with per-provider outcome stats
//! in the response.
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use chrono::NaiveDate;
//! use skyfare::{CabinClass, SearchEngine, SearchParams};
//! use skyfare_providers::{GdsProvider, MetaSearchProvider, NdcProvider};
//!
//! # async fn run() -> Result<(), skyfare::SkyfareError> {
//! let engine = SearchEngine::builder()
//!     .with_provider(Arc::new(GdsProvider::new()))
//!     .with_provider(Arc::new(NdcProvider::new()))
//!     .with_provider(Arc::new(MetaSearchProvider::new()))
//!     .build()?;
//!
//! let params = SearchParams::new(
//!     "JFK",
//!     "LAX",
//!     NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
//!     1,
//!     CabinClass::Economy,
//! )?;
//! let response = engine.search(&params).await?;
//! println!("{} flights, cheapest first", response.flights.len());
//! # Ok(())
//! # }
//! ```
#![warn(missing_docs)]

mod engine;
mod merge;

pub use engine::{SearchEngine, SearchEngineBuilder};
pub use skyfare_core::{
    EngineEvent, EventSink, FlightProvider, NullSink, RawResponse, TracingSink,
};
pub use skyfare_types::{
    CabinClass, CacheStats, EngineConfig, Flight, ProviderKind, ProviderOutcomes, SearchParams,
    SearchResponse, SkyfareError,
};
