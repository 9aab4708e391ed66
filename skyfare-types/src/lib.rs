//! skyfare-types
//!
//! Shared data transfer objects for the skyfare workspace.
//!
//! - `params`: normalized search requests and cabin classes.
//! - `flight`: the unified flight record produced by normalization.
//! - `response`: aggregated search responses and per-provider outcome stats.
//! - `config`: engine, cache, rate-limit, and retry configuration.
//! - `error`: the unified [`SkyfareError`] used across all crates.
#![warn(missing_docs)]

mod config;
mod error;
mod flight;
mod params;
mod response;

pub use config::{CacheConfig, EngineConfig, RateLimitConfig, RetryConfig};
pub use error::SkyfareError;
pub use flight::{Airport, Flight, Price, ProviderKind};
pub use params::{CabinClass, SearchParams};
pub use response::{CacheStats, ProviderOutcomes, ProviderStats, SearchResponse};
