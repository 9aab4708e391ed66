//! skyfare-middleware
//!
//! Resilience components the engine composes around provider calls: a TTL
//! response cache with hit/miss accounting, a per-key token-bucket rate
//! limiter, a bounded exponential-backoff retry handler, and an in-flight
//! request deduplicator. Each is an explicit injected component with its own
//! interior synchronization; nothing here is ambient or static.
#![warn(missing_docs)]

mod cache;
mod dedup;
mod limiter;
mod retry;

pub use cache::ResponseCache;
pub use dedup::RequestDeduplicator;
pub use limiter::RateLimiter;
pub use retry::RetryHandler;
