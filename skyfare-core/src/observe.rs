//! Structured observability hooks for the engine.
//!
//! The engine reports to an injected [`EventSink`] at well-defined points
//! only: cache hit/miss, dedup reuse, retry scheduling, and branch failure.
//! Sinks stay outside the control flow; a sink must never block or fail.

use std::time::Duration;

use skyfare_types::{ProviderKind, SkyfareError};

/// One engine lifecycle event.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum EngineEvent {
    /// A search was served from the cache.
    CacheHit {
        /// Cache key that hit.
        key: String,
    },
    /// A search found no live cache entry.
    CacheMiss {
        /// Cache key that missed.
        key: String,
    },
    /// A caller joined an already in-flight computation for the same key.
    DedupJoined {
        /// Dedup key being coalesced on.
        key: String,
    },
    /// A transient provider failure scheduled a retry.
    RetryScheduled {
        /// Provider whose call failed.
        provider: String,
        /// Attempt number that just failed (1-based).
        attempt: u32,
        /// Backoff delay before the next attempt.
        delay: Duration,
    },
    /// A provider branch failed after exhausting its retry budget and was
    /// excluded from the merged result.
    BranchFailed {
        /// Provider archetype that failed.
        provider: ProviderKind,
        /// The settled failure.
        error: SkyfareError,
    },
}

/// Collaborator receiving engine events.
pub trait EventSink: Send + Sync {
    /// Record one event. Implementations must not block.
    fn record(&self, event: &EngineEvent);
}

/// Default sink mapping events onto `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn record(&self, event: &EngineEvent) {
        match event {
            EngineEvent::CacheHit { key } => tracing::debug!(key = %key, "cache hit"),
            EngineEvent::CacheMiss { key } => tracing::debug!(key = %key, "cache miss"),
            EngineEvent::DedupJoined { key } => {
                tracing::debug!(key = %key, "joined in-flight search");
            }
            EngineEvent::RetryScheduled {
                provider,
                attempt,
                delay,
            } => tracing::warn!(
                provider = %provider,
                attempt = *attempt,
                delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                "retrying provider call"
            ),
            EngineEvent::BranchFailed { provider, error } => {
                tracing::warn!(provider = %provider, error = %error, "provider branch failed");
            }
        }
    }
}

/// Sink that discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl EventSink for NullSink {
    fn record(&self, _event: &EngineEvent) {}
}
