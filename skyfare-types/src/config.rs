//! Configuration types for the engine and its resilience components.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Configuration for the aggregated-response cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    /// TTL applied when `set` is called without an explicit one.
    pub default_ttl: Duration,
    /// Maximum number of entries retained; oldest entries are evicted first.
    pub capacity: usize,
    /// Run a proactive expired-entry sweep every Nth insertion.
    pub sweep_every: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: Duration::from_secs(5 * 60),
            capacity: 1024,
            sweep_every: 100,
        }
    }
}

/// Configuration for the per-key token-bucket rate limiter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitConfig {
    /// Bucket capacity; bursts are admitted up to this many tokens.
    pub capacity: f64,
    /// Tokens added per refill interval.
    pub refill_rate: f64,
    /// Length of one refill interval.
    pub refill_interval: Duration,
    /// How long `wait_for_token` sleeps between acquisition attempts.
    pub poll_interval: Duration,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            capacity: 10.0,
            refill_rate: 1.0,
            refill_interval: Duration::from_secs(1),
            poll_interval: Duration::from_millis(100),
        }
    }
}

/// Configuration for bounded exponential-backoff retry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of invocations, including the first.
    pub max_attempts: u32,
    /// Delay before the first retry.
    pub initial_delay: Duration,
    /// Upper bound on any single backoff delay.
    pub max_delay: Duration,
    /// Multiplier applied to the delay after each failed attempt.
    pub backoff_multiplier: f64,
    /// Case-insensitive substrings that mark an error as transient. An
    /// error whose rendered text matches none of these is re-thrown
    /// immediately without consuming remaining attempts.
    pub retryable_patterns: Vec<String>,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            initial_delay: Duration::from_millis(1000),
            max_delay: Duration::from_millis(10_000),
            backoff_multiplier: 2.0,
            retryable_patterns: vec![
                "timeout".to_string(),
                "connection reset".to_string(),
                "timed out".to_string(),
                "429".to_string(),
                "503".to_string(),
            ],
        }
    }
}

/// Global configuration for the `SearchEngine` orchestrator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Response cache settings.
    pub cache: CacheConfig,
    /// Outbound rate-limiter settings.
    pub rate_limit: RateLimitConfig,
    /// Per-branch retry settings.
    pub retry: RetryConfig,
    /// Logical resource name every search acquires a token for. All
    /// searches share one bucket, protecting a single aggregate downstream
    /// budget rather than per-provider budgets.
    pub rate_limit_key: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            cache: CacheConfig::default(),
            rate_limit: RateLimitConfig::default(),
            retry: RetryConfig::default(),
            rate_limit_key: "flight-search".to_string(),
        }
    }
}
