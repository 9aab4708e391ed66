use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Instant;

use skyfare_types::RateLimitConfig;

struct TokenBucket {
    tokens: f64,
    last_refill: Instant,
}

/// Per-key token-bucket rate limiter.
///
/// Each key owns an independent bucket created full on first use. Refill is
/// lazy: tokens accrue as a function of elapsed time at acquisition, so no
/// background task runs. Acquisition is all-or-nothing for one whole token,
/// and fractional accrual carries over between calls.
pub struct RateLimiter {
    buckets: Mutex<HashMap<String, TokenBucket>>,
    config: RateLimitConfig,
}

impl RateLimiter {
    /// Create a limiter from its configuration.
    #[must_use]
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            buckets: Mutex::new(HashMap::new()),
            config,
        }
    }

    /// Try to take one token from `key`'s bucket. Returns whether a token
    /// was consumed; never blocks.
    pub fn acquire(&self, key: &str) -> bool {
        let mut buckets = self.buckets.lock().expect("limiter lock poisoned");
        let now = Instant::now();
        let bucket = buckets.entry(key.to_string()).or_insert(TokenBucket {
            tokens: self.config.capacity,
            last_refill: now,
        });
        Self::refill(bucket, &self.config, now);
        if bucket.tokens >= 1.0 {
            bucket.tokens -= 1.0;
            true
        } else {
            false
        }
    }

    /// Wait until a token for `key` can be consumed, polling at the
    /// configured interval. Completes once the token is taken.
    pub async fn wait_for_token(&self, key: &str) {
        loop {
            if self.acquire(key) {
                return;
            }
            tracing::trace!(key, "rate limited, waiting for token");
            tokio::time::sleep(self.config.poll_interval).await;
        }
    }

    /// Whole tokens currently available for `key`, after lazy refill. A key
    /// with no bucket yet reports full capacity.
    pub fn remaining_tokens(&self, key: &str) -> u64 {
        let mut buckets = self.buckets.lock().expect("limiter lock poisoned");
        let now = Instant::now();
        match buckets.get_mut(key) {
            Some(bucket) => {
                Self::refill(bucket, &self.config, now);
                bucket.tokens.floor() as u64
            }
            None => self.config.capacity.floor() as u64,
        }
    }

    /// Restore one bucket (or every bucket, when `key` is `None`) to full
    /// capacity.
    pub fn reset(&self, key: Option<&str>) {
        let mut buckets = self.buckets.lock().expect("limiter lock poisoned");
        match key {
            Some(key) => {
                buckets.remove(key);
            }
            None => buckets.clear(),
        }
    }

    fn refill(bucket: &mut TokenBucket, config: &RateLimitConfig, now: Instant) {
        let elapsed = now.saturating_duration_since(bucket.last_refill);
        let intervals = elapsed.as_secs_f64() / config.refill_interval.as_secs_f64();
        if intervals > 0.0 {
            bucket.tokens = (bucket.tokens + intervals * config.refill_rate).min(config.capacity);
            bucket.last_refill = now;
        }
    }
}
