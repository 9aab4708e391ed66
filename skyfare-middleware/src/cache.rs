use std::num::NonZeroUsize;
use std::time::{Duration, Instant};

use lru::LruCache;
use tokio::sync::Mutex;

use skyfare_types::{CacheConfig, CacheStats};

struct Entry<V> {
    value: V,
    expires_at: Instant,
}

struct Inner<V> {
    entries: LruCache<String, Entry<V>>,
    hits: u64,
    misses: u64,
    inserts: u64,
}

/// TTL key/value cache for completed aggregated responses.
///
/// Expiry is lazy: an expired entry is evicted when accessed and counted as
/// a miss. A best-effort sweep every `sweep_every`-th insertion evicts all
/// expired entries to bound memory growth between accesses; the LRU
/// capacity bound caps memory regardless.
pub struct ResponseCache<V> {
    inner: Mutex<Inner<V>>,
    default_ttl: Duration,
    sweep_every: u64,
}

impl<V: Clone> ResponseCache<V> {
    /// Create a cache from its configuration.
    #[must_use]
    pub fn new(cfg: &CacheConfig) -> Self {
        let cap = NonZeroUsize::new(cfg.capacity.max(1)).expect("capacity clamped to >= 1");
        Self {
            inner: Mutex::new(Inner {
                entries: LruCache::new(cap),
                hits: 0,
                misses: 0,
                inserts: 0,
            }),
            default_ttl: cfg.default_ttl,
            sweep_every: cfg.sweep_every.max(1) as u64,
        }
    }

    /// Store a value, expiring `ttl` (or the default TTL) from now.
    pub async fn set(&self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
        let expires_at = Instant::now() + ttl.unwrap_or(self.default_ttl);
        let mut guard = self.inner.lock().await;
        guard.entries.put(key.into(), Entry { value, expires_at });
        guard.inserts += 1;
        if guard.inserts % self.sweep_every == 0 {
            Self::sweep(&mut guard);
        }
    }

    /// Fetch a live value. Every call counts as exactly one hit or one
    /// miss; an expired entry is evicted and counted as a miss.
    pub async fn get(&self, key: &str) -> Option<V> {
        let now = Instant::now();
        let mut guard = self.inner.lock().await;
        let live = match guard.entries.get(key) {
            Some(entry) if now <= entry.expires_at => Some(entry.value.clone()),
            Some(_) => None,
            None => {
                guard.misses += 1;
                return None;
            }
        };
        match live {
            Some(value) => {
                guard.hits += 1;
                Some(value)
            }
            None => {
                // Expired: evict on access and count as a miss.
                guard.entries.pop(key);
                guard.misses += 1;
                None
            }
        }
    }

    /// Whether a live entry exists. Counts as an access, like `get`.
    pub async fn contains(&self, key: &str) -> bool {
        self.get(key).await.is_some()
    }

    /// Drop one entry unconditionally.
    pub async fn remove(&self, key: &str) {
        self.inner.lock().await.entries.pop(key);
    }

    /// Drop all entries and reset the counters.
    pub async fn clear(&self) {
        let mut guard = self.inner.lock().await;
        guard.entries.clear();
        guard.hits = 0;
        guard.misses = 0;
        guard.inserts = 0;
    }

    /// Accounting snapshot.
    pub async fn stats(&self) -> CacheStats {
        let guard = self.inner.lock().await;
        let accesses = guard.hits + guard.misses;
        #[allow(clippy::cast_precision_loss)]
        let hit_rate = if accesses == 0 {
            0.0
        } else {
            guard.hits as f64 / accesses as f64
        };
        CacheStats {
            size: guard.entries.len(),
            hits: guard.hits,
            misses: guard.misses,
            hit_rate,
        }
    }

    fn sweep(inner: &mut Inner<V>) {
        let now = Instant::now();
        let expired: Vec<String> = inner
            .entries
            .iter()
            .filter(|(_, e)| now > e.expires_at)
            .map(|(k, _)| k.clone())
            .collect();
        for key in expired {
            inner.entries.pop(&key);
        }
    }
}
