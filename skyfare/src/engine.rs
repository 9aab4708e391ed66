use std::sync::Arc;

use futures::future::join_all;
use uuid::Uuid;

use skyfare_core::key::cache_key;
use skyfare_core::normalize::normalize;
use skyfare_core::{EngineEvent, EventSink, FlightProvider, TracingSink};
use skyfare_middleware::{RateLimiter, RequestDeduplicator, ResponseCache, RetryHandler};
use skyfare_types::{
    CacheStats, EngineConfig, Flight, ProviderOutcomes, SearchParams, SearchResponse, SkyfareError,
};

/// Orchestrator that fans a search out across registered providers.
///
/// One `search` call flows through the resilience layers in a fixed order:
/// cache probe, in-flight deduplication, rate limiting, then the parallel
/// provider fan-out where each branch retries independently. Branches fail
/// independently too; the merged response carries per-provider outcome stats
/// so callers can tell a degraded result from a full one.
pub struct SearchEngine {
    providers: Vec<Arc<dyn FlightProvider>>,
    cache: Arc<ResponseCache<SearchResponse>>,
    limiter: Arc<RateLimiter>,
    retry: Arc<RetryHandler>,
    dedup: Arc<RequestDeduplicator<SearchResponse>>,
    sink: Arc<dyn EventSink>,
    cfg: EngineConfig,
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("providers", &self.providers.len())
            .field("cfg", &self.cfg)
            .finish_non_exhaustive()
    }
}

/// Builder for constructing a [`SearchEngine`] with custom configuration.
pub struct SearchEngineBuilder {
    providers: Vec<Arc<dyn FlightProvider>>,
    cfg: EngineConfig,
    sink: Arc<dyn EventSink>,
}

impl Default for SearchEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchEngineBuilder {
    /// Create a builder with default configuration and a `tracing`-backed
    /// event sink. At least one provider must be registered before `build`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            providers: vec![],
            cfg: EngineConfig::default(),
            sink: Arc::new(TracingSink),
        }
    }

    /// Register a provider. Registration order is also fan-out order, which
    /// only matters for log readability; branches run concurrently.
    #[must_use]
    pub fn with_provider(mut self, provider: Arc<dyn FlightProvider>) -> Self {
        self.providers.push(provider);
        self
    }

    /// Replace the whole engine configuration.
    #[must_use]
    pub fn config(mut self, cfg: EngineConfig) -> Self {
        self.cfg = cfg;
        self
    }

    /// Replace the event sink the engine and its components report to.
    #[must_use]
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Build the engine.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no providers have been registered via
    /// [`with_provider`](Self::with_provider).
    pub fn build(self) -> Result<SearchEngine, SkyfareError> {
        if self.providers.is_empty() {
            return Err(SkyfareError::invalid_arg(
                "no providers registered; add at least one via with_provider(...)",
            ));
        }
        Ok(SearchEngine {
            providers: self.providers,
            cache: Arc::new(ResponseCache::new(&self.cfg.cache)),
            limiter: Arc::new(RateLimiter::new(self.cfg.rate_limit.clone())),
            retry: Arc::new(RetryHandler::new(self.cfg.retry.clone()).with_sink(self.sink.clone())),
            dedup: Arc::new(RequestDeduplicator::new().with_sink(self.sink.clone())),
            sink: self.sink,
            cfg: self.cfg,
        })
    }
}

impl SearchEngine {
    /// Start building a new engine.
    #[must_use]
    pub fn builder() -> SearchEngineBuilder {
        SearchEngineBuilder::new()
    }

    /// Run one aggregated search.
    ///
    /// A cache hit returns the stored response with `cached` flipped to
    /// true. On a miss, concurrent searches for the same key share one
    /// computation; the computation takes a rate-limit token, fans out to
    /// every provider in parallel, normalizes and merges what succeeded,
    /// and caches the result. Provider failures degrade the result rather
    /// than failing it; a search with every branch down still returns an
    /// empty response whose stats show no successful provider.
    ///
    /// # Errors
    /// Returns `Internal` only if the params cannot be serialized into a
    /// cache key.
    pub async fn search(&self, params: &SearchParams) -> Result<SearchResponse, SkyfareError> {
        let key = cache_key(params)?;

        if let Some(mut hit) = self.cache.get(&key).await {
            self.sink.record(&EngineEvent::CacheHit { key });
            hit.cached = true;
            return Ok(hit);
        }
        self.sink
            .record(&EngineEvent::CacheMiss { key: key.clone() });

        let providers = self.providers.clone();
        let cache = Arc::clone(&self.cache);
        let limiter = Arc::clone(&self.limiter);
        let retry = Arc::clone(&self.retry);
        let sink = Arc::clone(&self.sink);
        let rate_key = self.cfg.rate_limit_key.clone();
        let params = params.clone();
        let fetch_key = key.clone();

        self.dedup
            .run(&key, move || async move {
                limiter.wait_for_token(&rate_key).await;

                let response =
                    Self::fan_out(&providers, &retry, sink.as_ref(), &params).await;
                cache.set(fetch_key, response.clone(), None).await;
                Ok(response)
            })
            .await
    }

    /// Point-in-time cache accounting snapshot.
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    /// Whole rate-limit tokens currently available to searches.
    #[must_use]
    pub fn remaining_tokens(&self) -> u64 {
        self.limiter.remaining_tokens(&self.cfg.rate_limit_key)
    }

    async fn fan_out(
        providers: &[Arc<dyn FlightProvider>],
        retry: &RetryHandler,
        sink: &dyn EventSink,
        params: &SearchParams,
    ) -> SearchResponse {
        let branches = providers.iter().map(|provider| {
            let provider = Arc::clone(provider);
            async move {
                let kind = provider.kind();
                let result = retry
                    .execute(provider.name(), || {
                        let provider = Arc::clone(&provider);
                        let params = params.clone();
                        async move {
                            let raw = provider.search(&params).await?;
                            Ok(normalize(&raw))
                        }
                    })
                    .await;
                (kind, result)
            }
        });

        let mut flights: Vec<Flight> = Vec::new();
        let mut outcomes = ProviderOutcomes::default();
        for (kind, result) in join_all(branches).await {
            match result {
                Ok(batch) => {
                    let stats = outcomes.for_kind_mut(kind);
                    stats.success = true;
                    stats.count += batch.len();
                    flights.extend(batch);
                }
                Err(error) => {
                    sink.record(&EngineEvent::BranchFailed {
                        provider: kind,
                        error,
                    });
                }
            }
        }

        crate::merge::sort_by_price(&mut flights);
        let flights = crate::merge::dedup_flights(flights);

        SearchResponse {
            flights,
            cached: false,
            providers: outcomes,
            request_id: Uuid::new_v4().to_string(),
        }
    }
}
