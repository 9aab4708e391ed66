use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;

use skyfare::{
    CabinClass, EngineConfig, FlightProvider, RawResponse, SearchEngine, SearchParams,
    SkyfareError,
};
use skyfare_types::{CacheConfig, ProviderKind, RateLimitConfig};

struct CountingProvider {
    count: Arc<AtomicUsize>,
}

#[async_trait]
impl FlightProvider for CountingProvider {
    fn name(&self) -> &'static str {
        "counting"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Ndc
    }

    async fn search(&self, _params: &SearchParams) -> Result<RawResponse, SkyfareError> {
        self.count.fetch_add(1, Ordering::SeqCst);
        Ok(RawResponse::empty_for(ProviderKind::Ndc))
    }
}

fn params(destination: &str) -> SearchParams {
    SearchParams::new(
        "JFK",
        destination,
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
        1,
        CabinClass::Economy,
    )
    .unwrap()
}

fn engine_with(cfg: EngineConfig, count: Arc<AtomicUsize>) -> SearchEngine {
    SearchEngine::builder()
        .with_provider(Arc::new(CountingProvider { count }))
        .config(cfg)
        .build()
        .unwrap()
}

#[tokio::test]
async fn expired_entry_triggers_a_fresh_computation() {
    let count = Arc::new(AtomicUsize::new(0));
    let engine = engine_with(
        EngineConfig {
            cache: CacheConfig {
                default_ttl: Duration::from_millis(50),
                ..CacheConfig::default()
            },
            ..EngineConfig::default()
        },
        count.clone(),
    );

    let first = engine.search(&params("LAX")).await.unwrap();
    tokio::time::sleep(Duration::from_millis(60)).await;
    let second = engine.search(&params("LAX")).await.unwrap();

    assert!(!second.cached, "entry expired, recomputed");
    assert_ne!(second.request_id, first.request_id);
    assert_eq!(count.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn each_uncached_search_spends_one_rate_limit_token() {
    let count = Arc::new(AtomicUsize::new(0));
    let engine = engine_with(EngineConfig::default(), count);

    assert_eq!(engine.remaining_tokens(), 10);
    engine.search(&params("LAX")).await.unwrap();
    engine.search(&params("SFO")).await.unwrap();
    assert_eq!(engine.remaining_tokens(), 8);

    // Cache hits never touch the limiter.
    engine.search(&params("LAX")).await.unwrap();
    assert_eq!(engine.remaining_tokens(), 8);
}

#[tokio::test]
async fn drained_bucket_delays_the_next_search() {
    let count = Arc::new(AtomicUsize::new(0));
    let engine = engine_with(
        EngineConfig {
            rate_limit: RateLimitConfig {
                capacity: 1.0,
                refill_rate: 1.0,
                refill_interval: Duration::from_millis(50),
                poll_interval: Duration::from_millis(5),
            },
            ..EngineConfig::default()
        },
        count,
    );

    engine.search(&params("LAX")).await.unwrap();

    let start = std::time::Instant::now();
    engine.search(&params("SFO")).await.unwrap();
    assert!(
        start.elapsed() >= Duration::from_millis(40),
        "second search waited for a refill"
    );
}
