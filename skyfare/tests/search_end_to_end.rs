use std::sync::Arc;

use chrono::NaiveDate;

use skyfare::{CabinClass, SearchEngine, SearchParams};
use skyfare_providers::{GdsProvider, MetaSearchProvider, NdcProvider};

fn params() -> SearchParams {
    SearchParams::new(
        "JFK",
        "LAX",
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
        2,
        CabinClass::Economy,
    )
    .unwrap()
}

fn engine() -> SearchEngine {
    SearchEngine::builder()
        .with_provider(Arc::new(GdsProvider::with_tuning(0..=0, 0.0)))
        .with_provider(Arc::new(NdcProvider::with_tuning(0..=0, 0.0)))
        .with_provider(Arc::new(MetaSearchProvider::with_tuning(0..=0, 0.0)))
        .build()
        .unwrap()
}

#[tokio::test]
async fn merges_all_three_providers_sorted_by_price() {
    let engine = engine();
    let response = engine.search(&params()).await.unwrap();

    assert!(!response.cached);
    assert!(response.providers.gds.success);
    assert!(response.providers.ndc.success);
    assert!(response.providers.aggregator.success);
    assert!(!response.flights.is_empty());

    for pair in response.flights.windows(2) {
        assert!(
            pair[0].price.amount <= pair[1].price.amount,
            "flights must be ascending by price"
        );
    }
}

#[tokio::test]
async fn repeated_search_is_served_from_cache() {
    let engine = engine();
    let first = engine.search(&params()).await.unwrap();
    let second = engine.search(&params()).await.unwrap();

    assert!(!first.cached);
    assert!(second.cached);
    assert_eq!(second.request_id, first.request_id, "stored response reused");
    assert_eq!(second.flights, first.flights);

    let stats = engine.cache_stats().await;
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
}

#[tokio::test]
async fn request_id_is_a_uuid() {
    let engine = engine();
    let response = engine.search(&params()).await.unwrap();
    assert!(uuid::Uuid::parse_str(&response.request_id).is_ok());
}

#[tokio::test]
async fn no_duplicate_flight_number_departure_pairs() {
    let engine = engine();
    let response = engine.search(&params()).await.unwrap();

    let mut seen = std::collections::HashSet::new();
    for flight in &response.flights {
        assert!(
            seen.insert((flight.flight_number.clone(), flight.departure)),
            "duplicate flight survived the merge"
        );
    }
}

#[test]
fn builder_requires_at_least_one_provider() {
    let err = SearchEngine::builder().build().unwrap_err();
    assert!(matches!(err, skyfare::SkyfareError::InvalidArg(_)));
}
