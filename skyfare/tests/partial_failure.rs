use std::sync::Arc;
use std::time::Duration;

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use skyfare::{CabinClass, EngineConfig, RawResponse, SearchEngine, SearchParams, SkyfareError};
use skyfare_core::{NdcAirline, NdcAirportRef, NdcFlightRef, NdcOffer, NdcPrice, NdcResponse};
use skyfare_providers::{ScriptedBehavior, ScriptedProvider};
use skyfare_types::{ProviderKind, RetryConfig};

fn params() -> SearchParams {
    SearchParams::new(
        "JFK",
        "LAX",
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
        1,
        CabinClass::Economy,
    )
    .unwrap()
}

fn fast_retry() -> EngineConfig {
    EngineConfig {
        retry: RetryConfig {
            max_attempts: 3,
            initial_delay: Duration::from_millis(5),
            max_delay: Duration::from_millis(20),
            ..RetryConfig::default()
        },
        ..EngineConfig::default()
    }
}

fn ndc_payload() -> RawResponse {
    let dep = Utc.with_ymd_and_hms(2025, 6, 15, 7, 0, 0).unwrap();
    RawResponse::Ndc(NdcResponse {
        offers: vec![NdcOffer {
            offer_id: "NDCTEST1".into(),
            airline: NdcAirline { iata: "DL".into() },
            flight: NdcFlightRef {
                number: "DL2001".into(),
            },
            origin: NdcAirportRef { iata: "JFK".into() },
            destination: NdcAirportRef { iata: "LAX".into() },
            departure_time: dep,
            arrival_time: dep + chrono::TimeDelta::minutes(330),
            total_price: NdcPrice {
                value: Decimal::from(410),
                currency: "USD".into(),
            },
        }],
    })
}

#[tokio::test]
async fn failed_branches_degrade_the_result_instead_of_failing_it() {
    let gds = Arc::new(
        ScriptedProvider::new("GDS", ProviderKind::Gds).with_fallback(ScriptedBehavior::Fail(
            SkyfareError::provider("GDS", "backend rejected the request"),
        )),
    );
    let ndc = Arc::new(
        ScriptedProvider::new("NDC", ProviderKind::Ndc)
            .with_fallback(ScriptedBehavior::Respond(ndc_payload())),
    );

    let engine = SearchEngine::builder()
        .with_provider(gds.clone())
        .with_provider(ndc.clone())
        .config(fast_retry())
        .build()
        .unwrap();

    let response = engine.search(&params()).await.unwrap();

    assert!(!response.providers.gds.success);
    assert_eq!(response.providers.gds.count, 0);
    assert!(response.providers.ndc.success);
    assert_eq!(response.providers.ndc.count, 1);
    assert_eq!(response.flights.len(), 1);
    assert_eq!(response.flights[0].id, "NDCTEST1");

    // A hard (non-transient) error must not consume retry attempts.
    assert_eq!(gds.calls(), 1);
}

#[tokio::test]
async fn transient_branch_failure_is_retried_to_success() {
    let ndc = Arc::new(
        ScriptedProvider::new("NDC", ProviderKind::Ndc)
            .then(ScriptedBehavior::Fail(SkyfareError::provider(
                "NDC",
                "connection timeout",
            )))
            .with_fallback(ScriptedBehavior::Respond(ndc_payload())),
    );

    let engine = SearchEngine::builder()
        .with_provider(ndc.clone())
        .config(fast_retry())
        .build()
        .unwrap();

    let response = engine.search(&params()).await.unwrap();

    assert!(response.providers.ndc.success);
    assert_eq!(response.flights.len(), 1);
    assert_eq!(ndc.calls(), 2, "first call failed, retry succeeded");
}

#[tokio::test]
async fn every_branch_down_yields_an_empty_degraded_response() {
    let gds = Arc::new(
        ScriptedProvider::new("GDS", ProviderKind::Gds).with_fallback(ScriptedBehavior::Fail(
            SkyfareError::provider("GDS", "connection timeout"),
        )),
    );
    let meta = Arc::new(
        ScriptedProvider::new("Aggregator", ProviderKind::Aggregator).with_fallback(
            ScriptedBehavior::Fail(SkyfareError::provider(
                "Aggregator",
                "rate limit exceeded (429)",
            )),
        ),
    );

    let engine = SearchEngine::builder()
        .with_provider(gds.clone())
        .with_provider(meta)
        .config(fast_retry())
        .build()
        .unwrap();

    let response = engine.search(&params()).await.unwrap();

    assert!(response.flights.is_empty());
    assert!(!response.providers.gds.success);
    assert!(!response.providers.aggregator.success);
    // Transient failures burn the whole attempt budget before settling.
    assert_eq!(gds.calls(), 3);
}
