use chrono::NaiveDate;

use skyfare_core::{FlightProvider, RawResponse};
use skyfare_providers::{
    GdsProvider, MetaSearchProvider, NdcProvider, ScriptedBehavior, ScriptedProvider,
};
use skyfare_types::{CabinClass, ProviderKind, SearchParams, SkyfareError};

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

#[tokio::test]
async fn gds_emits_its_native_schema() {
    let provider = GdsProvider::with_tuning(0..=0, 0.0);
    let raw = provider.search(&params()).await.unwrap();
    let RawResponse::Gds(payload) = raw else {
        panic!("expected a GDS payload");
    };
    assert!((3..=7).contains(&payload.flights.len()));
    for flight in &payload.flights {
        assert!(flight.pnr.starts_with("GDS"));
        assert_eq!(flight.dep.airport, "JFK");
        assert_eq!(flight.arr.airport, "LAX");
        assert!(flight.arr.time > flight.dep.time);
        assert!(flight.stops <= 1);
    }
}

#[tokio::test]
async fn ndc_emits_its_native_schema() {
    let provider = NdcProvider::with_tuning(0..=0, 0.0);
    let raw = provider.search(&params()).await.unwrap();
    let RawResponse::Ndc(payload) = raw else {
        panic!("expected an NDC payload");
    };
    assert!((2..=5).contains(&payload.offers.len()));
    for offer in &payload.offers {
        assert!(offer.offer_id.starts_with("NDC"));
        assert_eq!(offer.origin.iata, "JFK");
        assert!(offer.arrival_time > offer.departure_time);
        assert_eq!(offer.total_price.currency, "USD");
    }
}

#[tokio::test]
async fn meta_emits_its_native_schema() {
    let provider = MetaSearchProvider::with_tuning(0..=0, 0.0);
    let raw = provider.search(&params()).await.unwrap();
    let RawResponse::Meta(payload) = raw else {
        panic!("expected a meta-search payload");
    };
    assert!((5..=12).contains(&payload.results.len()));
    for result in &payload.results {
        assert!(result.id.starts_with("AGG"));
        assert_eq!(result.from, "JFK");
        assert_eq!(result.to, "LAX");
        assert!(result.layovers <= 1);
    }
}

#[tokio::test]
async fn certain_failure_rate_always_errors() {
    let provider = GdsProvider::with_tuning(0..=0, 1.0);
    let err = provider.search(&params()).await.unwrap_err();
    assert!(err.to_string().contains("connection timeout"));
}

#[tokio::test]
async fn scripted_provider_replays_then_falls_back() {
    let provider = ScriptedProvider::new("scripted", ProviderKind::Ndc)
        .then(ScriptedBehavior::Fail(SkyfareError::provider(
            "scripted",
            "connection timeout",
        )));

    assert!(provider.search(&params()).await.is_err());
    // Script exhausted; the fallback is an empty payload in the provider's schema.
    let raw = provider.search(&params()).await.unwrap();
    assert_eq!(raw, RawResponse::empty_for(ProviderKind::Ndc));
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn scripted_hang_never_resolves() {
    let provider = ScriptedProvider::new("scripted", ProviderKind::Gds)
        .then(ScriptedBehavior::Hang);

    let params = params();
    let fut = provider.search(&params);
    let out = tokio::time::timeout(std::time::Duration::from_millis(50), fut).await;
    assert!(out.is_err(), "hang behavior must not resolve");
}
