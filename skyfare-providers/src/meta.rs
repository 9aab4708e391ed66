use std::ops::RangeInclusive;

use async_trait::async_trait;
use chrono::{NaiveTime, TimeDelta};
use rand::Rng;
use rust_decimal::Decimal;

use skyfare_core::{FlightProvider, MetaResponse, MetaResult, RawResponse};
use skyfare_types::{ProviderKind, SearchParams, SkyfareError};

use crate::sim;

const META_AIRLINES: [&str; 5] = ["AA", "DL", "UA", "QF", "AI"];

/// Meta-search aggregator channel (Skyscanner/Kayak style).
///
/// Fastest and most reliable archetype, serving heavily cached inventory.
/// Responds with 5 to 12 flat records; roughly 40% have one stop. Its
/// occasional failure is an upstream rate-limit rejection.
pub struct MetaSearchProvider {
    latency_ms: RangeInclusive<u64>,
    failure_rate: f64,
}

impl MetaSearchProvider {
    /// Provider with the archetype's production-like tuning: 300 to 800 ms
    /// latency, 5% failure rate.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tuning(300..=800, 0.05)
    }

    /// Provider with explicit latency and failure tuning.
    #[must_use]
    pub fn with_tuning(latency_ms: RangeInclusive<u64>, failure_rate: f64) -> Self {
        Self {
            latency_ms,
            failure_rate,
        }
    }

    fn generate(&self, params: &SearchParams) -> MetaResponse {
        let mut rng = rand::rng();
        let day = params.departure_date.and_time(NaiveTime::MIN).and_utc();
        let count = rng.random_range(5..=12);

        let results = (0..count)
            .map(|i| {
                let dep_minute = 5 * 60 + i * 90 + rng.random_range(0..60);
                let duration = rng.random_range(190..470);
                let departure = day + TimeDelta::minutes(dep_minute);
                let carrier = sim::pick_airline(&META_AIRLINES);
                MetaResult {
                    id: sim::record_id("AGG", 10),
                    airline_code: carrier.to_string(),
                    flight_num: sim::flight_number(carrier),
                    from: params.origin.clone(),
                    to: params.destination.clone(),
                    departs: departure,
                    arrives: departure + TimeDelta::minutes(duration),
                    price: Decimal::from(rng.random_range(280..1030u32)),
                    currency: "USD".to_string(),
                    layovers: u32::from(rng.random_bool(0.4)),
                }
            })
            .collect();

        MetaResponse { results }
    }
}

impl Default for MetaSearchProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FlightProvider for MetaSearchProvider {
    fn name(&self) -> &'static str {
        "Aggregator"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Aggregator
    }

    async fn search(&self, params: &SearchParams) -> Result<RawResponse, SkyfareError> {
        tracing::debug!(origin = %params.origin, destination = %params.destination, "meta search");
        sim::simulate_latency(&self.latency_ms).await;
        if sim::simulate_failure(self.failure_rate) {
            return Err(SkyfareError::provider(
                self.name(),
                "rate limit exceeded (429)",
            ));
        }
        Ok(RawResponse::Meta(self.generate(params)))
    }
}
