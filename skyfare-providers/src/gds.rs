use std::ops::RangeInclusive;

use async_trait::async_trait;
use chrono::{NaiveTime, TimeDelta};
use rand::Rng;
use rust_decimal::Decimal;

use skyfare_core::{FlightProvider, GdsEndpoint, GdsFare, GdsFlight, GdsResponse, RawResponse};
use skyfare_types::{ProviderKind, SearchParams, SkyfareError};

use crate::sim;

/// Legacy global distribution system channel (Amadeus/Sabre style).
///
/// Slowest of the archetypes and moderately reliable. Responds with 3 to 7
/// PNR-centric itineraries; roughly a third have one stop.
pub struct GdsProvider {
    latency_ms: RangeInclusive<u64>,
    failure_rate: f64,
}

impl GdsProvider {
    /// Provider with the archetype's production-like tuning: 800 to 2000 ms
    /// latency, 10% failure rate.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tuning(800..=2000, 0.1)
    }

    /// Provider with explicit latency and failure tuning. Tests use
    /// `0..=0` latency and a zero or certain failure rate.
    #[must_use]
    pub fn with_tuning(latency_ms: RangeInclusive<u64>, failure_rate: f64) -> Self {
        Self {
            latency_ms,
            failure_rate,
        }
    }

    fn generate(&self, params: &SearchParams) -> GdsResponse {
        let mut rng = rand::rng();
        let day = params.departure_date.and_time(NaiveTime::MIN).and_utc();
        let count = rng.random_range(3..=7);

        let flights = (0..count)
            .map(|i| {
                let dep_minute = (6 + i * 2) * 60 + rng.random_range(0..60);
                let duration = rng.random_range(180..480);
                let departure = day + TimeDelta::minutes(dep_minute);
                let carrier = sim::pick_airline(&sim::AIRLINES);
                GdsFlight {
                    pnr: sim::record_id("GDS", 9),
                    carrier: carrier.to_string(),
                    flight_no: sim::flight_number(carrier),
                    dep: GdsEndpoint {
                        airport: params.origin.clone(),
                        time: departure,
                    },
                    arr: GdsEndpoint {
                        airport: params.destination.clone(),
                        time: departure + TimeDelta::minutes(duration),
                    },
                    fare: GdsFare {
                        total: Decimal::from(rng.random_range(300..1000u32)),
                        curr: "USD".to_string(),
                    },
                    stops: u32::from(rng.random_bool(0.3)),
                }
            })
            .collect();

        GdsResponse { flights }
    }
}

impl Default for GdsProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FlightProvider for GdsProvider {
    fn name(&self) -> &'static str {
        "GDS"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Gds
    }

    async fn search(&self, params: &SearchParams) -> Result<RawResponse, SkyfareError> {
        tracing::debug!(origin = %params.origin, destination = %params.destination, "GDS search");
        sim::simulate_latency(&self.latency_ms).await;
        if sim::simulate_failure(self.failure_rate) {
            return Err(SkyfareError::provider(self.name(), "connection timeout"));
        }
        Ok(RawResponse::Gds(self.generate(params)))
    }
}
