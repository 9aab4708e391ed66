use std::ops::RangeInclusive;

use async_trait::async_trait;
use chrono::{NaiveTime, TimeDelta};
use rand::Rng;
use rust_decimal::Decimal;

use skyfare_core::{
    FlightProvider, NdcAirline, NdcAirportRef, NdcFlightRef, NdcOffer, NdcPrice, NdcResponse,
    RawResponse,
};
use skyfare_types::{ProviderKind, SearchParams, SkyfareError};

use crate::sim;

/// Airline-direct NDC channel.
///
/// Faster than the GDS but the least stable archetype. Responds with 2 to 5
/// offer-centric records; the schema carries no stop information, so every
/// offer is nonstop.
pub struct NdcProvider {
    latency_ms: RangeInclusive<u64>,
    failure_rate: f64,
}

impl NdcProvider {
    /// Provider with the archetype's production-like tuning: 400 to 1200 ms
    /// latency, 15% failure rate.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tuning(400..=1200, 0.15)
    }

    /// Provider with explicit latency and failure tuning.
    #[must_use]
    pub fn with_tuning(latency_ms: RangeInclusive<u64>, failure_rate: f64) -> Self {
        Self {
            latency_ms,
            failure_rate,
        }
    }

    fn generate(&self, params: &SearchParams) -> NdcResponse {
        let mut rng = rand::rng();
        let day = params.departure_date.and_time(NaiveTime::MIN).and_utc();
        let count = rng.random_range(2..=5);

        let offers = (0..count)
            .map(|i| {
                let dep_minute = (7 + i * 3) * 60 + rng.random_range(0..60);
                let duration = rng.random_range(200..450);
                let departure = day + TimeDelta::minutes(dep_minute);
                let carrier = sim::pick_airline(&sim::AIRLINES);
                NdcOffer {
                    offer_id: sim::record_id("NDC", 11),
                    airline: NdcAirline {
                        iata: carrier.to_string(),
                    },
                    flight: NdcFlightRef {
                        number: sim::flight_number(carrier),
                    },
                    origin: NdcAirportRef {
                        iata: params.origin.clone(),
                    },
                    destination: NdcAirportRef {
                        iata: params.destination.clone(),
                    },
                    departure_time: departure,
                    arrival_time: departure + TimeDelta::minutes(duration),
                    total_price: NdcPrice {
                        value: Decimal::from(rng.random_range(250..1050u32)),
                        currency: "USD".to_string(),
                    },
                }
            })
            .collect();

        NdcResponse { offers }
    }
}

impl Default for NdcProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FlightProvider for NdcProvider {
    fn name(&self) -> &'static str {
        "NDC"
    }

    fn kind(&self) -> ProviderKind {
        ProviderKind::Ndc
    }

    async fn search(&self, params: &SearchParams) -> Result<RawResponse, SkyfareError> {
        tracing::debug!(origin = %params.origin, destination = %params.destination, "NDC search");
        sim::simulate_latency(&self.latency_ms).await;
        if sim::simulate_failure(self.failure_rate) {
            return Err(SkyfareError::provider(
                self.name(),
                "airline system unavailable",
            ));
        }
        Ok(RawResponse::Ndc(self.generate(params)))
    }
}
