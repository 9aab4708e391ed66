use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use skyfare_types::{ProviderKind, SearchParams, SkyfareError};

/// Contract every upstream flight source implements.
///
/// The engine treats a provider as an opaque remote call subject to latency
/// and failure; it never inspects provider internals beyond the raw response
/// shape consumed by the matching normalizer.
#[async_trait]
pub trait FlightProvider: Send + Sync {
    /// Stable provider name for logging and error tagging.
    fn name(&self) -> &'static str;

    /// Which archetype this provider speaks, selecting its normalizer and
    /// its slot in the per-provider outcome stats.
    fn kind(&self) -> ProviderKind;

    /// Search for flights matching the request.
    async fn search(&self, params: &SearchParams) -> Result<RawResponse, SkyfareError>;
}

/// A provider response in its native schema, before normalization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawResponse {
    /// Legacy GDS payload.
    Gds(GdsResponse),
    /// Airline-direct NDC payload.
    Ndc(NdcResponse),
    /// Meta-search aggregator payload.
    Meta(MetaResponse),
}

impl RawResponse {
    /// An empty payload in the schema the given provider kind speaks.
    #[must_use]
    pub const fn empty_for(kind: ProviderKind) -> Self {
        match kind {
            ProviderKind::Gds => Self::Gds(GdsResponse { flights: Vec::new() }),
            ProviderKind::Ndc => Self::Ndc(NdcResponse { offers: Vec::new() }),
            ProviderKind::Aggregator => Self::Meta(MetaResponse {
                results: Vec::new(),
            }),
        }
    }
}

/// Raw GDS search payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GdsResponse {
    /// Bookable itineraries.
    pub flights: Vec<GdsFlight>,
}

/// One GDS itinerary. PNR-centric, fare split out, stop count included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GdsFlight {
    /// Passenger name record locator, used as the record id.
    pub pnr: String,
    /// Marketing carrier IATA code.
    pub carrier: String,
    /// Flight number.
    pub flight_no: String,
    /// Departure endpoint.
    pub dep: GdsEndpoint,
    /// Arrival endpoint.
    pub arr: GdsEndpoint,
    /// Fare breakdown.
    pub fare: GdsFare,
    /// Intermediate stop count.
    pub stops: u32,
}

/// Airport/time pair in the GDS schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GdsEndpoint {
    /// IATA airport code.
    pub airport: String,
    /// Instant at the endpoint.
    pub time: DateTime<Utc>,
}

/// Fare in the GDS schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GdsFare {
    /// Total fare amount.
    pub total: Decimal,
    /// Currency code.
    pub curr: String,
}

/// Raw NDC search payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NdcResponse {
    /// Priced offers.
    pub offers: Vec<NdcOffer>,
}

/// One NDC offer. Offer-centric with nested airline/flight wrappers; the
/// schema carries no stop information (offers are nonstop).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NdcOffer {
    /// Offer identifier, used as the record id.
    pub offer_id: String,
    /// Airline wrapper.
    pub airline: NdcAirline,
    /// Flight wrapper.
    pub flight: NdcFlightRef,
    /// Origin airport wrapper.
    pub origin: NdcAirportRef,
    /// Destination airport wrapper.
    pub destination: NdcAirportRef,
    /// Departure instant.
    pub departure_time: DateTime<Utc>,
    /// Arrival instant.
    pub arrival_time: DateTime<Utc>,
    /// Priced total.
    pub total_price: NdcPrice,
}

/// Airline wrapper in the NDC schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NdcAirline {
    /// Airline IATA code.
    pub iata: String,
}

/// Flight wrapper in the NDC schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NdcFlightRef {
    /// Flight number.
    pub number: String,
}

/// Airport wrapper in the NDC schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NdcAirportRef {
    /// IATA airport code.
    pub iata: String,
}

/// Price wrapper in the NDC schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NdcPrice {
    /// Total fare amount.
    pub value: Decimal,
    /// Currency code.
    pub currency: String,
}

/// Raw meta-search aggregator payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaResponse {
    /// Flattened search results.
    pub results: Vec<MetaResult>,
}

/// One meta-search result. Flat schema with everything inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaResult {
    /// Record identifier.
    pub id: String,
    /// Airline IATA code.
    pub airline_code: String,
    /// Flight number.
    pub flight_num: String,
    /// Origin IATA airport code.
    pub from: String,
    /// Destination IATA airport code.
    pub to: String,
    /// Departure instant.
    pub departs: DateTime<Utc>,
    /// Arrival instant.
    pub arrives: DateTime<Utc>,
    /// Total fare amount.
    pub price: Decimal,
    /// Currency code.
    pub currency: String,
    /// Intermediate stop count.
    pub layovers: u32,
}
