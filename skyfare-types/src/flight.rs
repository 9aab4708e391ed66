use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::params::CabinClass;

/// Upstream provider archetype a flight record originated from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProviderKind {
    /// Legacy Global Distribution System upstream.
    Gds,
    /// Airline-direct New Distribution Capability upstream.
    Ndc,
    /// Meta-search aggregator upstream.
    Aggregator,
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Gds => "GDS",
            Self::Ndc => "NDC",
            Self::Aggregator => "AGGREGATOR",
        };
        f.write_str(s)
    }
}

/// Static airport reference record.
///
/// Unknown IATA codes degrade to a placeholder carrying the code in every
/// descriptive field and country `"Unknown"`; that is a deliberate fallback,
/// not an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Airport {
    /// IATA code, e.g. `"JFK"`.
    pub code: String,
    /// Full airport name.
    pub name: String,
    /// City served.
    pub city: String,
    /// Country name.
    pub country: String,
    /// IANA timezone identifier.
    pub timezone: String,
}

impl Airport {
    /// Placeholder record for an airport code missing from the directory.
    #[must_use]
    pub fn placeholder(code: &str) -> Self {
        Self {
            code: code.to_string(),
            name: code.to_string(),
            city: code.to_string(),
            country: "Unknown".to_string(),
            timezone: "UTC".to_string(),
        }
    }
}

/// Ticket price in a single currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Total fare amount.
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency: String,
}

/// Unified flight record produced by a normalizer from one provider's raw
/// payload. Created fresh per search and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    /// Provider-scoped record identifier.
    pub id: String,
    /// Provider the record came from.
    pub provider: ProviderKind,
    /// Marketing airline IATA code.
    pub airline: String,
    /// Flight number, e.g. `"DL4021"`.
    pub flight_number: String,
    /// Origin airport descriptor.
    pub origin: Airport,
    /// Destination airport descriptor.
    pub destination: Airport,
    /// Departure instant.
    pub departure: DateTime<Utc>,
    /// Arrival instant.
    pub arrival: DateTime<Utc>,
    /// Flight duration in minutes, always recomputed as arrival minus
    /// departure and never trusted from upstream.
    pub duration_minutes: i64,
    /// Total fare.
    pub price: Price,
    /// Number of intermediate stops.
    pub stops: u32,
    /// Amenities included with the fare.
    pub amenities: Vec<String>,
    /// Cabin class of the fare.
    pub cabin_class: CabinClass,
    /// Remaining bookable seats reported by the provider.
    pub availability: u32,
}
