use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::SkyfareError;

/// Cabin class requested by the traveller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CabinClass {
    /// Standard economy cabin.
    #[default]
    Economy,
    /// Premium economy cabin.
    PremiumEconomy,
    /// Business cabin.
    Business,
    /// First class cabin.
    First,
}

impl std::fmt::Display for CabinClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Economy => "economy",
            Self::PremiumEconomy => "premium_economy",
            Self::Business => "business",
            Self::First => "first",
        };
        f.write_str(s)
    }
}

/// Normalized flight search request.
///
/// Immutable per request and used verbatim as the cache-key source. The
/// struct is closed: providers receive exactly these fields and nothing
/// else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    /// Origin airport IATA code (3 uppercase letters).
    pub origin: String,
    /// Destination airport IATA code (3 uppercase letters).
    pub destination: String,
    /// Outbound calendar date.
    pub departure_date: NaiveDate,
    /// Optional inbound calendar date.
    pub return_date: Option<NaiveDate>,
    /// Traveller count, 1 through 9.
    pub passengers: u8,
    /// Requested cabin class.
    pub cabin_class: CabinClass,
}

impl SearchParams {
    /// Build a validated one-way search request.
    ///
    /// Validation here is a convenience for transport layers; the engine
    /// assumes params handed to it are already well-formed.
    ///
    /// # Errors
    /// Returns `InvalidArg` when an airport code is not three ASCII
    /// uppercase letters or the passenger count is outside 1..=9.
    pub fn new(
        origin: impl Into<String>,
        destination: impl Into<String>,
        departure_date: NaiveDate,
        passengers: u8,
        cabin_class: CabinClass,
    ) -> Result<Self, SkyfareError> {
        let origin = origin.into();
        let destination = destination.into();
        validate_airport_code(&origin)?;
        validate_airport_code(&destination)?;
        if !(1..=9).contains(&passengers) {
            return Err(SkyfareError::invalid_arg(format!(
                "passengers must be between 1 and 9, got {passengers}"
            )));
        }
        Ok(Self {
            origin,
            destination,
            departure_date,
            return_date: None,
            passengers,
            cabin_class,
        })
    }

    /// Attach a return date, turning this into a round-trip request.
    #[must_use]
    pub const fn with_return_date(mut self, date: NaiveDate) -> Self {
        self.return_date = Some(date);
        self
    }
}

fn validate_airport_code(code: &str) -> Result<(), SkyfareError> {
    if code.len() == 3 && code.bytes().all(|b| b.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(SkyfareError::invalid_arg(format!(
            "airport code must be 3 uppercase letters, got {code:?}"
        )))
    }
}
