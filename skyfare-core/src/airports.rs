//! Static IATA airport directory.
//!
//! Lookups never fail: a code missing from the directory degrades to a
//! placeholder record so a provider inventing an airport cannot poison a
//! whole response.

use skyfare_types::Airport;

/// Look up an airport by IATA code, falling back to a placeholder for
/// unknown codes.
#[must_use]
pub fn lookup(code: &str) -> Airport {
    find(code).unwrap_or_else(|| Airport::placeholder(code))
}

/// Look up an airport by IATA code, `None` when the directory has no entry.
#[must_use]
pub fn find(code: &str) -> Option<Airport> {
    let (name, city, country, timezone) = match code {
        "JFK" => (
            "John F. Kennedy International Airport",
            "New York",
            "USA",
            "America/New_York",
        ),
        "LAX" => (
            "Los Angeles International Airport",
            "Los Angeles",
            "USA",
            "America/Los_Angeles",
        ),
        "SFO" => (
            "San Francisco International Airport",
            "San Francisco",
            "USA",
            "America/Los_Angeles",
        ),
        "ORD" => (
            "O'Hare International Airport",
            "Chicago",
            "USA",
            "America/Chicago",
        ),
        "MIA" => (
            "Miami International Airport",
            "Miami",
            "USA",
            "America/New_York",
        ),
        "SEA" => (
            "Seattle-Tacoma International Airport",
            "Seattle",
            "USA",
            "America/Los_Angeles",
        ),
        "BOS" => (
            "Boston Logan International Airport",
            "Boston",
            "USA",
            "America/New_York",
        ),
        "ATL" => (
            "Hartsfield-Jackson Atlanta International Airport",
            "Atlanta",
            "USA",
            "America/New_York",
        ),
        "DEN" => (
            "Denver International Airport",
            "Denver",
            "USA",
            "America/Denver",
        ),
        "LHR" => ("London Heathrow Airport", "London", "UK", "Europe/London"),
        "SIN" => (
            "Singapore Changi Airport",
            "Singapore",
            "Singapore",
            "Asia/Singapore",
        ),
        "DXB" => ("Dubai International Airport", "Dubai", "UAE", "Asia/Dubai"),
        _ => return None,
    };
    Some(Airport {
        code: code.to_string(),
        name: name.to_string(),
        city: city.to_string(),
        country: country.to_string(),
        timezone: timezone.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_code_resolves() {
        let jfk = lookup("JFK");
        assert_eq!(jfk.city, "New York");
        assert_eq!(jfk.timezone, "America/New_York");
    }

    #[test]
    fn unknown_code_degrades_to_placeholder() {
        let xxx = lookup("XXX");
        assert_eq!(xxx.code, "XXX");
        assert_eq!(xxx.name, "XXX");
        assert_eq!(xxx.country, "Unknown");
        assert_eq!(xxx.timezone, "UTC");
    }
}
