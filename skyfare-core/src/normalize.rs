//! Pure mapping from each provider's native schema to the unified
//! [`Flight`] record.
//!
//! Every mapper performs the same three fixups: airport code lookup with
//! placeholder fallback, duration recomputed from the timestamps (never
//! trusted from upstream), and schema defaults for fields the format does
//! not natively carry. No I/O, no error paths: a malformed payload is a
//! defect in the provider client, not the normalizer's concern.

use skyfare_types::{CabinClass, Flight, Price, ProviderKind};

use crate::airports;
use crate::provider::{GdsResponse, MetaResponse, NdcResponse, RawResponse};

// Seat counts for schemas that do not report availability. GDS displays cap
// at 9 seats; the others are progressively vaguer about inventory.
const GDS_AVAILABILITY: u32 = 9;
const NDC_AVAILABILITY: u32 = 6;
const META_AVAILABILITY: u32 = 4;

/// Normalize a raw provider payload into unified flight records,
/// dispatching on the schema it was produced in.
#[must_use]
pub fn normalize(raw: &RawResponse) -> Vec<Flight> {
    match raw {
        RawResponse::Gds(r) => normalize_gds(r),
        RawResponse::Ndc(r) => normalize_ndc(r),
        RawResponse::Meta(r) => normalize_meta(r),
    }
}

/// Map a GDS payload. Carries its own stop counts; fares include wifi and a
/// meal.
#[must_use]
pub fn normalize_gds(response: &GdsResponse) -> Vec<Flight> {
    response
        .flights
        .iter()
        .map(|f| Flight {
            id: f.pnr.clone(),
            provider: ProviderKind::Gds,
            airline: f.carrier.clone(),
            flight_number: f.flight_no.clone(),
            origin: airports::lookup(&f.dep.airport),
            destination: airports::lookup(&f.arr.airport),
            departure: f.dep.time,
            arrival: f.arr.time,
            duration_minutes: (f.arr.time - f.dep.time).num_minutes(),
            price: Price {
                amount: f.fare.total,
                currency: f.fare.curr.clone(),
            },
            stops: f.stops,
            amenities: vec!["wifi".to_string(), "meal".to_string()],
            cabin_class: CabinClass::Economy,
            availability: GDS_AVAILABILITY,
        })
        .collect()
}

/// Map an NDC payload. Offers are nonstop by schema; fares include seat
/// selection and priority boarding.
#[must_use]
pub fn normalize_ndc(response: &NdcResponse) -> Vec<Flight> {
    response
        .offers
        .iter()
        .map(|o| Flight {
            id: o.offer_id.clone(),
            provider: ProviderKind::Ndc,
            airline: o.airline.iata.clone(),
            flight_number: o.flight.number.clone(),
            origin: airports::lookup(&o.origin.iata),
            destination: airports::lookup(&o.destination.iata),
            departure: o.departure_time,
            arrival: o.arrival_time,
            duration_minutes: (o.arrival_time - o.departure_time).num_minutes(),
            price: Price {
                amount: o.total_price.value,
                currency: o.total_price.currency.clone(),
            },
            stops: 0,
            amenities: vec![
                "seat_selection".to_string(),
                "priority_boarding".to_string(),
            ],
            cabin_class: CabinClass::Economy,
            availability: NDC_AVAILABILITY,
        })
        .collect()
}

/// Map a meta-search payload. Flat schema; no amenity information.
#[must_use]
pub fn normalize_meta(response: &MetaResponse) -> Vec<Flight> {
    response
        .results
        .iter()
        .map(|r| Flight {
            id: r.id.clone(),
            provider: ProviderKind::Aggregator,
            airline: r.airline_code.clone(),
            flight_number: r.flight_num.clone(),
            origin: airports::lookup(&r.from),
            destination: airports::lookup(&r.to),
            departure: r.departs,
            arrival: r.arrives,
            duration_minutes: (r.arrives - r.departs).num_minutes(),
            price: Price {
                amount: r.price,
                currency: r.currency.clone(),
            },
            stops: r.layovers,
            amenities: Vec::new(),
            cabin_class: CabinClass::Economy,
            availability: META_AVAILABILITY,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    use super::*;
    use crate::provider::{
        GdsEndpoint, GdsFare, GdsFlight, NdcAirline, NdcAirportRef, NdcFlightRef, NdcOffer,
        NdcPrice,
    };

    #[test]
    fn gds_duration_is_recomputed_from_timestamps() {
        let dep = Utc.with_ymd_and_hms(2025, 6, 1, 6, 0, 0).unwrap();
        let arr = Utc.with_ymd_and_hms(2025, 6, 1, 11, 30, 0).unwrap();
        let resp = GdsResponse {
            flights: vec![GdsFlight {
                pnr: "GDSABC123".into(),
                carrier: "AA".into(),
                flight_no: "AA1234".into(),
                dep: GdsEndpoint {
                    airport: "JFK".into(),
                    time: dep,
                },
                arr: GdsEndpoint {
                    airport: "LAX".into(),
                    time: arr,
                },
                fare: GdsFare {
                    total: Decimal::from(420),
                    curr: "USD".into(),
                },
                stops: 1,
            }],
        };

        let flights = normalize_gds(&resp);
        assert_eq!(flights.len(), 1);
        let f = &flights[0];
        assert_eq!(f.duration_minutes, 330);
        assert_eq!(f.provider, ProviderKind::Gds);
        assert_eq!(f.stops, 1);
        assert_eq!(f.amenities, vec!["wifi", "meal"]);
        assert_eq!(f.origin.city, "New York");
    }

    #[test]
    fn ndc_offers_are_always_nonstop() {
        let dep = Utc.with_ymd_and_hms(2025, 6, 1, 7, 0, 0).unwrap();
        let arr = Utc.with_ymd_and_hms(2025, 6, 1, 10, 20, 0).unwrap();
        let resp = NdcResponse {
            offers: vec![NdcOffer {
                offer_id: "NDCXYZ".into(),
                airline: NdcAirline { iata: "DL".into() },
                flight: NdcFlightRef {
                    number: "DL2001".into(),
                },
                origin: NdcAirportRef { iata: "BOS".into() },
                destination: NdcAirportRef { iata: "ORD".into() },
                departure_time: dep,
                arrival_time: arr,
                total_price: NdcPrice {
                    value: Decimal::from(310),
                    currency: "USD".into(),
                },
            }],
        };

        let flights = normalize_ndc(&resp);
        assert_eq!(flights[0].stops, 0);
        assert_eq!(flights[0].duration_minutes, 200);
        assert_eq!(
            flights[0].amenities,
            vec!["seat_selection", "priority_boarding"]
        );
    }

    #[test]
    fn unknown_airport_code_maps_to_placeholder_not_error() {
        let dep = Utc.with_ymd_and_hms(2025, 6, 1, 5, 0, 0).unwrap();
        let arr = Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap();
        let resp = MetaResponse {
            results: vec![crate::provider::MetaResult {
                id: "AGG1".into(),
                airline_code: "QF".into(),
                flight_num: "QF7001".into(),
                from: "ZZZ".into(),
                to: "LAX".into(),
                departs: dep,
                arrives: arr,
                price: Decimal::from(500),
                currency: "USD".into(),
                layovers: 1,
            }],
        };

        let flights = normalize_meta(&resp);
        assert_eq!(flights[0].origin.country, "Unknown");
        assert_eq!(flights[0].origin.code, "ZZZ");
        assert_eq!(flights[0].destination.city, "Los Angeles");
    }
}
