use std::collections::HashSet;

use skyfare_types::Flight;

/// Sort flights ascending by fare amount. Stable, so equal-priced flights
/// keep their arrival order.
pub(crate) fn sort_by_price(flights: &mut [Flight]) {
    flights.sort_by(|a, b| a.price.amount.cmp(&b.price.amount));
}

/// Drop flights already seen under the same flight number and departure
/// instant, keeping the first occurrence. Run after the price sort so the
/// cheapest listing of a flight sold through several channels survives.
pub(crate) fn dedup_flights(flights: Vec<Flight>) -> Vec<Flight> {
    let mut seen = HashSet::new();
    flights
        .into_iter()
        .filter(|f| seen.insert((f.flight_number.clone(), f.departure)))
        .collect()
}
