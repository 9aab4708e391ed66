//! Shared network-simulation helpers for the provider archetypes.

use std::ops::RangeInclusive;
use std::time::Duration;

use rand::Rng;

/// Airlines the simulated channels sell.
pub(crate) const AIRLINES: [&str; 8] = ["AA", "DL", "UA", "BA", "SQ", "EK", "QF", "LH"];

/// Sleep for a uniformly random duration inside `latency_ms`.
pub async fn simulate_latency(latency_ms: &RangeInclusive<u64>) {
    let ms = rand::rng().random_range(latency_ms.clone());
    tokio::time::sleep(Duration::from_millis(ms)).await;
}

/// Roll the failure dice. `rate` is clamped to `[0, 1]`.
#[must_use]
pub fn simulate_failure(rate: f64) -> bool {
    rate > 0.0 && rand::rng().random_bool(rate.clamp(0.0, 1.0))
}

/// Random uppercase alphanumeric record id with the given prefix, in the
/// style upstream systems use for PNRs and offer ids.
#[must_use]
pub fn record_id(prefix: &str, len: usize) -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..len)
        .map(|_| {
            const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
            CHARSET[rng.random_range(0..CHARSET.len())] as char
        })
        .collect();
    format!("{prefix}{suffix}")
}

/// Pick a random airline IATA code from `pool`.
pub(crate) fn pick_airline(pool: &[&'static str]) -> &'static str {
    pool[rand::rng().random_range(0..pool.len())]
}

/// Random marketed flight number for `carrier`, e.g. `BA4821`.
pub(crate) fn flight_number(carrier: &str) -> String {
    format!("{carrier}{}", rand::rng().random_range(1000..10_000))
}
