//! skyfare-providers
//!
//! Simulated upstream sources for the skyfare engine. Three archetypes are
//! modeled after real distribution channels, each with its own native
//! response schema, latency band, and failure rate:
//!
//! - [`GdsProvider`]: legacy global distribution system. Slow, PNR-centric
//!   payloads, occasional connection timeouts.
//! - [`NdcProvider`]: airline-direct NDC channel. Faster but the least
//!   stable, offer-centric payloads.
//! - [`MetaSearchProvider`]: meta-search aggregator. Fastest and most
//!   reliable, flat payloads.
//!
//! [`ScriptedProvider`] is a deterministic stand-in for tests: it replays a
//! queued script of responses, failures, and hangs instead of simulating a
//! network.
#![warn(missing_docs)]

mod gds;
mod meta;
mod ndc;
mod scripted;
mod sim;

pub use gds::GdsProvider;
pub use meta::MetaSearchProvider;
pub use ndc::NdcProvider;
pub use scripted::{ScriptedBehavior, ScriptedProvider};
pub use sim::{record_id, simulate_failure, simulate_latency};
