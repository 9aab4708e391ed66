//! skyfare-core
//!
//! Contracts and pure logic shared across the skyfare ecosystem.
//!
//! - `provider`: the [`FlightProvider`] trait and the raw upstream response
//!   schemas the three provider archetypes speak.
//! - `normalize`: pure mapping from each raw schema to the unified
//!   [`Flight`](skyfare_types::Flight) record.
//! - `airports`: static IATA reference directory with placeholder fallback.
//! - `key`: order-independent cache-key derivation from search params.
//! - `observe`: the structured [`EventSink`] collaborator the engine reports
//!   well-defined events to.
//!
//! This crate assumes the Tokio ecosystem as the async runtime; provider
//! implementations simulate upstream latency with Tokio timers.
#![warn(missing_docs)]

/// Static airport reference data.
pub mod airports;
/// Cache-key derivation.
pub mod key;
/// Raw-schema to unified-record normalization.
pub mod normalize;
/// Structured engine event sink.
pub mod observe;
/// Provider trait and raw upstream schemas.
pub mod provider;

pub use observe::{EngineEvent, EventSink, NullSink, TracingSink};
pub use provider::{
    FlightProvider, GdsEndpoint, GdsFare, GdsFlight, GdsResponse, MetaResponse, MetaResult,
    NdcAirline, NdcAirportRef, NdcFlightRef, NdcOffer, NdcPrice, NdcResponse, RawResponse,
};
pub use skyfare_types::SkyfareError;
