use serde::{Deserialize, Serialize};

use crate::flight::{Flight, ProviderKind};

/// Outcome of one provider branch within a fan-out: whether it settled
/// successfully and how many flights it contributed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderStats {
    /// Whether the branch settled successfully.
    pub success: bool,
    /// Number of normalized flights contributed.
    pub count: usize,
}

/// Per-provider outcome stats for one aggregated search.
///
/// A degraded search (some providers down) is indistinguishable in shape
/// from a full success; these stats are the only place the difference shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderOutcomes {
    /// GDS branch outcome.
    pub gds: ProviderStats,
    /// NDC branch outcome.
    pub ndc: ProviderStats,
    /// Meta-search aggregator branch outcome.
    pub aggregator: ProviderStats,
}

impl ProviderOutcomes {
    /// Stats slot for the given provider kind.
    #[must_use]
    pub const fn for_kind(&self, kind: ProviderKind) -> &ProviderStats {
        match kind {
            ProviderKind::Gds => &self.gds,
            ProviderKind::Ndc => &self.ndc,
            ProviderKind::Aggregator => &self.aggregator,
        }
    }

    /// Mutable stats slot for the given provider kind.
    pub const fn for_kind_mut(&mut self, kind: ProviderKind) -> &mut ProviderStats {
        match kind {
            ProviderKind::Gds => &mut self.gds,
            ProviderKind::Ndc => &mut self.ndc,
            ProviderKind::Aggregator => &mut self.aggregator,
        }
    }
}

/// Aggregated, deduplicated search result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    /// Merged flights, ascending by price.
    pub flights: Vec<Flight>,
    /// Whether this response was served from the cache. A cache hit reuses
    /// the stored response's `request_id` and flips only this flag.
    pub cached: bool,
    /// Per-provider branch outcomes.
    pub providers: ProviderOutcomes,
    /// Opaque correlation token, fresh per uncached computation.
    pub request_id: String,
}

/// Point-in-time cache accounting snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Entries currently stored (expired-but-unswept entries included).
    pub size: usize,
    /// Accesses served from a live entry.
    pub hits: u64,
    /// Accesses that found no live entry.
    pub misses: u64,
    /// `hits / (hits + misses)`, or 0 when nothing was accessed yet.
    pub hit_rate: f64,
}
