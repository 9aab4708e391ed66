use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the skyfare workspace.
///
/// Covers argument validation, provider-tagged upstream failures, retry
/// exhaustion, and orchestration defects. The type is `Clone` so that a
/// settled failure can be shared among coalesced callers of the same
/// in-flight search.
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum SkyfareError {
    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An upstream provider call failed.
    #[error("{provider} request failed: {message}")]
    Provider {
        /// Provider name that failed.
        provider: String,
        /// Human-readable upstream error message.
        message: String,
    },

    /// A provider kept failing until the retry budget ran out.
    #[error("{provider} retries exhausted after {attempts} attempts: {last}")]
    RetryExhausted {
        /// Provider name that failed.
        provider: String,
        /// Number of invocations performed before giving up.
        attempts: u32,
        /// The failure observed on the final attempt.
        last: Box<SkyfareError>,
    },

    /// A defect inside the orchestration logic itself; not a normal
    /// operating mode.
    #[error("internal error: {0}")]
    Internal(String),
}

impl SkyfareError {
    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Helper: build a `Provider` error with the provider name and message.
    pub fn provider(provider: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.into(),
        }
    }

    /// Helper: build an `Internal` error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
