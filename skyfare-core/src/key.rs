//! Cache-key derivation from search parameters.

use skyfare_types::{SearchParams, SkyfareError};

/// Derive the canonical cache key for a search request.
///
/// The params are rendered through a `serde_json::Value`, whose object map
/// is a `BTreeMap`: keys always serialize in lexicographic order, so two
/// requests with equal content can never produce distinct keys regardless
/// of field order at the transport layer.
///
/// # Errors
/// Returns `Internal` if serialization fails, which would indicate a defect
/// in the params type itself.
pub fn cache_key(params: &SearchParams) -> Result<String, SkyfareError> {
    let value = serde_json::to_value(params)
        .map_err(|e| SkyfareError::internal(format!("cache key serialization: {e}")))?;
    serde_json::to_string(&value)
        .map_err(|e| SkyfareError::internal(format!("cache key serialization: {e}")))
}
