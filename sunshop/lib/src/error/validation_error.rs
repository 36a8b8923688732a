//! Response decoding errors.

use thiserror::Error;

/// Errors during response decoding.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// A cached record is not valid JSON.
    #[error("Cached {key} is not valid JSON: {source}")]
    CachedRecord {
        /// The storage key holding the record.
        key: &'static str,
        /// The underlying parse failure.
        source: serde_json::Error,
    },
}

impl ValidationError {
    /// Returns `true` if this is a parsing error.
    pub fn is_parse_error(&self) -> bool {
        matches!(self, Self::JsonParse(_) | Self::CachedRecord { .. })
    }
}
