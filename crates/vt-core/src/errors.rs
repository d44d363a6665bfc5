//! Cross-cutting error types for ValueTrip.
//!
//! Storage and configuration failures are defined in their own crates
//! (`StorageError`, `ConfigError`). Everything converges on `anyhow` in `vt-cli`.

use thiserror::Error;

/// Errors raised at the Option model boundary.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// A numeric field was malformed (negative price, out-of-range score, ...).
    #[error("Invalid input for '{field}': {reason}")]
    InvalidInput { field: String, reason: String },

    /// Data failed a structural check.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}
