//! Storage error types.

/// Failures of the durable medium behind the vault.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot could not be encoded or decoded.
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// The encoded snapshot is larger than the configured quota.
    #[error("Quota exceeded: snapshot is {size} bytes, limit is {limit}")]
    QuotaExceeded {
        /// Encoded snapshot size in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: u64,
    },

    /// The medium cannot be used at all.
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}
