//! What the vault panel shows.

use chrono::{DateTime, Utc};
use serde::Serialize;
use vt_core::enums::SearchType;

use crate::connectivity::ConnectivityState;

/// Banner shown while offline.
pub const OFFLINE_BANNER: &str = "You are offline. Showing cached data.";

/// Shown when the vault holds nothing.
pub const EMPTY_VAULT_HINT: &str = "Run a search to cache results here for offline use.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VaultStatus {
    pub connectivity: ConnectivityState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<&'static str>,
    /// Capture time of the cached search.
    pub last_saved: Option<DateTime<Utc>>,
    pub search_type: Option<SearchType>,
    pub currency: Option<String>,
    pub result_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<&'static str>,
}

impl VaultStatus {
    /// Whether a cached search is available to restore.
    #[must_use]
    pub const fn has_snapshot(&self) -> bool {
        self.search_type.is_some()
    }
}
