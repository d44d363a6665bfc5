//! The offline vault: one slot, one snapshot, last write wins.

use chrono::Utc;
use vt_core::{SearchPayload, SearchSnapshot};

use crate::connectivity::{ConnectivityMonitor, ConnectivityState};
use crate::error::StorageError;
use crate::status::{EMPTY_VAULT_HINT, OFFLINE_BANNER, VaultStatus};
use crate::store::SlotStore;

/// Slot key used when none is configured.
pub const DEFAULT_VAULT_KEY: &str = "valuetrip_offline_vault";

pub struct OfflineVault<S> {
    store: S,
    key: String,
}

impl<S: SlotStore> OfflineVault<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_VAULT_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Cache `payload` as the latest search, stamped with the current time.
    ///
    /// Never fails: if the medium rejects the write it is logged and the
    /// snapshot is returned anyway, leaving the vault as it was.
    pub fn persist(&self, payload: SearchPayload) -> SearchSnapshot {
        self.persist_at(payload, Utc::now().timestamp_millis())
    }

    /// [`persist`](Self::persist) with an explicit capture time.
    pub fn persist_at(&self, payload: SearchPayload, captured_at_epoch_millis: i64) -> SearchSnapshot {
        let snapshot = SearchSnapshot::new(payload, captured_at_epoch_millis);
        if let Err(error) = self.write(&snapshot) {
            tracing::warn!(%error, key = %self.key, "search snapshot not cached");
        }
        snapshot
    }

    /// Like [`persist`](Self::persist), but reports storage failures.
    ///
    /// # Errors
    ///
    /// Returns the [`StorageError`] the medium raised; the slot is unchanged.
    pub fn try_persist(&self, payload: SearchPayload) -> Result<SearchSnapshot, StorageError> {
        let snapshot = SearchSnapshot::new(payload, Utc::now().timestamp_millis());
        self.write(&snapshot)?;
        Ok(snapshot)
    }

    fn write(&self, snapshot: &SearchSnapshot) -> Result<(), StorageError> {
        let encoded = serde_json::to_string(snapshot)?;
        self.store.write(&self.key, &encoded)?;
        tracing::debug!(
            key = %self.key,
            bytes = encoded.len(),
            results = snapshot.data.results().len(),
            "search snapshot cached"
        );
        Ok(())
    }

    /// The cached snapshot, if there is a readable one.
    ///
    /// An unreadable slot or a corrupt entry reads as empty.
    #[must_use]
    pub fn load(&self) -> Option<SearchSnapshot> {
        let raw = match self.store.read(&self.key) {
            Ok(raw) => raw?,
            Err(error) => {
                tracing::warn!(%error, key = %self.key, "vault unreadable; treating as empty");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(snapshot) => Some(snapshot),
            Err(error) => {
                tracing::warn!(%error, key = %self.key, "vault entry is corrupt; treating as empty");
                None
            }
        }
    }

    /// Hand the cached payload to `on_restore`. No-op when the vault is empty.
    ///
    /// Returns whether a payload was handed over.
    pub fn restore(&self, on_restore: impl FnOnce(SearchPayload)) -> bool {
        match self.load() {
            Some(snapshot) => {
                on_restore(snapshot.data);
                true
            }
            None => false,
        }
    }

    /// Empty the slot. Returns whether it is now empty.
    pub fn clear(&self) -> bool {
        match self.store.remove(&self.key) {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(%error, key = %self.key, "vault not cleared");
                false
            }
        }
    }

    /// Panel state for the current connectivity.
    #[must_use]
    pub fn status(&self, connectivity: &ConnectivityMonitor) -> VaultStatus {
        let state = connectivity.state();
        let banner = (state == ConnectivityState::Offline).then_some(OFFLINE_BANNER);
        match self.load() {
            Some(snapshot) => VaultStatus {
                connectivity: state,
                banner,
                last_saved: snapshot.captured_at(),
                search_type: Some(snapshot.data.search_type),
                currency: Some(snapshot.data.currency.clone()),
                result_count: snapshot.data.results().len(),
                hint: None,
            },
            None => VaultStatus {
                connectivity: state,
                banner,
                last_saved: None,
                search_type: None,
                currency: None,
                result_count: 0,
                hint: Some(EMPTY_VAULT_HINT),
            },
        }
    }
}
