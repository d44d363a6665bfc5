//! # vt-vault
//!
//! Durable single-slot cache of the latest successful search, plus the
//! online/offline state the vault banner reads.
//!
//! ## Failure model
//!
//! Nothing here ever fails the caller. A write the medium rejects is logged
//! and the vault behaves as if it was never written; an unreadable or corrupt
//! slot reads as empty. [`StorageError`] only surfaces from the [`SlotStore`]
//! seam and from [`OfflineVault::try_persist`].

pub mod connectivity;
pub mod error;
pub mod status;
pub mod store;
pub mod vault;

pub use connectivity::{
    ConnectivityMonitor, ConnectivityProbe, ConnectivitySignal, ConnectivityState, FixedProbe,
    TcpProbe,
};
pub use error::StorageError;
pub use status::VaultStatus;
pub use store::{FileSlotStore, MemorySlotStore, SlotStore};
pub use vault::{DEFAULT_VAULT_KEY, OfflineVault};
