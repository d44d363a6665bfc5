//! Vault behavior against a real directory.

use std::fs;

use pretty_assertions::assert_eq;
use vt_core::enums::SearchType;
use vt_core::{SearchPayload, TravelOption};
use vt_vault::{
    DEFAULT_VAULT_KEY, FileSlotStore, MemorySlotStore, OfflineVault, SlotStore, StorageError,
};

fn flight(id: &str, price: f64) -> TravelOption {
    TravelOption {
        id: Some(id.into()),
        carrier: Some("U2".into()),
        cheapest_price: Some(price),
        ..Default::default()
    }
}

fn flights(ids: &[(&str, f64)]) -> SearchPayload {
    SearchPayload::new(SearchType::Flight, "GBP")
        .with_results(ids.iter().map(|(id, price)| flight(id, *price)).collect())
}

#[test]
fn snapshot_survives_a_new_vault_instance() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let written = OfflineVault::new(FileSlotStore::new(tmp.path()))
        .persist_at(flights(&[("a", 50.0), ("b", 80.0)]), 1_700_000_000_000);

    let reopened = OfflineVault::new(FileSlotStore::new(tmp.path()));
    assert_eq!(reopened.load(), Some(written));
    assert!(tmp.path().join(format!("{DEFAULT_VAULT_KEY}.json")).exists());
}

#[test]
fn second_persist_replaces_without_merging() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let vault = OfflineVault::new(FileSlotStore::new(tmp.path()));
    vault.persist_at(flights(&[("a", 50.0), ("b", 80.0)]), 1);
    let second = vault.persist_at(flights(&[("c", 120.0)]), 2);

    let loaded = vault.load().expect("snapshot");
    assert_eq!(loaded, second);
    assert_eq!(loaded.data.results().len(), 1);
}

#[test]
fn corrupt_entry_reads_as_empty() {
    let tmp = tempfile::TempDir::new().expect("tmp dir");
    let store = FileSlotStore::new(tmp.path());
    fs::write(store.slot_path(DEFAULT_VAULT_KEY), "{not json").expect("write");

    let vault = OfflineVault::new(&store);
    assert_eq!(vault.load(), None);
    assert!(!vault.restore(|_| panic!("corrupt entry must not restore")));

    // A fresh persist repairs the slot.
    let snapshot = vault.persist_at(flights(&[("a", 50.0)]), 3);
    assert_eq!(vault.load(), Some(snapshot));
}

#[test]
fn quota_failure_leaves_previous_snapshot() {
    let small = flights(&[("a", 50.0)]);
    let encoded_len = serde_json::to_string(&vt_core::SearchSnapshot::new(small.clone(), 1))
        .expect("encode")
        .len() as u64;

    let vault = OfflineVault::new(MemorySlotStore::with_quota(encoded_len));
    let kept = vault.persist_at(small, 1);

    let large = flights(&[("a", 50.0), ("b", 80.0), ("c", 120.0)]);
    let returned = vault.persist_at(large.clone(), 2);
    assert_eq!(returned.data, large, "caller still gets its snapshot");
    assert_eq!(vault.load(), Some(kept));

    assert!(matches!(
        vault.try_persist(large),
        Err(StorageError::QuotaExceeded { .. })
    ));
}

#[test]
fn legacy_ts_key_is_read() {
    let store = MemorySlotStore::new();
    store
        .write(
            DEFAULT_VAULT_KEY,
            r#"{"data": {"search_type": "hotel", "options": []}, "ts": 1699999999000}"#,
        )
        .expect("write");

    let snapshot = OfflineVault::new(&store).load().expect("snapshot");
    assert_eq!(snapshot.captured_at_epoch_millis, 1_699_999_999_000);
    assert_eq!(snapshot.data.search_type, SearchType::Hotel);
    assert_eq!(snapshot.data.currency, "GBP");
}

#[test]
fn custom_key_uses_its_own_slot() {
    let store = MemorySlotStore::new();
    OfflineVault::with_key(&store, "other").persist(flights(&[("a", 1.0)]));
    assert_eq!(OfflineVault::new(&store).load(), None);
    assert!(OfflineVault::with_key(&store, "other").load().is_some());
}
