//! Key/value slot storage behind the vault.
//!
//! A slot holds one encoded snapshot. Writes replace the slot wholesale; a
//! reader sees either the previous value or the new one, never a mix.

use std::collections::HashMap;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::StorageError;

/// Durable medium holding named slots.
pub trait SlotStore {
    /// Read a slot. `Ok(None)` when the slot was never written or was removed.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the medium cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace a slot's contents.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::QuotaExceeded`] when `value` is over the quota,
    /// or another [`StorageError`] when the medium rejects the write.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a slot. Removing an empty slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the medium cannot be modified.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: SlotStore + ?Sized> SlotStore for &T {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).write(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove(key)
    }
}

fn check_quota(limit: Option<u64>, value: &str) -> Result<(), StorageError> {
    let size = value.len() as u64;
    match limit {
        Some(limit) if size > limit => Err(StorageError::QuotaExceeded { size, limit }),
        _ => Ok(()),
    }
}

/// One JSON file per slot: `<dir>/<key>.json`.
///
/// Writes go to a temp file in the same directory and are renamed into place.
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    dir: PathBuf,
    max_bytes: Option<u64>,
}

impl FileSlotStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            max_bytes: None,
        }
    }

    /// Reject writes larger than `max_bytes`.
    #[must_use]
    pub const fn with_quota(mut self, max_bytes: Option<u64>) -> Self {
        self.max_bytes = max_bytes;
        self
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SlotStore for FileSlotStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        check_quota(self.max_bytes, value)?;
        fs::create_dir_all(&self.dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(value.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(self.slot_path(key))
            .map_err(|error| StorageError::Io(error.error))?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.slot_path(key)) {
            Err(error) if error.kind() != ErrorKind::NotFound => Err(error.into()),
            _ => Ok(()),
        }
    }
}

/// In-process slots, for tests and for running without a writable data dir.
#[derive(Debug, Default)]
pub struct MemorySlotStore {
    slots: Mutex<HashMap<String, String>>,
    max_bytes: Option<u64>,
}

impl MemorySlotStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_quota(max_bytes: u64) -> Self {
        Self {
            slots: Mutex::default(),
            max_bytes: Some(max_bytes),
        }
    }

    fn slots(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>, StorageError> {
        self.slots
            .lock()
            .map_err(|_| StorageError::Unavailable("slot map lock poisoned".into()))
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.slots()?.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        check_quota(self.max_bytes, value)?;
        self.slots()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.slots()?.remove(key);
        Ok(())
    }
}
