//! Offline vault storage configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::ConfigError;

/// Default storage key of the single vault slot.
fn default_key() -> String {
    String::from("valuetrip_offline_vault")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VaultConfig {
    /// Directory holding the vault file. Empty means the platform data dir.
    #[serde(default)]
    pub dir: String,

    /// Slot key; the vault file is `{key}.json`.
    #[serde(default = "default_key")]
    pub key: String,

    /// Largest snapshot the vault will write, in bytes. 0 disables the quota.
    #[serde(default)]
    pub max_bytes: u64,
}

impl Default for VaultConfig {
    fn default() -> Self {
        Self {
            dir: String::new(),
            key: default_key(),
            max_bytes: 0,
        }
    }
}

impl VaultConfig {
    /// Directory the vault lives in: `dir` when set, else `<data_dir>/valuetrip/vault`.
    #[must_use]
    pub fn resolved_dir(&self) -> Option<PathBuf> {
        if self.dir.is_empty() {
            dirs::data_dir().map(|p| p.join("valuetrip").join("vault"))
        } else {
            Some(PathBuf::from(&self.dir))
        }
    }

    /// Byte quota, if one is configured.
    #[must_use]
    pub const fn quota(&self) -> Option<u64> {
        if self.max_bytes == 0 {
            None
        } else {
            Some(self.max_bytes)
        }
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let valid_key = !self.key.is_empty()
            && self
                .key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid_key {
            return Err(ConfigError::invalid(
                "vault.key",
                "must be non-empty and use only letters, digits, '_' or '-'",
            ));
        }
        Ok(())
    }
}
