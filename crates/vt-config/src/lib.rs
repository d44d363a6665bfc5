//! # vt-config
//!
//! Layered configuration loading for ValueTrip using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VALUETRIP_*` prefix, `__` as separator)
//! 2. Project-level `.valuetrip/config.toml`
//! 3. User-level `~/.config/valuetrip/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `VALUETRIP_VAULT__DIR` -> `vault.dir`,
//! `VALUETRIP_WHAT_IF__MAX_BUDGET` -> `what_if.max_budget`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use vt_config::VtConfig;
//!
//! let config = VtConfig::load_with_dotenv().expect("config");
//! println!("vault key: {}", config.vault.key);
//! ```

mod connectivity;
mod display;
mod error;
mod fees;
mod vault;
mod what_if;

pub use connectivity::ConnectivityConfig;
pub use display::DisplayConfig;
pub use error::ConfigError;
pub use fees::FeesConfig;
pub use vault::VaultConfig;
pub use what_if::WhatIfConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VtConfig {
    #[serde(default)]
    pub vault: VaultConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub what_if: WhatIfConfig,
    #[serde(default)]
    pub fees: FeesConfig,
    #[serde(default)]
    pub connectivity: ConnectivityConfig,
}

impl VtConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`VtConfig::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source fails to parse, or
    /// [`ConfigError::InvalidValue`] if a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading a `.env` file from the current directory.
    ///
    /// # Errors
    ///
    /// See [`VtConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".valuetrip/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("VALUETRIP_").split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.vault.validate()?;
        self.display.validate()?;
        self.what_if.validate()?;
        self.connectivity.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("valuetrip").join("config.toml"))
    }
}
