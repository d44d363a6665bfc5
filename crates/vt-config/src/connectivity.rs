//! Connectivity probe configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ConfigError;

fn default_probe_addr() -> String {
    String::from("1.1.1.1:53")
}

const fn default_probe_timeout_ms() -> u64 {
    500
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConnectivityConfig {
    /// `host:port` the startup probe tries to reach.
    #[serde(default = "default_probe_addr")]
    pub probe_addr: String,

    /// Connect timeout for the startup probe, in milliseconds.
    #[serde(default = "default_probe_timeout_ms")]
    pub probe_timeout_ms: u64,

    /// Skip the probe and start offline.
    #[serde(default)]
    pub force_offline: bool,
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            probe_addr: default_probe_addr(),
            probe_timeout_ms: default_probe_timeout_ms(),
            force_offline: false,
        }
    }
}

impl ConnectivityConfig {
    #[must_use]
    pub const fn probe_timeout(&self) -> Duration {
        Duration::from_millis(self.probe_timeout_ms)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.probe_timeout_ms == 0 {
            return Err(ConfigError::invalid(
                "connectivity.probe_timeout_ms",
                "must be greater than 0",
            ));
        }
        if self.probe_addr.is_empty() {
            return Err(ConfigError::invalid(
                "connectivity.probe_addr",
                "must not be empty",
            ));
        }
        Ok(())
    }
}
