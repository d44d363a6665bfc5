//! Card rendering defaults.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_currency() -> String {
    String::from("GBP")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DisplayConfig {
    /// Currency code used when a payload does not name one.
    #[serde(default = "default_currency")]
    pub default_currency: String,

    /// Treat a payload that is silent on eco mode as eco mode on.
    #[serde(default)]
    pub eco_mode: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_currency: default_currency(),
            eco_mode: false,
        }
    }
}

impl DisplayConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.default_currency.len() != 3
            || !self.default_currency.chars().all(|c| c.is_ascii_uppercase())
        {
            return Err(ConfigError::invalid(
                "display.default_currency",
                format!("expected a 3-letter ISO code, got '{}'", self.default_currency),
            ));
        }
        Ok(())
    }
}
