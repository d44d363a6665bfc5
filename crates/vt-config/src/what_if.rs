//! What-if simulator defaults.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_max_budget() -> f64 {
    200.0
}

const fn default_service_weight() -> f64 {
    0.5
}

const fn default_top_n() -> usize {
    5
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WhatIfConfig {
    /// Initial budget, in the snapshot's currency.
    #[serde(default = "default_max_budget")]
    pub max_budget: f64,

    /// Initial service weight, 0 to 1.
    #[serde(default = "default_service_weight")]
    pub service_weight: f64,

    /// How many ranked options to show.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

impl Default for WhatIfConfig {
    fn default() -> Self {
        Self {
            max_budget: default_max_budget(),
            service_weight: default_service_weight(),
            top_n: default_top_n(),
        }
    }
}

impl WhatIfConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if !self.max_budget.is_finite() || self.max_budget < 0.0 {
            return Err(ConfigError::invalid(
                "what_if.max_budget",
                format!("must be a non-negative amount, got {}", self.max_budget),
            ));
        }
        if !(0.0..=1.0).contains(&self.service_weight) {
            return Err(ConfigError::invalid(
                "what_if.service_weight",
                format!("must be between 0 and 1, got {}", self.service_weight),
            ));
        }
        if self.top_n == 0 {
            return Err(ConfigError::invalid("what_if.top_n", "must be at least 1"));
        }
        Ok(())
    }
}
