//! Fee assistant bag selection.

use serde::{Deserialize, Serialize};

const fn default_carry_on_bags() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeesConfig {
    /// Carry-on bags priced into the fee-adjusted total.
    #[serde(default = "default_carry_on_bags")]
    pub carry_on_bags: u32,

    /// Checked bags priced into the fee-adjusted total.
    #[serde(default)]
    pub checked_bags: u32,
}

impl Default for FeesConfig {
    fn default() -> Self {
        Self {
            carry_on_bags: default_carry_on_bags(),
            checked_bags: 0,
        }
    }
}
