//! Search type and delay risk enums.
//!
//! All enums use `snake_case` serialization to match the provider payloads.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// SearchType
// ---------------------------------------------------------------------------

/// Discriminator carried by every search payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SearchType {
    Flight,
    FlightHotel,
    Hotel,
    Train,
    Bus,
    Car,
    Camper,
}

impl SearchType {
    /// Every search type, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Flight,
        Self::FlightHotel,
        Self::Hotel,
        Self::Train,
        Self::Bus,
        Self::Car,
        Self::Camper,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flight => "flight",
            Self::FlightHotel => "flight_hotel",
            Self::Hotel => "hotel",
            Self::Train => "train",
            Self::Bus => "bus",
            Self::Car => "car",
            Self::Camper => "camper",
        }
    }

    /// Results are bookable as a single leg (route from A to B).
    #[must_use]
    pub const fn is_single_leg(self) -> bool {
        matches!(
            self,
            Self::Flight | Self::Train | Self::Bus | Self::Car | Self::Camper
        )
    }

    /// Results are flight + hotel bundles.
    #[must_use]
    pub const fn is_bundle(self) -> bool {
        matches!(self, Self::FlightHotel)
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SearchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| format!("unknown search type '{s}'"))
    }
}

// ---------------------------------------------------------------------------
// DelayRisk
// ---------------------------------------------------------------------------

/// Categorical delay risk attached to a prediction summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DelayRisk {
    Low,
    Medium,
    High,
    /// Any label the provider sends that is not one of the above.
    #[serde(other)]
    Unknown,
}

impl DelayRisk {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DelayRisk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
