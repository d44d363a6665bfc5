//! What-if weights and the blended fit score.

use serde::Serialize;

use crate::entities::TravelOption;
use crate::errors::CoreError;

/// Normalized value assumed for options without a value score.
pub const NEUTRAL_VALUE: f64 = 0.5;

/// User-adjustable ranking weights. Transient, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WhatIfWeights {
    max_budget: f64,
    service_weight: f64,
}

impl WhatIfWeights {
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidInput`] when `max_budget` is negative or not
    /// finite, or `service_weight` falls outside `[0, 1]`.
    pub fn new(max_budget: f64, service_weight: f64) -> Result<Self, CoreError> {
        if !max_budget.is_finite() || max_budget < 0.0 {
            return Err(CoreError::invalid(
                "max_budget",
                format!("must be a non-negative amount, got {max_budget}"),
            ));
        }
        if !(0.0..=1.0).contains(&service_weight) {
            return Err(CoreError::invalid(
                "service_weight",
                format!("must be between 0 and 1, got {service_weight}"),
            ));
        }
        Ok(Self {
            max_budget,
            service_weight,
        })
    }

    /// Build from a 0–100 service-weight slider.
    ///
    /// # Errors
    ///
    /// See [`WhatIfWeights::new`].
    pub fn from_percent(max_budget: f64, service_pct: u8) -> Result<Self, CoreError> {
        Self::new(max_budget, f64::from(service_pct) / 100.0)
    }

    #[must_use]
    pub const fn max_budget(&self) -> f64 {
        self.max_budget
    }

    #[must_use]
    pub const fn service_weight(&self) -> f64 {
        self.service_weight
    }

    #[must_use]
    pub fn price_weight(&self) -> f64 {
        1.0 - self.service_weight
    }
}

/// Value score scaled to `[0, 1]`, or [`NEUTRAL_VALUE`] when absent.
#[must_use]
pub fn normalized_value(option: &TravelOption) -> f64 {
    option
        .value_score
        .filter(|score| score.is_finite())
        .map_or(NEUTRAL_VALUE, |score| score / 10.0)
}

/// Blended price/value score used by the what-if ranking.
///
/// In-budget options earn `price_weight × (1 − price/budget)` on top of
/// `service_weight × value`. Over-budget options, and every option when the
/// budget is zero, get the value term only. A missing price counts as 0.
#[must_use]
pub fn compute_fit_score(option: &TravelOption, weights: &WhatIfWeights) -> f64 {
    let price = option.cheapest_price.unwrap_or(0.0);
    let value = normalized_value(option);
    let budget = weights.max_budget;

    if budget > 0.0 && price <= budget {
        weights.price_weight().mul_add(1.0 - price / budget, weights.service_weight * value)
    } else {
        weights.service_weight * value
    }
}
