use vt_core::weights::compute_fit_score;
use vt_core::{SearchPayload, SearchSnapshot, TravelOption, WhatIfWeights};

use crate::ranked::RankedOption;

/// Size of the default what-if view.
pub const TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct WhatIfSimulator {
    options: Vec<TravelOption>,
    currency: String,
}

impl WhatIfSimulator {
    pub fn new(options: Vec<TravelOption>, currency: impl Into<String>) -> Self {
        Self {
            options,
            currency: currency.into(),
        }
    }

    #[must_use]
    pub fn from_payload(payload: &SearchPayload) -> Self {
        Self::new(payload.results().to_vec(), payload.currency.clone())
    }

    /// Simulate over a copy of the snapshot's options.
    #[must_use]
    pub fn from_snapshot(snapshot: &SearchSnapshot) -> Self {
        Self::from_payload(&snapshot.data)
    }

    #[must_use]
    pub fn currency(&self) -> &str {
        &self.currency
    }

    #[must_use]
    pub fn options(&self) -> &[TravelOption] {
        &self.options
    }

    /// The [`TOP_N`] best options for `weights`.
    #[must_use]
    pub fn recompute_top_n(&self, weights: &WhatIfWeights) -> Vec<RankedOption<'_>> {
        self.recompute_top(weights, TOP_N)
    }

    /// The `n` best options for `weights`, highest fit first.
    ///
    /// Equal fits keep their input order.
    #[must_use]
    pub fn recompute_top(&self, weights: &WhatIfWeights, n: usize) -> Vec<RankedOption<'_>> {
        let mut scored: Vec<(f64, &TravelOption)> = self
            .options
            .iter()
            .map(|option| (compute_fit_score(option, weights), option))
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        tracing::debug!(
            candidates = scored.len(),
            n,
            max_budget = weights.max_budget(),
            service_weight = weights.service_weight(),
            "what-if ranking recomputed"
        );

        scored
            .into_iter()
            .take(n)
            .enumerate()
            .map(|(index, (fit, option))| RankedOption {
                rank: index + 1,
                fit,
                option,
            })
            .collect()
    }
}
