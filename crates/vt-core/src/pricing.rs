//! Pure pricing derivations for the option model.
//!
//! Nothing here performs I/O or mutates its input. Malformed numerics are
//! rejected with [`CoreError::InvalidInput`] so they never reach display state.

use crate::entities::{SearchPayload, SourcePrice, TravelOption};
use crate::errors::CoreError;

/// Per-bag ancillary fees used by the fee assistant.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BagFees {
    pub carry_on_fee: f64,
    pub checked_fee: f64,
}

/// How many bags the traveller takes; drives the fee-adjusted total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BagSelection {
    pub carry_on: u32,
    pub checked: u32,
}

impl Default for BagSelection {
    fn default() -> Self {
        Self {
            carry_on: 1,
            checked: 0,
        }
    }
}

/// Minimum price across `sources`, or `None` when there are none.
///
/// Non-finite quotes are skipped.
#[must_use]
pub fn compute_cheapest(sources: &[SourcePrice]) -> Option<f64> {
    cheapest_source(sources).map(|source| source.price)
}

/// The source quoting the minimum price. Ties go to the earliest declared source.
#[must_use]
pub fn cheapest_source(sources: &[SourcePrice]) -> Option<&SourcePrice> {
    let mut best: Option<&SourcePrice> = None;
    for source in sources.iter().filter(|source| source.price.is_finite()) {
        match best {
            Some(current) if source.price >= current.price => {}
            _ => best = Some(source),
        }
    }
    best
}

/// Price after cash-back: `nominal × (1 − pct/100)` when `pct > 0`, else `nominal`.
///
/// # Errors
///
/// Returns [`CoreError::InvalidInput`] when `nominal_price` is negative or not
/// finite, or when `cashback_pct` is not finite or above 100.
pub fn compute_effective_price(nominal_price: f64, cashback_pct: f64) -> Result<f64, CoreError> {
    ensure_price("nominal_price", nominal_price)?;
    if !cashback_pct.is_finite() || cashback_pct > 100.0 {
        return Err(CoreError::invalid(
            "cashback_pct",
            format!("expected a percentage up to 100, got {cashback_pct}"),
        ));
    }

    if cashback_pct > 0.0 {
        Ok(nominal_price * (1.0 - cashback_pct / 100.0))
    } else {
        Ok(nominal_price)
    }
}

/// Base price plus the fees for the selected bags. Never negative.
///
/// # Errors
///
/// Returns [`CoreError::InvalidInput`] when the base price or a fee is
/// negative or not finite.
pub fn compute_fee_adjusted_total(
    base_price: f64,
    carry_on_bags: u32,
    checked_bags: u32,
    fees: BagFees,
) -> Result<f64, CoreError> {
    ensure_price("base_price", base_price)?;
    ensure_price("carry_on_fee", fees.carry_on_fee)?;
    ensure_price("checked_fee", fees.checked_fee)?;

    let total = base_price
        + f64::from(carry_on_bags) * fees.carry_on_fee
        + f64::from(checked_bags) * fees.checked_fee;
    Ok(total.max(0.0))
}

fn ensure_price(field: &str, value: f64) -> Result<(), CoreError> {
    if !value.is_finite() {
        return Err(CoreError::invalid(field, format!("expected a finite amount, got {value}")));
    }
    if value < 0.0 {
        return Err(CoreError::invalid(field, format!("must not be negative, got {value}")));
    }
    Ok(())
}

fn ensure_range(field: &str, value: f64, max: f64) -> Result<(), CoreError> {
    if !value.is_finite() || !(0.0..=max).contains(&value) {
        return Err(CoreError::invalid(
            field,
            format!("expected a value between 0 and {max}, got {value}"),
        ));
    }
    Ok(())
}

/// Check every numeric field of an option (and its bundle legs).
///
/// # Errors
///
/// Returns [`CoreError::InvalidInput`] naming the first malformed field.
pub fn validate(option: &TravelOption) -> Result<(), CoreError> {
    for source in &option.prices_by_source {
        ensure_price("prices_by_source.price", source.price)?;
    }
    if let Some(price) = option.cheapest_price {
        ensure_price("cheapest_price", price)?;
    }
    if let Some(fees) = &option.fee_assistant {
        if let Some(base_price) = fees.base_price {
            ensure_price("fee_assistant.base_price", base_price)?;
        }
        ensure_price("fee_assistant.carry_on_fee", fees.carry_on_fee)?;
        ensure_price("fee_assistant.checked_fee", fees.checked_fee)?;
    }
    if let Some(cashback) = &option.cashback {
        if !cashback.cashback_pct.is_finite() || cashback.cashback_pct > 100.0 {
            return Err(CoreError::invalid(
                "cashback.cashback_pct",
                format!("expected a percentage up to 100, got {}", cashback.cashback_pct),
            ));
        }
    }
    if let Some(score) = option.value_score {
        ensure_range("value_score", score, 10.0)?;
    }
    if let Some(eco) = option.eco_score {
        ensure_range("eco_score", eco, 1.0)?;
    }
    if let Some(hidden) = &option.hidden_deal {
        if let Some(rating) = hidden.support_rating {
            ensure_range("hidden_deal.support_rating", rating, 5.0)?;
        }
    }
    if let Some(leg) = &option.flight {
        validate(leg)?;
    }
    if let Some(leg) = &option.hotel {
        validate(leg)?;
    }
    Ok(())
}

/// Fill the derived economics a provider left empty.
///
/// - `cheapest_price` becomes the source minimum when missing, and always when
///   two or more sources quote.
/// - `cashback.effective` is recomputed from the nominal price when the
///   percentage is positive.
/// - `fee_assistant.estimated_total` is computed for `bags` when missing and a
///   base price is known.
///
/// Bundle legs are enriched recursively. The input is left untouched.
///
/// # Errors
///
/// Returns [`CoreError::InvalidInput`] if [`validate`] rejects the option.
pub fn enrich(option: &TravelOption, bags: BagSelection) -> Result<TravelOption, CoreError> {
    validate(option)?;
    let mut enriched = option.clone();

    if enriched.cheapest_price.is_none() || enriched.prices_by_source.len() >= 2 {
        if let Some(min) = compute_cheapest(&enriched.prices_by_source) {
            enriched.cheapest_price = Some(min);
        }
    }

    let nominal = enriched.cheapest_price;
    if let (Some(cashback), Some(nominal)) = (enriched.cashback.as_mut(), nominal) {
        if cashback.cashback_pct > 0.0 {
            cashback.effective = Some(compute_effective_price(nominal, cashback.cashback_pct)?);
        }
    }

    if let Some(fees) = enriched.fee_assistant.as_mut() {
        if let (None, Some(base_price)) = (fees.estimated_total, fees.base_price) {
            fees.estimated_total = Some(compute_fee_adjusted_total(
                base_price,
                bags.carry_on,
                bags.checked,
                BagFees {
                    carry_on_fee: fees.carry_on_fee,
                    checked_fee: fees.checked_fee,
                },
            )?);
        }
    }

    if let Some(leg) = &option.flight {
        enriched.flight = Some(Box::new(enrich(leg, bags)?));
    }
    if let Some(leg) = &option.hotel {
        enriched.hotel = Some(Box::new(enrich(leg, bags)?));
    }

    Ok(enriched)
}

/// Enrich every option of a payload, dropping the ones that fail validation.
///
/// The flight-only and hotel-only comparison lists are enriched the same way.
#[must_use]
pub fn enrich_payload(payload: &SearchPayload, bags: BagSelection) -> SearchPayload {
    let mut enriched = payload.clone();
    if let Some(results) = enriched.results_mut() {
        let before = results.len();
        enrich_list(results, bags);
        tracing::debug!(before, after = results.len(), "enriched search results");
    }
    enrich_list(&mut enriched.flight_options, bags);
    enrich_list(&mut enriched.hotel_options, bags);
    enriched
}

fn enrich_list(options: &mut Vec<TravelOption>, bags: BagSelection) {
    *options = options
        .iter()
        .filter_map(|option| match enrich(option, bags) {
            Ok(option) => Some(option),
            Err(error) => {
                tracing::warn!(id = ?option.id, %error, "dropping option with invalid pricing");
                None
            }
        })
        .collect();
}
