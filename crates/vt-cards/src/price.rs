//! Price formatting shared by every card shape.

/// Marker shown in place of a missing price.
pub const PRICE_UNAVAILABLE: &str = "unavailable";

/// `CUR 12.50` for finite amounts, `CUR unavailable` when missing, and the
/// raw value verbatim otherwise (`CUR NaN`, `CUR inf`).
#[must_use]
pub fn format_price(value: Option<f64>, currency: &str) -> String {
    match value {
        Some(amount) if amount.is_finite() => format!("{currency} {amount:.2}"),
        Some(raw) => format!("{currency} {raw}"),
        None => format!("{currency} {PRICE_UNAVAILABLE}"),
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Some(88.4), "GBP 88.40")]
    #[case(Some(0.0), "GBP 0.00")]
    #[case(Some(1234.567), "GBP 1234.57")]
    #[case(None, "GBP unavailable")]
    #[case(Some(f64::NAN), "GBP NaN")]
    #[case(Some(f64::INFINITY), "GBP inf")]
    fn formats(#[case] value: Option<f64>, #[case] expected: &str) {
        assert_eq!(format_price(value, "GBP"), expected);
    }
}
