//! Property tests for the pricing derivations.

use proptest::prelude::*;
use vt_core::entities::SourcePrice;
use vt_core::pricing::{cheapest_source, compute_cheapest, compute_effective_price};

fn sources_from(prices: &[f64]) -> Vec<SourcePrice> {
    prices
        .iter()
        .enumerate()
        .map(|(index, price)| SourcePrice {
            source_name: format!("source-{index}"),
            price: *price,
            currency: None,
            url: None,
        })
        .collect()
}

proptest! {
    #[test]
    fn cheapest_is_lower_bound(prices in prop::collection::vec(0.0f64..10_000.0, 1..24)) {
        let sources = sources_from(&prices);
        let cheapest = compute_cheapest(&sources).expect("non-empty input has a minimum");
        for price in &prices {
            prop_assert!(cheapest <= *price);
        }
        prop_assert!(prices.contains(&cheapest));
    }

    #[test]
    fn cheapest_source_is_first_minimum(prices in prop::collection::vec(0u16..50, 1..24)) {
        let prices: Vec<f64> = prices.into_iter().map(f64::from).collect();
        let sources = sources_from(&prices);
        let winner = cheapest_source(&sources).expect("non-empty input has a winner");
        let first_min = prices
            .iter()
            .position(|price| (*price - winner.price).abs() < f64::EPSILON)
            .expect("winner price is in the input");
        prop_assert_eq!(winner.source_name.clone(), format!("source-{first_min}"));
    }

    #[test]
    fn cashback_lowers_price(nominal in 0.01f64..100_000.0, pct in 0.01f64..=100.0) {
        let effective = compute_effective_price(nominal, pct).unwrap();
        prop_assert!(effective < nominal);
        prop_assert!(effective >= 0.0);
    }

    #[test]
    fn zero_cashback_is_identity(nominal in 0.0f64..100_000.0) {
        let effective = compute_effective_price(nominal, 0.0).unwrap();
        prop_assert_eq!(effective.to_bits(), nominal.to_bits());
    }
}

#[test]
fn cheapest_of_empty_is_none() {
    assert_eq!(compute_cheapest(&[]), None);
}
