use serde::Serialize;
use vt_cards::format_price;
use vt_core::TravelOption;

/// One entry of a what-if ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedOption<'a> {
    /// 1-based position in the ranking.
    pub rank: usize,
    pub fit: f64,
    pub option: &'a TravelOption,
}

impl RankedOption<'_> {
    /// `label · CUR price · ValueScore v`, with `—` for a missing score.
    #[must_use]
    pub fn summary_line(&self, currency: &str) -> String {
        let score = self
            .option
            .value_score
            .map_or_else(|| String::from("—"), |score| score.to_string());
        format!(
            "{} · {} · ValueScore {score}",
            self.option.label(),
            format_price(self.option.cheapest_price, currency),
        )
    }
}
