//! Badge derivation. Badges are independent: each one appears only when the
//! field behind it is present.

use serde::Serialize;
use vt_core::TravelOption;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Badge {
    /// Which provider or GDS the price came from.
    Source { name: String },
    ValueScore { score: f64 },
    VerifiedGem,
    /// Eco score as a whole percentage.
    Eco { percent: u32 },
    HiddenDeal {
        label: String,
        support_rating: Option<f64>,
        warning: Option<String>,
    },
    RiskyConnection { message: Option<String> },
}

impl Badge {
    /// Text shown on the badge.
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Source { name } => format!("From {name}"),
            Self::ValueScore { score } => format!("ValueScore {score}/10"),
            Self::VerifiedGem => String::from("Verified Value Gem"),
            Self::Eco { percent } => format!("Eco {percent}%"),
            Self::HiddenDeal {
                label,
                support_rating,
                ..
            } => {
                let label = if label.is_empty() {
                    "Hidden deal"
                } else {
                    label.as_str()
                };
                match support_rating {
                    Some(rating) => format!("{label} · {rating}/5"),
                    None => label.to_string(),
                }
            }
            Self::RiskyConnection { .. } => String::from("⚠ Risky connection"),
        }
    }
}

/// Source attribution: the first named source, else the GDS tag.
///
/// Bundles attribute to their flight leg.
fn source_badge(option: &TravelOption) -> Option<Badge> {
    let attributed = option.flight.as_deref().unwrap_or(option);
    let gds = attributed.gds_source.as_deref()?;
    let name = attributed.first_source_name().unwrap_or(gds);
    Some(Badge::Source {
        name: name.to_string(),
    })
}

fn eco_badge(option: &TravelOption) -> Option<Badge> {
    let score = option.eco_score.filter(|score| score.is_finite())?;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = (score * 100.0).round().clamp(0.0, 100.0) as u32;
    Some(Badge::Eco { percent })
}

/// Every badge that applies, in display order.
#[must_use]
pub fn badges_for(option: &TravelOption, eco_mode: bool) -> Vec<Badge> {
    let mut badges = Vec::new();

    if let Some(badge) = source_badge(option) {
        badges.push(badge);
    }
    if let Some(score) = option.value_score {
        badges.push(Badge::ValueScore { score });
    }
    if option.verified_gem {
        badges.push(Badge::VerifiedGem);
    }
    if eco_mode {
        if let Some(badge) = eco_badge(option) {
            badges.push(badge);
        }
    }
    if let Some(hidden) = &option.hidden_deal {
        badges.push(Badge::HiddenDeal {
            label: hidden.label.clone(),
            support_rating: hidden.support_rating,
            warning: hidden.warning.clone(),
        });
    }
    if let Some(risky) = option.risky_connection.as_ref().filter(|r| r.is_risky) {
        badges.push(Badge::RiskyConnection {
            message: risky.message.clone(),
        });
    }

    badges
}
