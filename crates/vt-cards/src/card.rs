//! Card shapes and the per-option renderer.

use serde::Serialize;
use vt_core::TravelOption;
use vt_core::enums::SearchType;

use crate::badges::{Badge, badges_for};
use crate::price::format_price;

/// Shown when an option has no deep link to book through.
pub const BOOKING_UNAVAILABLE: &str = "Booking link unavailable";

/// Title of every bundle card.
pub const BUNDLE_TITLE: &str = "Flight + Hotel";

/// Layout family of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardShape {
    /// Flight, train, bus, car or camper: a route from A to B.
    Travel,
    Lodging,
    Bundle,
}

impl CardShape {
    /// Pick the shape for an option found in a `search_type` result set.
    #[must_use]
    pub fn for_option(option: &TravelOption, search_type: SearchType) -> Self {
        if option.is_bundle() {
            return Self::Bundle;
        }
        match search_type {
            SearchType::Hotel => Self::Lodging,
            // Mixed flight + hotel listings: stays have a name but no carrier.
            SearchType::FlightHotel if option.carrier.is_none() && option.name.is_some() => {
                Self::Lodging
            }
            _ => Self::Travel,
        }
    }
}

/// Per-render inputs that do not live on the option.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub currency: &'a str,
    pub search_type: SearchType,
    pub eco_mode: bool,
    /// Stay length from the search itself, preferred over the hotel leg's own.
    pub nights: Option<u32>,
}

/// Immutable display record for one option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardRecord {
    pub shape: CardShape,
    pub id: Option<String>,
    pub title: String,
    /// Route, location or leg lines, top to bottom.
    pub lines: Vec<String>,
    pub price: String,
    /// Price note, fee breakdown and cash-back lines.
    pub price_details: Vec<String>,
    pub badges: Vec<Badge>,
    pub booking_url: Option<String>,
}

impl CardRecord {
    /// Booking call to action: the deep link, or the unavailable marker.
    #[must_use]
    pub fn booking_label(&self) -> &str {
        self.booking_url.as_deref().unwrap_or(BOOKING_UNAVAILABLE)
    }
}

/// Render one option. Never fails; missing fields drop their line or badge.
#[must_use]
pub fn render_card(option: &TravelOption, ctx: &RenderContext<'_>) -> CardRecord {
    let shape = CardShape::for_option(option, ctx.search_type);
    let (title, lines) = match shape {
        CardShape::Travel => (travel_title(option), travel_lines(option)),
        CardShape::Lodging => (lodging_title(option), lodging_lines(option, ctx.nights)),
        CardShape::Bundle => (BUNDLE_TITLE.to_string(), bundle_lines(option, ctx.nights)),
    };

    let display_price = display_price(option, shape);

    CardRecord {
        shape,
        id: option.id.clone(),
        title,
        lines,
        price: format_price(display_price, ctx.currency),
        price_details: price_details(option, display_price, ctx.currency),
        badges: badges_for(option, ctx.eco_mode),
        booking_url: booking_url(option).map(str::to_string),
    }
}

/// Travel prefers the fee-adjusted total; every shape then falls back to the
/// cheapest price and finally the first source quote.
fn display_price(option: &TravelOption, shape: CardShape) -> Option<f64> {
    let fee_total = match shape {
        CardShape::Travel => option
            .fee_assistant
            .as_ref()
            .and_then(|fees| fees.estimated_total),
        CardShape::Lodging | CardShape::Bundle => None,
    };
    fee_total
        .or(option.cheapest_price)
        .or_else(|| option.first_source().map(|source| source.price))
}

fn price_details(option: &TravelOption, display_price: Option<f64>, currency: &str) -> Vec<String> {
    let mut details = Vec::new();

    if let Some(note) = &option.price_note {
        details.push(note.clone());
    }

    let base_price = option
        .fee_assistant
        .as_ref()
        .filter(|fees| fees.has_bag_fees())
        .and_then(|fees| fees.base_price);
    if let Some(base_price) = base_price {
        details.push(format!("Base {currency} {base_price:.2} + bags"));
    }

    if let (Some(cashback), Some(shown)) = (&option.cashback, display_price) {
        if let Some(effective) = cashback.effective.filter(|_| cashback.cashback_pct > 0.0) {
            if effective < shown {
                details.push(format!(
                    "After {}% cash-back: {currency} {effective:.2}",
                    cashback.cashback_pct
                ));
            }
        }
    }

    details
}

fn booking_url(option: &TravelOption) -> Option<&str> {
    option
        .primary_url()
        .or_else(|| option.flight.as_deref().and_then(TravelOption::primary_url))
}

fn join_parts(parts: &[Option<String>]) -> Option<String> {
    let present: Vec<&str> = parts.iter().filter_map(Option::as_deref).collect();
    if present.is_empty() {
        None
    } else {
        Some(present.join(" · "))
    }
}

fn route(option: &TravelOption) -> Option<String> {
    match (&option.origin, &option.destination) {
        (Some(origin), Some(destination)) => Some(format!("{origin} → {destination}")),
        _ => None,
    }
}

fn stops_label(stops: u32) -> String {
    match stops {
        0 => String::from("Direct"),
        1 => String::from("1 stop"),
        n => format!("{n} stops"),
    }
}

fn travel_title(option: &TravelOption) -> String {
    match (&option.carrier, &option.airline_name) {
        (Some(carrier), Some(airline)) => format!("{carrier} · {airline}"),
        (Some(carrier), None) => carrier.clone(),
        (None, Some(airline)) => airline.clone(),
        (None, None) => option.label().to_string(),
    }
}

fn travel_lines(option: &TravelOption) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(route) = route(option) {
        lines.push(route);
    }
    if let Some(meta) = join_parts(&[
        option.stops.map(stops_label),
        option.out_date.clone(),
        option.duration_label(),
    ]) {
        lines.push(meta);
    }
    lines.extend(prediction_line(option));
    if let Some(timeline) = &option.risk_timeline {
        lines.push(format!("Risk timeline: {timeline}"));
    }
    if let Some(tip) = option
        .risky_connection
        .as_ref()
        .filter(|risky| !risky.is_risky)
        .and_then(|risky| risky.recommendation.clone())
    {
        lines.push(tip);
    }
    lines
}

fn prediction_line(option: &TravelOption) -> Option<String> {
    let prediction = option.ai_prediction.as_ref()?;
    join_parts(&[
        prediction.message.clone(),
        prediction.delay_risk.map(|risk| format!("Delay risk: {risk}")),
    ])
}

fn lodging_title(option: &TravelOption) -> String {
    option.name.clone().unwrap_or_else(|| option.label().to_string())
}

fn stay_line(option: &TravelOption, nights: Option<u32>) -> Option<String> {
    join_parts(&[
        nights.map(|n| format!("{n} night(s)")),
        option.rating.map(|rating| format!("★ {rating}")),
    ])
}

fn lodging_lines(option: &TravelOption, nights: Option<u32>) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(location) = option.location.as_ref().or(option.destination.as_ref()) {
        lines.push(location.clone());
    }
    if let (Some(check_in), Some(check_out)) = (&option.check_in, &option.check_out) {
        lines.push(format!("{check_in} – {check_out}"));
    }
    if let Some(stay) = stay_line(option, nights.or(option.nights)) {
        lines.push(stay);
    }
    lines
}

fn bundle_lines(deal: &TravelOption, nights: Option<u32>) -> Vec<String> {
    let mut lines = Vec::new();

    if let Some(flight) = deal.flight.as_deref() {
        let carrier = match (&flight.carrier, &flight.airline_name) {
            (Some(carrier), Some(airline)) => Some(format!("{carrier} · {airline}")),
            (carrier, airline) => carrier.clone().or_else(|| airline.clone()),
        };
        if let Some(line) = join_parts(&[carrier, route(flight), flight.out_date.clone()]) {
            lines.push(line);
        }
    }

    if let Some(hotel) = deal.hotel.as_deref() {
        let nights = nights.or(hotel.nights).unwrap_or(1);
        if let Some(line) = join_parts(&[
            hotel.name.clone(),
            Some(format!("{nights} night(s)")),
            hotel.rating.map(|rating| format!("★ {rating}")),
        ]) {
            lines.push(line);
        }
    }

    lines.extend(prediction_line(deal));
    lines
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use vt_core::entities::{Cashback, FeeAssistant, Prediction, RiskyConnection, SourcePrice};
    use vt_core::enums::DelayRisk;

    use super::*;

    fn ctx(search_type: SearchType) -> RenderContext<'static> {
        RenderContext {
            currency: "GBP",
            search_type,
            eco_mode: false,
            nights: None,
        }
    }

    fn flight() -> TravelOption {
        TravelOption {
            id: Some("fl-1".into()),
            carrier: Some("VY".into()),
            airline_name: Some("Vueling".into()),
            origin: Some("LGW".into()),
            destination: Some("BCN".into()),
            out_date: Some("2026-11-03".into()),
            duration_mins: Some(125),
            stops: Some(0),
            prices_by_source: vec![SourcePrice {
                source_name: "Aviasales".into(),
                price: 91.0,
                currency: None,
                url: Some("https://aviasales.example/x".into()),
            }],
            cheapest_price: Some(88.4),
            ..Default::default()
        }
    }

    #[rstest]
    #[case(SearchType::Flight, CardShape::Travel)]
    #[case(SearchType::Train, CardShape::Travel)]
    #[case(SearchType::Camper, CardShape::Travel)]
    #[case(SearchType::Hotel, CardShape::Lodging)]
    fn shape_follows_search_type(#[case] search_type: SearchType, #[case] expected: CardShape) {
        assert_eq!(CardShape::for_option(&flight(), search_type), expected);
    }

    #[test]
    fn travel_card_composes_route_lines() {
        let card = render_card(&flight(), &ctx(SearchType::Flight));
        assert_eq!(card.title, "VY · Vueling");
        assert_eq!(
            card.lines,
            vec!["LGW → BCN".to_string(), "Direct · 2026-11-03 · 2h 5m".to_string()]
        );
        assert_eq!(card.price, "GBP 88.40");
        assert_eq!(card.booking_label(), "https://aviasales.example/x");
    }

    #[test]
    fn travel_price_prefers_fee_adjusted_total() {
        let option = TravelOption {
            fee_assistant: Some(FeeAssistant {
                base_price: Some(88.4),
                carry_on_fee: 15.0,
                checked_fee: 0.0,
                estimated_total: Some(103.4),
            }),
            cashback: Some(Cashback {
                cashback_pct: 5.0,
                effective: Some(83.98),
            }),
            ..flight()
        };
        let card = render_card(&option, &ctx(SearchType::Flight));
        assert_eq!(card.price, "GBP 103.40");
        assert_eq!(
            card.price_details,
            vec![
                "Base GBP 88.40 + bags".to_string(),
                "After 5% cash-back: GBP 83.98".to_string(),
            ]
        );
    }

    #[test]
    fn cashback_line_hidden_when_not_cheaper() {
        let option = TravelOption {
            cashback: Some(Cashback {
                cashback_pct: 5.0,
                effective: Some(95.0),
            }),
            ..flight()
        };
        let card = render_card(&option, &ctx(SearchType::Flight));
        assert!(card.price_details.is_empty());
    }

    #[test]
    fn prediction_and_connection_tip_lines() {
        let option = TravelOption {
            ai_prediction: Some(Prediction {
                message: Some("Likely on time".into()),
                delay_risk: Some(DelayRisk::Low),
            }),
            risky_connection: Some(RiskyConnection {
                is_risky: false,
                message: None,
                recommendation: Some("Allow 90 minutes in MAD".into()),
            }),
            stops: Some(2),
            ..flight()
        };
        let card = render_card(&option, &ctx(SearchType::Flight));
        assert_eq!(
            card.lines,
            vec![
                "LGW → BCN".to_string(),
                "2 stops · 2026-11-03 · 2h 5m".to_string(),
                "Likely on time · Delay risk: low".to_string(),
                "Allow 90 minutes in MAD".to_string(),
            ]
        );
    }

    #[test]
    fn risk_timeline_follows_prediction() {
        let option = TravelOption {
            ai_prediction: Some(Prediction {
                message: None,
                delay_risk: Some(DelayRisk::High),
            }),
            risk_timeline: Some("Storms over MAD after 18:00".into()),
            duration_mins: None,
            ..flight()
        };
        let card = render_card(&option, &ctx(SearchType::Flight));
        assert_eq!(
            card.lines,
            vec![
                "LGW → BCN".to_string(),
                "Direct · 2026-11-03".to_string(),
                "Delay risk: high".to_string(),
                "Risk timeline: Storms over MAD after 18:00".to_string(),
            ]
        );
    }

    #[test]
    fn fee_line_needs_a_base_price() {
        let option = TravelOption {
            fee_assistant: Some(FeeAssistant {
                base_price: None,
                carry_on_fee: 15.0,
                checked_fee: 0.0,
                estimated_total: Some(110.0),
            }),
            ..flight()
        };
        let card = render_card(&option, &ctx(SearchType::Flight));
        assert_eq!(card.price, "GBP 110.00");
        assert!(card.price_details.is_empty());
    }

    #[test]
    fn lodging_card_uses_location() {
        let hotel = TravelOption {
            name: Some("Hotel Lumen".into()),
            location: Some("Barcelona".into()),
            nights: Some(3),
            rating: Some(4.5),
            cheapest_price: Some(240.0),
            ..Default::default()
        };
        let card = render_card(&hotel, &ctx(SearchType::Hotel));
        assert_eq!(card.shape, CardShape::Lodging);
        assert_eq!(card.title, "Hotel Lumen");
        assert_eq!(
            card.lines,
            vec!["Barcelona".to_string(), "3 night(s) · ★ 4.5".to_string()]
        );
        assert_eq!(card.booking_label(), BOOKING_UNAVAILABLE);
    }

    #[test]
    fn bundle_card_combines_legs() {
        let deal = TravelOption {
            id: Some("deal-1".into()),
            cheapest_price: Some(328.4),
            flight: Some(Box::new(flight())),
            hotel: Some(Box::new(TravelOption {
                name: Some("Hotel Lumen".into()),
                rating: Some(4.0),
                nights: Some(2),
                ..Default::default()
            })),
            ..Default::default()
        };
        let card = render_card(
            &deal,
            &RenderContext {
                nights: Some(3),
                ..ctx(SearchType::FlightHotel)
            },
        );
        assert_eq!(card.shape, CardShape::Bundle);
        assert_eq!(card.title, BUNDLE_TITLE);
        assert_eq!(
            card.lines,
            vec![
                "VY · Vueling · LGW → BCN · 2026-11-03".to_string(),
                "Hotel Lumen · 3 night(s) · ★ 4".to_string(),
            ]
        );
        assert_eq!(card.booking_label(), "https://aviasales.example/x");
    }

    #[test]
    fn empty_option_still_renders() {
        let card = render_card(&TravelOption::default(), &ctx(SearchType::Bus));
        assert_eq!(card.title, "Deal");
        assert!(card.lines.is_empty());
        assert_eq!(card.price, "GBP unavailable");
        assert!(card.badges.is_empty());
    }

    #[test]
    fn price_falls_back_to_first_source() {
        let option = TravelOption {
            cheapest_price: None,
            ..flight()
        };
        assert_eq!(render_card(&option, &ctx(SearchType::Flight)).price, "GBP 91.00");
    }

    #[test]
    fn render_does_not_mutate_option() {
        let option = flight();
        let before = option.clone();
        let _ = render_card(&option, &ctx(SearchType::Flight));
        assert_eq!(option, before);
    }
}
