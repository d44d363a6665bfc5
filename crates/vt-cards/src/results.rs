//! Whole-payload rendering.

use serde::Serialize;
use vt_core::enums::SearchType;
use vt_core::{SearchPayload, TravelOption};

use crate::card::{CardRecord, RenderContext, render_card};

/// Banner shown when the render is explicitly in eco mode.
pub const ECO_BANNER: &str = "Eco-Service Hybrid on";

/// Title of the flight-only comparison block.
pub const FLIGHTS_ONLY_TITLE: &str = "Flights only (for comparison)";

/// Title of the hotel-only comparison block.
pub const HOTELS_ONLY_TITLE: &str = "Hotels only (for comparison)";

/// How many entries each comparison block shows.
pub const COMPARISON_LIMIT: usize = 3;

/// Ground transport deep links all go through one affiliate.
const GROUND_BOOKING_HEADER: &str = "Booking via Travelpayouts";

/// Secondary result list shown under bundle deals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonBlock {
    pub title: &'static str,
    pub cards: Vec<CardRecord>,
}

/// A rendered result set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsView {
    pub search_type: SearchType,
    pub currency: String,
    /// Live-data attribution line.
    pub header: Option<String>,
    /// `Prices verified at ...`, from the payload's freshness stamp.
    pub freshness: Option<String>,
    /// Provider notice, verbatim.
    pub message: Option<String>,
    pub eco_banner: Option<&'static str>,
    pub cards: Vec<CardRecord>,
    /// Flight-only and hotel-only blocks. Bundle searches only.
    pub comparisons: Vec<ComparisonBlock>,
}

/// Render every option of `payload`.
///
/// Eco mode comes from the payload (`eco_hybrid`, else `include_eco`); a
/// silent payload is in eco mode only when `default_eco` is set. Eco badges
/// show unless eco mode is explicitly off, the banner only when it is on.
#[must_use]
pub fn render_results(payload: &SearchPayload, default_eco: bool) -> ResultsView {
    let eco = payload.eco_mode().or_else(|| default_eco.then_some(true));
    let ctx = RenderContext {
        currency: &payload.currency,
        search_type: payload.search_type,
        eco_mode: eco != Some(false),
        nights: payload.nights,
    };

    ResultsView {
        search_type: payload.search_type,
        currency: payload.currency.clone(),
        header: header(payload),
        freshness: freshness(payload),
        message: payload.message.clone(),
        eco_banner: (eco == Some(true)).then_some(ECO_BANNER),
        cards: render_all(payload.results(), &ctx),
        comparisons: comparisons(payload, &ctx),
    }
}

fn render_all(options: &[TravelOption], ctx: &RenderContext<'_>) -> Vec<CardRecord> {
    options.iter().map(|option| render_card(option, ctx)).collect()
}

fn header(payload: &SearchPayload) -> Option<String> {
    if payload.live != Some(true) {
        return None;
    }
    let names = &payload.sources_returned_names;
    match payload.search_type {
        SearchType::Flight if names.is_empty() => Some(String::from("Live prices")),
        SearchType::Flight => Some(format!("Live prices from: {}", names.join(", "))),
        SearchType::FlightHotel if !names.is_empty() => {
            Some(format!("Live data from: {}", names.join(", ")))
        }
        SearchType::Train | SearchType::Bus | SearchType::Car | SearchType::Camper => {
            Some(GROUND_BOOKING_HEADER.to_string())
        }
        SearchType::FlightHotel | SearchType::Hotel => None,
    }
}

fn freshness(payload: &SearchPayload) -> Option<String> {
    let raw = payload.search_freshness.as_deref()?;
    let shown = payload.verified_at().map_or_else(
        || raw.to_string(),
        |at| at.format("%Y-%m-%d %H:%M UTC").to_string(),
    );
    Some(format!("Prices verified at {shown}"))
}

fn comparisons(payload: &SearchPayload, ctx: &RenderContext<'_>) -> Vec<ComparisonBlock> {
    if !payload.search_type.is_bundle() {
        return Vec::new();
    }
    let blocks = [
        (FLIGHTS_ONLY_TITLE, &payload.flight_options, SearchType::Flight),
        (HOTELS_ONLY_TITLE, &payload.hotel_options, SearchType::Hotel),
    ];
    blocks
        .into_iter()
        .filter(|(_, options, _)| !options.is_empty())
        .map(|(title, options, search_type)| {
            let limit = options.len().min(COMPARISON_LIMIT);
            ComparisonBlock {
                title,
                cards: render_all(&options[..limit], &RenderContext { search_type, ..*ctx }),
            }
        })
        .collect()
}
