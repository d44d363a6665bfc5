//! # vt-cards
//!
//! Projects enriched [`TravelOption`](vt_core::TravelOption)s into immutable
//! display records. Rendering never touches the network or storage, never
//! mutates its input, and never fails: a missing optional field only removes
//! the badge or line it would have produced.

pub mod badges;
pub mod card;
pub mod price;
pub mod results;

pub use badges::Badge;
pub use card::{BOOKING_UNAVAILABLE, BUNDLE_TITLE, CardRecord, CardShape, RenderContext, render_card};
pub use price::{PRICE_UNAVAILABLE, format_price};
pub use results::{
    COMPARISON_LIMIT, ComparisonBlock, ECO_BANNER, FLIGHTS_ONLY_TITLE, HOTELS_ONLY_TITLE,
    ResultsView, render_results,
};
