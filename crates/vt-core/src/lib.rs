//! # vt-core
//!
//! Option model, pricing derivations, and snapshot types for ValueTrip.
//!
//! This crate provides the foundational types shared across all ValueTrip crates:
//! - The normalized [`TravelOption`](entities::TravelOption) for flights, stays and bundles
//! - The search payload envelope and the persisted [`SearchSnapshot`](entities::SearchSnapshot)
//! - Search type and delay risk enums
//! - Pure pricing derivations (cheapest source, cash-back, fee-adjusted totals)
//! - What-if weights and the blended fit score
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod pricing;
pub mod weights;

pub use entities::{SearchPayload, SearchSnapshot, TravelOption};
pub use errors::CoreError;
pub use weights::WhatIfWeights;
