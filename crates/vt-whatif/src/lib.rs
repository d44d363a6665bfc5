//! # vt-whatif
//!
//! Re-ranks a cached result set against user weights without touching the
//! network or the vault. The simulator owns a copy of the option list, so the
//! stored snapshot is never mutated.

mod ranked;
mod simulator;

pub use ranked::RankedOption;
pub use simulator::{TOP_N, WhatIfSimulator};
