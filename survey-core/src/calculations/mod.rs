//! Quote calculations.
//!
//! This module maps a sanitised property value onto the survey price tiers.

pub mod quote;

pub use quote::{PRICE_TIERS, QuoteEngine, compute_quote};
