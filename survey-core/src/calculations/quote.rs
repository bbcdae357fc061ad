//! Survey price lookup by property value.
//!
//! # Tier Table
//!
//! | Upper bound (≤) | Price (£) |
//! |-----------------|-----------|
//! | 100,000         | 499       |
//! | 200,000         | 499       |
//! | 300,000         | 549       |
//! | 400,000         | 599       |
//! | 500,000         | 649       |
//! | 600,000         | 699       |
//! | 700,000         | 749       |
//! | 800,000         | 799       |
//! | 900,000         | 849       |
//! | 1,000,000       | 899       |
//! | 1,250,000       | 949       |
//! | 1,500,000       | 999       |
//! | 1,750,000       | 1,049     |
//! | 2,000,000       | 1,099     |
//! | above 2,000,000 | Price on application |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use survey_core::calculations::{QuoteEngine, compute_quote};
//! use survey_core::{PropertyValue, QuoteResult};
//!
//! let engine = QuoteEngine::new();
//!
//! assert_eq!(engine.compute(PropertyValue(450_000)), QuoteResult::Price(dec!(649)));
//! assert_eq!(compute_quote(2_000_001), QuoteResult::PriceOnApplication);
//! ```

use crate::models::{PriceTier, PropertyValue, QuoteResult};

/// Price tiers ordered by strictly increasing upper bound.
pub const PRICE_TIERS: [PriceTier; 14] = [
    PriceTier::new(100_000, 499),
    PriceTier::new(200_000, 499),
    PriceTier::new(300_000, 549),
    PriceTier::new(400_000, 599),
    PriceTier::new(500_000, 649),
    PriceTier::new(600_000, 699),
    PriceTier::new(700_000, 749),
    PriceTier::new(800_000, 799),
    PriceTier::new(900_000, 849),
    PriceTier::new(1_000_000, 899),
    PriceTier::new(1_250_000, 949),
    PriceTier::new(1_500_000, 999),
    PriceTier::new(1_750_000, 1_049),
    PriceTier::new(2_000_000, 1_099),
];

/// Quotes property values against the survey price tiers.
#[derive(Debug, Clone, Copy)]
pub struct QuoteEngine {
    tiers: &'static [PriceTier],
}

impl QuoteEngine {
    pub fn new() -> Self {
        Self {
            tiers: &PRICE_TIERS,
        }
    }

    pub fn tiers(&self) -> &'static [PriceTier] {
        self.tiers
    }

    /// Returns the price of the first tier whose bound is not exceeded, or
    /// [`QuoteResult::PriceOnApplication`] above the last bound.
    pub fn compute(
        &self,
        value: PropertyValue,
    ) -> QuoteResult {
        self.tiers
            .iter()
            .find(|tier| tier.covers(value.get()))
            .map_or(QuoteResult::PriceOnApplication, |tier| {
                QuoteResult::Price(tier.price)
            })
    }
}

impl Default for QuoteEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Quotes a property value already parsed from user input.
pub fn compute_quote(property_value: u64) -> QuoteResult {
    QuoteEngine::new().compute(PropertyValue(property_value))
}
