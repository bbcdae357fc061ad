use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A fixed survey price for every property value up to and including
/// `upper_bound`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceTier {
    pub upper_bound: u64,
    pub price: Decimal,
}

impl PriceTier {
    /// Builds a tier priced in whole pounds.
    pub const fn new(
        upper_bound: u64,
        pounds: u32,
    ) -> Self {
        Self {
            upper_bound,
            price: Decimal::from_parts(pounds, 0, 0, false, 0),
        }
    }

    pub fn covers(
        &self,
        value: u64,
    ) -> bool {
        value <= self.upper_bound
    }
}
