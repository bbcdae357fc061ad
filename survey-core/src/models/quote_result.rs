use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Outcome of quoting a property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuoteResult {
    /// Fixed survey price in GBP, VAT inclusive.
    Price(Decimal),
    /// No fixed tier applies; the quote has to be requested by hand.
    PriceOnApplication,
}

impl QuoteResult {
    pub fn price(&self) -> Option<Decimal> {
        match self {
            Self::Price(price) => Some(*price),
            Self::PriceOnApplication => None,
        }
    }

    pub fn is_price_on_application(&self) -> bool {
        matches!(self, Self::PriceOnApplication)
    }
}

impl fmt::Display for QuoteResult {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Self::Price(price) => write!(f, "£{price} (incl. VAT)"),
            Self::PriceOnApplication => f.write_str("Price on application"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn price_displays_with_pound_sign_and_vat_note() {
        assert_eq!(QuoteResult::Price(dec!(649)).to_string(), "£649 (incl. VAT)");
    }

    #[test]
    fn price_display_has_no_thousands_separator() {
        assert_eq!(QuoteResult::Price(dec!(1049)).to_string(), "£1049 (incl. VAT)");
    }

    #[test]
    fn sentinel_displays_plain_text() {
        let result = QuoteResult::PriceOnApplication;

        assert_eq!(result.to_string(), "Price on application");
        assert_eq!(result.price(), None);
        assert!(result.is_price_on_application());
    }
}
