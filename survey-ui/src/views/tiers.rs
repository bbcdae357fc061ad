use std::fmt;

use survey_core::PriceTier;

/// Printable price tier table.
pub struct TierTable<'a> {
    tiers: &'a [PriceTier],
}

impl<'a> TierTable<'a> {
    pub fn new(tiers: &'a [PriceTier]) -> Self {
        Self { tiers }
    }
}

impl fmt::Display for TierTable<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        writeln!(f, "{:<22} {}", "Property value", "Survey price (incl. VAT)")?;
        for tier in self.tiers {
            let bound = format!("up to £{}", group_thousands(tier.upper_bound));
            writeln!(f, "{bound:<22} £{}", tier.price)?;
        }
        if let Some(last) = self.tiers.last() {
            let bound = format!("above £{}", group_thousands(last.upper_bound));
            writeln!(f, "{bound:<22} Price on application")?;
        }
        Ok(())
    }
}

/// Formats `n` with comma thousands separators.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
