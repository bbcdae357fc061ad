use std::fmt;

use serde::{Deserialize, Serialize};

use crate::normalize::parse_property_value;

/// A property value in whole pounds, already sanitised from user text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PropertyValue(pub u64);

impl PropertyValue {
    pub fn get(self) -> u64 {
        self.0
    }

    /// Parses free text; anything unusable becomes zero.
    pub fn from_input(raw: &str) -> Self {
        Self(parse_property_value(raw))
    }
}

impl From<u64> for PropertyValue {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
