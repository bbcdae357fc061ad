use serde::{Deserialize, Serialize};

use crate::models::{FormField, PropertyValue};
use crate::normalize::strip_thousands_separators;

/// Key of the constant field naming the firm the referral comes from.
pub const REFERRING_FIRM_KEY: &str = "referred_by_firm";

/// Everything the referrer typed into the form, already normalised field by
/// field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub first_name: String,
    pub last_name: String,
    pub postcode: String,
    pub value: String,
    pub email: String,
    pub phone: String,
    pub referred_by_name: String,
}

impl QuoteRequest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(
        &self,
        field: FormField,
    ) -> &str {
        match field {
            FormField::FirstName => &self.first_name,
            FormField::LastName => &self.last_name,
            FormField::Postcode => &self.postcode,
            FormField::Value => &self.value,
            FormField::Email => &self.email,
            FormField::Phone => &self.phone,
            FormField::ReferredByName => &self.referred_by_name,
        }
    }

    /// Stores `raw` in `field` after applying the field's formatting rule.
    pub fn set(
        &mut self,
        field: FormField,
        raw: &str,
    ) {
        let formatted = field.normalize(raw);
        let slot = match field {
            FormField::FirstName => &mut self.first_name,
            FormField::LastName => &mut self.last_name,
            FormField::Postcode => &mut self.postcode,
            FormField::Value => &mut self.value,
            FormField::Email => &mut self.email,
            FormField::Phone => &mut self.phone,
            FormField::ReferredByName => &mut self.referred_by_name,
        };
        *slot = formatted;
    }

    pub fn property_value(&self) -> PropertyValue {
        PropertyValue::from_input(&self.value)
    }

    /// Key/value pairs for the submission body, in wire order, followed by
    /// the referring firm. The property value is sent without commas.
    pub fn wire_fields(
        &self,
        referring_firm: &str,
    ) -> Vec<(&'static str, String)> {
        let mut fields: Vec<_> = FormField::WIRE_ORDER
            .into_iter()
            .map(|field| {
                let value = match field {
                    FormField::Value => strip_thousands_separators(&self.value),
                    other => self.get(other).to_string(),
                };
                (field.key(), value)
            })
            .collect();
        fields.push((REFERRING_FIRM_KEY, referring_firm.to_string()));
        fields
    }

    /// First word of the referrer's name, or `"there"` when it is blank.
    pub fn referrer_greeting_name(&self) -> &str {
        self.referred_by_name
            .split(' ')
            .next()
            .filter(|first| !first.is_empty())
            .unwrap_or("there")
    }

    /// Validates that every field is present and the email looks like one.
    pub fn validate_for_submit(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        for field in FormField::PROMPT_ORDER {
            if self.get(field).trim().is_empty() {
                errors.push(format!("{} is required.", field.label()));
            }
        }

        if !self.email.trim().is_empty() && !looks_like_email(&self.email) {
            errors.push("Email must be a valid email address.".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn looks_like_email(s: &str) -> bool {
    let s = s.trim();
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    match s.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}
