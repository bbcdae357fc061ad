use serde::{Deserialize, Serialize};

use crate::normalize;

/// One input on the referral form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormField {
    FirstName,
    LastName,
    Postcode,
    Value,
    Email,
    Phone,
    ReferredByName,
}

impl FormField {
    /// Fields in the order the form asks for them.
    pub const PROMPT_ORDER: [FormField; 7] = [
        Self::FirstName,
        Self::LastName,
        Self::Value,
        Self::Postcode,
        Self::Email,
        Self::Phone,
        Self::ReferredByName,
    ];

    /// Fields in the order they are written to the submission body.
    pub const WIRE_ORDER: [FormField; 7] = [
        Self::FirstName,
        Self::LastName,
        Self::Postcode,
        Self::Value,
        Self::Email,
        Self::Phone,
        Self::ReferredByName,
    ];

    /// Key used for the field in the multipart body.
    pub fn key(&self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Postcode => "postcode",
            Self::Value => "value",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::ReferredByName => "referred_by_name",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "first_name" => Some(Self::FirstName),
            "last_name" => Some(Self::LastName),
            "postcode" => Some(Self::Postcode),
            "value" => Some(Self::Value),
            "email" => Some(Self::Email),
            "phone" => Some(Self::Phone),
            "referred_by_name" => Some(Self::ReferredByName),
            _ => None,
        }
    }

    /// Placeholder text shown when prompting for the field.
    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Postcode => "Postcode",
            Self::Value => "Value",
            Self::Email => "Email",
            Self::Phone => "Phone Number",
            Self::ReferredByName => "Your Name",
        }
    }

    /// Name-like fields get word capitalisation.
    pub fn is_name(&self) -> bool {
        self.key().contains("name")
    }

    /// Applies this field's input formatting rule to freshly entered text.
    pub fn normalize(
        &self,
        raw: &str,
    ) -> String {
        match self {
            Self::Postcode => normalize::uppercase(raw),
            Self::Email => normalize::lowercase(raw),
            Self::Phone => normalize::format_phone(raw),
            Self::Value => raw.to_string(),
            _ if self.is_name() => normalize::capitalize_words(raw),
            _ => raw.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn key_and_parse_agree_for_every_field() {
        for field in FormField::WIRE_ORDER {
            assert_eq!(FormField::parse(field.key()), Some(field));
        }
    }

    #[test]
    fn parse_rejects_unknown_key() {
        assert_eq!(FormField::parse("referred_by_firm"), None);
    }

    #[test]
    fn only_name_fields_are_names() {
        let names: Vec<_> = FormField::PROMPT_ORDER
            .into_iter()
            .filter(FormField::is_name)
            .collect();

        assert_eq!(
            names,
            vec![
                FormField::FirstName,
                FormField::LastName,
                FormField::ReferredByName
            ]
        );
    }

    #[test]
    fn normalize_dispatches_per_field() {
        assert_eq!(FormField::FirstName.normalize("mary jane"), "Mary Jane");
        assert_eq!(FormField::Postcode.normalize("sw1a 1aa"), "SW1A 1AA");
        assert_eq!(FormField::Email.normalize("Jo@Example.COM"), "jo@example.com");
        assert_eq!(FormField::Phone.normalize("07123-456-789"), "07123 456 789");
        assert_eq!(FormField::Value.normalize("450,000"), "450,000");
    }
}
