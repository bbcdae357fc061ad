//! Input formatting rules applied to form fields as they are entered.
//!
//! Each rule is total: it accepts any text and never fails. Property values
//! that cannot be read as a number quietly become zero.

use tracing::warn;

/// Maximum number of digits kept in a phone number.
pub const PHONE_MAX_DIGITS: usize = 11;

/// Uppercases the first character of every whitespace-delimited word.
///
/// Only the first character changes, so `"john o'brien"` becomes
/// `"John O'brien"` and `"mcDonald"` becomes `"McDonald"`.
pub fn capitalize_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_whitespace() {
            at_word_start = true;
            out.push(c);
        } else if at_word_start {
            at_word_start = false;
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

pub fn uppercase(s: &str) -> String {
    s.to_uppercase()
}

pub fn lowercase(s: &str) -> String {
    s.to_lowercase()
}

/// Keeps at most eleven digits and groups them `5-3-3`.
///
/// Grouping only starts once the first two groups are complete; shorter
/// input comes back as bare digits.
pub fn format_phone(s: &str) -> String {
    let digits: String = s
        .chars()
        .filter(char::is_ascii_digit)
        .take(PHONE_MAX_DIGITS)
        .collect();

    if digits.len() < 8 {
        return digits;
    }

    let (area, rest) = digits.split_at(5);
    let (middle, tail) = rest.split_at(3);
    if tail.is_empty() {
        format!("{area} {middle}")
    } else {
        format!("{area} {middle} {tail}")
    }
}

/// Removes comma thousands separators.
pub fn strip_thousands_separators(s: &str) -> String {
    s.replace(',', "")
}

/// Reads a property value from free text.
///
/// Commas are stripped, leading whitespace and a sign are accepted, and the
/// leading digit run is used; anything after it is ignored. Input with no
/// leading digits is zero. Values past `u64::MAX` saturate. Negative values
/// are logged and treated as zero.
pub fn parse_property_value(s: &str) -> u64 {
    let normalized = strip_thousands_separators(s);
    let unsigned = normalized.trim_start();
    let (negative, unsigned) = match unsigned.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, unsigned.strip_prefix('+').unwrap_or(unsigned)),
    };

    let digits_len = unsigned
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits_len == 0 {
        return 0;
    }

    let value = unsigned[..digits_len].parse::<u64>().unwrap_or(u64::MAX);
    if negative && value > 0 {
        warn!(input = %s, "negative property value treated as 0");
        return 0;
    }
    value
}
