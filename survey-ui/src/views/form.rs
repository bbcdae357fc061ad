use std::io::{self, BufRead, Write};

use survey_core::{FormField, QuoteRequest, QuoteResult};

use super::{BRAND, Prompter};

const DISCLAIMER: &str = "Upon submitting this information the homebuyer will receive a bespoke \
quotation based on their property value. If they are happy with the quote, they can follow the \
booking link and pay online.";

pub fn show_header<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> io::Result<()> {
    prompter.say(BRAND)?;
    prompter.say("")?;
    prompter.say(DISCLAIMER)?;
    prompter.say("")
}

/// Prompts for every field in form order.
///
/// A field that already holds a value shows it in brackets; an empty answer
/// keeps it. Returns `false` if input ran out before the form was complete.
pub fn fill<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    request: &mut QuoteRequest,
) -> io::Result<bool> {
    for field in FormField::PROMPT_ORDER {
        let current = request.get(field).to_string();
        let label = if current.is_empty() {
            field.label().to_string()
        } else {
            format!("{} [{current}]", field.label())
        };

        let Some(answer) = prompter.ask(&label)? else {
            return Ok(false);
        };
        if !answer.trim().is_empty() || current.is_empty() {
            request.set(field, &answer);
        }
    }
    Ok(true)
}

pub fn show_errors<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    errors: &[String],
) -> io::Result<()> {
    for error in errors {
        prompter.say(format!("  ! {error}"))?;
    }
    prompter.say("")
}

/// Shown after a failed submission; the quote is still displayed.
pub fn show_alert<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    alert: &str,
    quote: Option<&QuoteResult>,
) -> io::Result<()> {
    prompter.say(alert)?;
    if let Some(quote) = quote {
        prompter.say(format!("Estimated Survey Quote: {quote}"))?;
    }
    prompter.say("")
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use pretty_assertions::assert_eq;

    use super::*;

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new()).without_spinners()
    }

    #[test]
    fn fill_formats_answers_as_entered() {
        let mut p = prompter(
            "john\no'brien\n450,000\nsw1a 1aa\nJohn@Example.com\n0712345678901234\nsam smith\n",
        );
        let mut request = QuoteRequest::new();

        let complete = fill(&mut p, &mut request).unwrap();

        assert!(complete);
        assert_eq!(request.first_name, "John");
        assert_eq!(request.last_name, "O'brien");
        assert_eq!(request.value, "450,000");
        assert_eq!(request.postcode, "SW1A 1AA");
        assert_eq!(request.email, "john@example.com");
        assert_eq!(request.phone, "07123 456 789");
        assert_eq!(request.referred_by_name, "Sam Smith");
    }

    #[test]
    fn fill_keeps_existing_values_on_empty_answer() {
        let mut request = QuoteRequest::new();
        request.set(FormField::FirstName, "Jane");
        request.set(FormField::Value, "300000");
        let mut p = prompter("\n\n\n\n\n\n\n");

        fill(&mut p, &mut request).unwrap();
        let output = String::from_utf8(p.into_output()).unwrap();

        assert_eq!(request.first_name, "Jane");
        assert_eq!(request.value, "300000");
        assert!(output.contains("First Name [Jane]: "));
        assert!(output.contains("Last Name: "));
    }

    #[test]
    fn fill_reports_end_of_input() {
        let mut p = prompter("jane\n");
        let mut request = QuoteRequest::new();

        assert!(!fill(&mut p, &mut request).unwrap());
    }

    #[test]
    fn alert_still_shows_quote() {
        let mut p = prompter("");

        show_alert(&mut p, "Something went wrong. Please try again.", Some(&QuoteResult::PriceOnApplication))
            .unwrap();
        let output = String::from_utf8(p.into_output()).unwrap();

        assert!(output.contains("Something went wrong. Please try again."));
        assert!(output.contains("Estimated Survey Quote: Price on application"));
    }
}
