use std::io::{self, BufRead, Write};

use survey_core::{QuoteRequest, QuoteResult};

use super::{BRAND, Prompter};

/// Writes the thank-you screen for a delivered referral.
pub fn render<W: Write>(
    out: &mut W,
    request: &QuoteRequest,
    quote: &QuoteResult,
) -> io::Result<()> {
    writeln!(out, "{BRAND}")?;
    writeln!(out)?;
    writeln!(out, "Thank you, {}!", request.referrer_greeting_name())?;
    writeln!(
        out,
        "Your referral has been received. Our team will handle the rest and ensure the customer \
         gets the best possible experience."
    )?;
    writeln!(
        out,
        "Your client will now receive a full illustration with the opportunity to book and pay."
    )?;
    writeln!(out)?;
    writeln!(out, "Estimated Survey Quote:")?;
    writeln!(out, "------------------------")?;
    writeln!(out, "{quote}")?;
    writeln!(out)
}

/// Asks whether to start over. Anything but a yes, or end of input, ends the
/// session.
pub fn ask_another<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> io::Result<bool> {
    let answer = prompter.ask("Submit Another Quote Request? [y/N]")?;
    Ok(matches!(
        answer.as_deref().map(str::trim).map(str::to_ascii_lowercase).as_deref(),
        Some("y" | "yes")
    ))
}
