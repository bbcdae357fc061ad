use std::io::{BufRead, Write};
use std::time::Duration;

use anyhow::{Context, Result};
use survey_core::submit::{DryRunSubmitterFactory, SubmitterRegistry};
use survey_core::{LeadSubmitter, PropertyValue, QuoteEngine};
use survey_http::HttpSubmitterFactory;
use tracing::debug;

use crate::state::{AppState, Screen};
use crate::views::tiers::TierTable;
use crate::views::{Prompter, confirmation, form, intro};

/// Settings for one interactive session.
#[derive(Debug, Clone)]
pub struct FlowOptions {
    pub intro: Duration,
    pub referring_firm: String,
}

/// Registry with every submission backend this binary knows about.
pub fn build_registry() -> SubmitterRegistry {
    let mut registry = SubmitterRegistry::new();
    registry.register(Box::new(HttpSubmitterFactory));
    registry.register(Box::new(DryRunSubmitterFactory));
    registry
}

/// Quote for a raw property value, as shown to the user.
pub fn quote_line(raw_value: &str) -> String {
    let value = PropertyValue::from_input(raw_value);
    debug!(%value, "quoting property value");
    QuoteEngine::new().compute(value).to_string()
}

pub fn tier_table() -> String {
    TierTable::new(QuoteEngine::new().tiers()).to_string()
}

/// Runs intro → form → confirmation until the user stops or input ends.
///
/// Returns the final state so callers can inspect how the session ended.
pub async fn run_form<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    submitter: &dyn LeadSubmitter,
    options: &FlowOptions,
) -> Result<AppState> {
    let engine = QuoteEngine::new();
    let mut state = AppState::new();

    intro::show(prompter, &options.referring_firm, options.intro)
        .await
        .context("failed to show intro")?;
    state.finish_intro();

    loop {
        match state.screen {
            Screen::Intro => state.finish_intro(),
            Screen::Form => {
                form::show_header(prompter)?;
                if !form::fill(prompter, &mut state.form)? {
                    debug!("input closed while filling the form");
                    return Ok(state);
                }
                if let Err(errors) = state.form.validate_for_submit() {
                    form::show_errors(prompter, &errors)?;
                    continue;
                }

                let Some(quote) = state.begin_submit(&engine) else {
                    continue;
                };
                debug!(%quote, "submitting referral");

                let spinner = prompter.spinner("Sending...");
                let outcome = submitter.submit(&state.form).await;
                spinner.finish_and_clear();
                state.finish_submit(outcome);

                if let Some(alert) = state.alert.clone() {
                    form::show_alert(prompter, &alert, state.quote.as_ref())?;
                }
            }
            Screen::Confirmation => {
                if let Some(quote) = state.quote {
                    confirmation::render(prompter.output(), &state.form, &quote)
                        .context("failed to render confirmation")?;
                }
                if !confirmation::ask_another(prompter)? {
                    return Ok(state);
                }
                state.reset();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn registry_knows_http_and_dry_run() {
        assert_eq!(build_registry().available_backends(), vec!["dry-run", "http"]);
    }

    #[test]
    fn quote_line_parses_and_formats() {
        assert_eq!(quote_line("450,000"), "£649 (incl. VAT)");
        assert_eq!(quote_line("not a number"), "£499 (incl. VAT)");
        assert_eq!(quote_line("2,000,001"), "Price on application");
    }

    #[test]
    fn tier_table_ends_with_sentinel() {
        assert!(tier_table().trim_end().ends_with("Price on application"));
    }
}
