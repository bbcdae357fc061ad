//! Application state for the referral form.
//!
//! Holds the form fields, the last computed quote, and which screen is
//! showing. Nothing here outlives the process.

use survey_core::{QuoteEngine, QuoteRequest, QuoteResult, SubmitError};
use tracing::{error, info};

/// Generic message shown whenever a submission cannot be delivered.
pub const SUBMIT_FAILED_ALERT: &str = "Something went wrong. Please try again.";

/// Which screen is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Intro,
    Form,
    Confirmation,
}

/// Application-wide state driven by the form loop.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub screen: Screen,
    pub form: QuoteRequest,
    /// Quote computed by the most recent submit, kept even if delivery failed.
    pub quote: Option<QuoteResult>,
    /// Alert raised by the most recent submit.
    pub alert: Option<String>,
    busy: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish_intro(&mut self) {
        if self.screen == Screen::Intro {
            self.screen = Screen::Form;
        }
    }

    /// True while a submission is in flight; submit is refused meanwhile.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Starts a submission: quotes the form and marks the state busy.
    ///
    /// Returns `None` without changing anything when a submission is already
    /// in flight or the form screen is not showing.
    pub fn begin_submit(
        &mut self,
        engine: &QuoteEngine,
    ) -> Option<QuoteResult> {
        if self.busy || self.screen != Screen::Form {
            return None;
        }
        let quote = engine.compute(self.form.property_value());
        self.busy = true;
        self.alert = None;
        self.quote = Some(quote);
        Some(quote)
    }

    /// Ends a submission. Busy is always cleared; success moves on to the
    /// confirmation, failure stays on the form with a generic alert.
    pub fn finish_submit(
        &mut self,
        outcome: Result<(), SubmitError>,
    ) {
        self.busy = false;
        match outcome {
            Ok(()) => {
                info!("referral submitted");
                self.screen = Screen::Confirmation;
            }
            Err(error) => {
                error!(%error, "submission failed");
                self.alert = Some(SUBMIT_FAILED_ALERT.to_string());
            }
        }
    }

    /// Clears all form data for starting fresh.
    pub fn reset(&mut self) {
        self.form.clear();
        self.quote = None;
        self.alert = None;
        self.busy = false;
        self.screen = Screen::Form;
    }
}
