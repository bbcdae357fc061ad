//! Terminal views for the referral flow.
//!
//! Each view writes to a [`Prompter`], which wraps the input and output
//! streams so the whole flow can be driven from a script in tests.

pub mod confirmation;
pub mod form;
pub mod intro;
pub mod tiers;

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use indicatif::{ProgressBar, ProgressStyle};

/// Name shown at the top of every screen.
pub const BRAND: &str = "Acre Surveying";

/// Line-oriented input/output for the views.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    spinners: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(
        input: R,
        output: W,
    ) -> Self {
        Self {
            input,
            output,
            spinners: true,
        }
    }

    /// Turns the progress spinners off, e.g. when output is not a terminal.
    pub fn without_spinners(mut self) -> Self {
        self.spinners = false;
        self
    }

    /// Prints `label` and reads one line. Returns `None` at end of input.
    pub fn ask(
        &mut self,
        label: &str,
    ) -> io::Result<Option<String>> {
        write!(self.output, "{label}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']);
        Ok(Some(trimmed.to_string()))
    }

    pub fn say(
        &mut self,
        line: impl Display,
    ) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// A spinner with `message`, hidden when spinners are off.
    pub fn spinner(
        &self,
        message: &'static str,
    ) -> ProgressBar {
        if !self.spinners {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new_spinner().with_message(message);
        if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
            bar.set_style(style);
        }
        bar.enable_steady_tick(std::time::Duration::from_millis(100));
        bar
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
