use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::debug;

use survey_ui::views::Prompter;
use survey_ui::{AppConfig, ConfigOverrides, FlowOptions, app, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Survey quote referrals.
///
/// Collects a customer's details, quotes a survey price from the property
/// value, and forwards the referral to the CRM.
#[derive(Debug, Parser)]
#[command(name = "SurveyQuote", version)]
struct Cli {
    /// Config file (defaults to ./survey-quote.toml when present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Submission backend: `http` or `dry-run`.
    #[arg(long, global = true)]
    backend: Option<String>,

    /// URL referrals are posted to.
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Firm sent as `referred_by_firm`.
    #[arg(long, global = true)]
    firm: Option<String>,

    /// Skip the splash screen.
    #[arg(long)]
    no_intro: bool,

    /// Log filter, e.g. `debug` or `survey_http=trace`.
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Also append logs to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    /// Hide log output on the terminal.
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Fill in and submit referrals interactively (the default).
    Form,
    /// Print the survey quote for a property value.
    Quote {
        /// Property value, commas allowed (e.g. `450,000`).
        value: String,
    },
    /// Print the price tier table.
    Tiers,
}

impl Cli {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            backend: self.backend.clone(),
            endpoint: self.endpoint.clone(),
            referring_firm: self.firm.clone(),
            no_intro: self.no_intro,
            log_level: self.log_level.clone(),
            log_file: self.log_file.clone(),
            quiet: self.quiet,
        }
    }
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_default_logging();

    let cli = Cli::parse();

    let mut config = AppConfig::load(cli.config.as_deref())?;
    cli.overrides().apply_to(&mut config);
    logging::apply_config(&config.log).context("failed to apply log settings")?;

    match cli.command.unwrap_or(Command::Form) {
        Command::Quote { value } => println!("{}", app::quote_line(&value)),
        Command::Tiers => print!("{}", app::tier_table()),
        Command::Form => {
            debug!("creating {} submitter", config.submit.backend);
            let registry = app::build_registry();
            let submitter = registry
                .create(&config.submit)
                .await
                .context("cannot set up referral submission")?;

            let options = FlowOptions {
                intro: config.intro.duration(),
                referring_firm: config.submit.referring_firm.clone(),
            };

            let stdin = io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), io::stdout());
            if !io::stderr().is_terminal() {
                prompter = prompter.without_spinners();
            }
            app::run_form(&mut prompter, &*submitter, &options).await?;
        }
    }

    Ok(())
}
