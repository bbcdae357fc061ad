pub mod dry_run;
pub mod factory;
pub mod submitter;

pub use dry_run::{DryRunSubmitter, DryRunSubmitterFactory};
pub use factory::{DEFAULT_REFERRING_FIRM, SubmitConfig, SubmitterFactory, SubmitterRegistry};
pub use submitter::{LeadSubmitter, SubmitError};
