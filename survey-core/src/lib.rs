pub mod calculations;
pub mod models;
pub mod normalize;
pub mod submit;

pub use calculations::{QuoteEngine, compute_quote};
pub use models::*;
pub use submit::{LeadSubmitter, SubmitConfig, SubmitError};
