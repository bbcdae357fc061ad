mod factory;
mod submitter;

pub use factory::HttpSubmitterFactory;
pub use submitter::HttpSubmitter;
