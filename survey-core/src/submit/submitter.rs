use async_trait::async_trait;
use thiserror::Error;

use crate::models::QuoteRequest;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Transport error: {0}")]
    Transport(String),
}

/// Forwards a referral to wherever leads are collected.
///
/// A single best-effort attempt: implementations do not retry, and only a
/// failure to deliver the request is an error. What the receiver answers is
/// not the caller's concern.
#[async_trait]
pub trait LeadSubmitter: Send + Sync {
    async fn submit(&self, request: &QuoteRequest) -> Result<(), SubmitError>;
}
