use async_trait::async_trait;
use tracing::info;

use crate::models::QuoteRequest;

use super::factory::{SubmitConfig, SubmitterFactory};
use super::submitter::{LeadSubmitter, SubmitError};

/// Logs what would be sent and reports success without touching the network.
#[derive(Debug, Clone)]
pub struct DryRunSubmitter {
    referring_firm: String,
}

impl DryRunSubmitter {
    pub fn new(referring_firm: impl Into<String>) -> Self {
        Self {
            referring_firm: referring_firm.into(),
        }
    }
}

#[async_trait]
impl LeadSubmitter for DryRunSubmitter {
    async fn submit(&self, request: &QuoteRequest) -> Result<(), SubmitError> {
        for (key, value) in request.wire_fields(&self.referring_firm) {
            info!(field = key, %value, "dry run: would submit");
        }
        Ok(())
    }
}

/// [`SubmitterFactory`] for the `"dry-run"` backend.
pub struct DryRunSubmitterFactory;

#[async_trait]
impl SubmitterFactory for DryRunSubmitterFactory {
    fn backend_name(&self) -> &'static str {
        "dry-run"
    }

    async fn create(
        &self,
        config: &SubmitConfig,
    ) -> Result<Box<dyn LeadSubmitter>, SubmitError> {
        Ok(Box::new(DryRunSubmitter::new(config.referring_firm.clone())))
    }
}
