use async_trait::async_trait;
use reqwest::{Client, Url, multipart::Form};
use survey_core::{LeadSubmitter, QuoteRequest, SubmitError};
use tracing::{debug, warn};

/// Posts referrals to a CRM endpoint as `multipart/form-data`.
pub struct HttpSubmitter {
    client: Client,
    endpoint: Url,
    referring_firm: String,
}

impl HttpSubmitter {
    pub fn new(
        endpoint: &str,
        referring_firm: impl Into<String>,
    ) -> Result<Self, SubmitError> {
        let endpoint = Url::parse(endpoint).map_err(|e| {
            SubmitError::Configuration(format!("invalid endpoint '{endpoint}': {e}"))
        })?;
        let client = Client::builder()
            .build()
            .map_err(|e| SubmitError::Configuration(format!("cannot build HTTP client: {e}")))?;
        Ok(Self {
            client,
            endpoint,
            referring_firm: referring_firm.into(),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn form(
        &self,
        request: &QuoteRequest,
    ) -> Form {
        request
            .wire_fields(&self.referring_firm)
            .into_iter()
            .fold(Form::new(), |form, (key, value)| form.text(key, value))
    }
}

#[async_trait]
impl LeadSubmitter for HttpSubmitter {
    /// Sends one POST. The response body is never read; a non-success status
    /// is logged but still counts as delivered.
    async fn submit(&self, request: &QuoteRequest) -> Result<(), SubmitError> {
        let response = self
            .client
            .post(self.endpoint.clone())
            .multipart(self.form(request))
            .send()
            .await
            .map_err(|e| SubmitError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            debug!(%status, "referral submitted");
        } else {
            warn!(%status, endpoint = %self.endpoint, "endpoint answered with non-success status");
        }
        Ok(())
    }
}
