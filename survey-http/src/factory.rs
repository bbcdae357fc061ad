use async_trait::async_trait;

use survey_core::submit::{LeadSubmitter, SubmitConfig, SubmitError, SubmitterFactory};

use crate::submitter::HttpSubmitter;

/// [`SubmitterFactory`] for the CRM's HTTP endpoint.
///
/// Register this with a [`survey_core::submit::SubmitterRegistry`] to make
/// the `"http"` backend available:
///
/// ```rust,no_run
/// use survey_core::submit::SubmitterRegistry;
/// use survey_http::HttpSubmitterFactory;
///
/// let mut registry = SubmitterRegistry::new();
/// registry.register(Box::new(HttpSubmitterFactory));
/// ```
pub struct HttpSubmitterFactory;

#[async_trait]
impl SubmitterFactory for HttpSubmitterFactory {
    fn backend_name(&self) -> &'static str {
        "http"
    }

    /// Requires `config.endpoint` to be set to an absolute URL.
    async fn create(
        &self,
        config: &SubmitConfig,
    ) -> Result<Box<dyn LeadSubmitter>, SubmitError> {
        let endpoint = config.endpoint.as_deref().ok_or_else(|| {
            SubmitError::Configuration("the http backend needs an endpoint".to_string())
        })?;
        let submitter = HttpSubmitter::new(endpoint, config.referring_firm.clone())?;
        Ok(Box::new(submitter))
    }
}

#[cfg(test)]
mod tests {
    use survey_core::submit::{SubmitConfig, SubmitError, SubmitterFactory};

    use super::HttpSubmitterFactory;

    #[test]
    fn backend_name_is_http() {
        assert_eq!(HttpSubmitterFactory.backend_name(), "http");
    }

    #[tokio::test]
    async fn create_requires_endpoint() {
        let result = HttpSubmitterFactory.create(&SubmitConfig::default()).await;

        assert!(matches!(result, Err(SubmitError::Configuration(_))));
    }

    #[tokio::test]
    async fn create_rejects_relative_endpoint() {
        let config = SubmitConfig {
            endpoint: Some("/contact".to_string()),
            ..SubmitConfig::default()
        };

        let result = HttpSubmitterFactory.create(&config).await;

        assert!(matches!(result, Err(SubmitError::Configuration(msg)) if msg.contains("/contact")));
    }

    #[tokio::test]
    async fn create_accepts_absolute_endpoint() {
        let config = SubmitConfig {
            endpoint: Some("http://127.0.0.1:9/contact".to_string()),
            ..SubmitConfig::default()
        };

        let result = HttpSubmitterFactory.create(&config).await;

        assert!(result.is_ok());
    }
}
