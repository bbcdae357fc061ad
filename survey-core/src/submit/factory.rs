use std::collections::HashMap;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::submitter::{LeadSubmitter, SubmitError};

/// Firm named in every referral unless configured otherwise.
pub const DEFAULT_REFERRING_FIRM: &str = "Aston Vaughan";

/// Backend-agnostic submission configuration.
///
/// `backend` must match the [`SubmitterFactory::backend_name`] of a
/// registered factory.
///
/// | backend   | endpoint                    |
/// |-----------|-----------------------------|
/// | `http`    | required, absolute URL      |
/// | `dry-run` | ignored                     |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitConfig {
    /// Lowercase identifier matching a registered factory (e.g. `"http"`).
    pub backend: String,
    /// Where referrals are posted.
    pub endpoint: Option<String>,
    /// Sent as `referred_by_firm` with every referral.
    pub referring_firm: String,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            backend: "http".to_string(),
            endpoint: None,
            referring_firm: DEFAULT_REFERRING_FIRM.to_string(),
        }
    }
}

/// One implementation per submission backend, registered with a
/// [`SubmitterRegistry`] at startup.
#[async_trait]
pub trait SubmitterFactory: Send + Sync {
    /// Unique, lowercase identifier for this backend.
    fn backend_name(&self) -> &'static str;

    /// Build a ready-to-use submitter from `config`.
    async fn create(&self, config: &SubmitConfig) -> Result<Box<dyn LeadSubmitter>, SubmitError>;
}

/// Registry of [`SubmitterFactory`] instances, keyed by backend name.
pub struct SubmitterRegistry {
    factories: HashMap<&'static str, Box<dyn SubmitterFactory>>,
}

impl SubmitterRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a backend factory, replacing any factory with the same name.
    pub fn register(&mut self, factory: Box<dyn SubmitterFactory>) {
        self.factories.insert(factory.backend_name(), factory);
    }

    /// Names of every registered backend, sorted alphabetically.
    pub fn available_backends(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self.factories.keys().copied().collect();
        names.sort_unstable();
        names
    }

    /// Dispatch to the factory that matches `config.backend`.
    ///
    /// # Errors
    /// * [`SubmitError::Configuration`] when no factory is registered for the
    ///   requested backend.
    /// * Any error the chosen factory itself returns.
    pub async fn create(
        &self,
        config: &SubmitConfig,
    ) -> Result<Box<dyn LeadSubmitter>, SubmitError> {
        let factory = self
            .factories
            .get(config.backend.as_str())
            .ok_or_else(|| {
                SubmitError::Configuration(format!(
                    "unknown backend '{}'; available: {:?}",
                    config.backend,
                    self.available_backends()
                ))
            })?;

        factory.create(config).await
    }
}

impl Default for SubmitterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// tests
// ─────────────────────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;

    use crate::models::QuoteRequest;

    use super::{LeadSubmitter, SubmitConfig, SubmitError, SubmitterFactory, SubmitterRegistry};

    struct StubSubmitter;

    #[async_trait]
    impl LeadSubmitter for StubSubmitter {
        async fn submit(&self, _request: &QuoteRequest) -> Result<(), SubmitError> {
            Ok(())
        }
    }

    // Records whether `create` was reached.
    struct TrackingFactory {
        name: &'static str,
        called: Arc<AtomicBool>,
    }

    #[async_trait]
    impl SubmitterFactory for TrackingFactory {
        fn backend_name(&self) -> &'static str {
            self.name
        }

        async fn create(
            &self,
            _config: &SubmitConfig,
        ) -> Result<Box<dyn LeadSubmitter>, SubmitError> {
            self.called.store(true, Ordering::SeqCst);
            Ok(Box::new(StubSubmitter))
        }
    }

    fn tracking(name: &'static str) -> (Box<dyn SubmitterFactory>, Arc<AtomicBool>) {
        let called = Arc::new(AtomicBool::new(false));
        let factory = TrackingFactory {
            name,
            called: called.clone(),
        };
        (Box::new(factory), called)
    }

    #[test]
    fn default_config_targets_http_without_endpoint() {
        let config = SubmitConfig::default();

        assert_eq!(config.backend, "http");
        assert_eq!(config.endpoint, None);
        assert_eq!(config.referring_firm, "Aston Vaughan");
    }

    #[test]
    fn available_backends_are_sorted() {
        let mut registry = SubmitterRegistry::new();
        registry.register(tracking("http").0);
        registry.register(tracking("dry-run").0);

        assert_eq!(registry.available_backends(), vec!["dry-run", "http"]);
    }

    #[tokio::test]
    async fn create_routes_to_matching_factory() {
        let mut registry = SubmitterRegistry::new();
        let (http, http_called) = tracking("http");
        let (dry, dry_called) = tracking("dry-run");
        registry.register(http);
        registry.register(dry);

        let config = SubmitConfig {
            backend: "dry-run".to_string(),
            ..SubmitConfig::default()
        };
        let submitter = registry.create(&config).await;

        assert!(submitter.is_ok());
        assert!(dry_called.load(Ordering::SeqCst));
        assert!(!http_called.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn create_rejects_unknown_backend() {
        let registry = SubmitterRegistry::new();
        let config = SubmitConfig {
            backend: "smtp".to_string(),
            ..SubmitConfig::default()
        };

        let err = registry.create(&config).await.err();

        assert!(matches!(err, Some(SubmitError::Configuration(msg)) if msg.contains("smtp")));
    }

    #[tokio::test]
    async fn register_replaces_factory_with_same_name() {
        let mut registry = SubmitterRegistry::new();
        let (first, first_called) = tracking("http");
        let (second, second_called) = tracking("http");
        registry.register(first);
        registry.register(second);

        let _ = registry.create(&SubmitConfig::default()).await;

        assert!(!first_called.load(Ordering::SeqCst));
        assert!(second_called.load(Ordering::SeqCst));
    }
}
