//! TOML configuration for the `SurveyQuote` binary.
//!
//! Every key is optional:
//!
//! ```toml
//! [submit]
//! backend = "http"
//! endpoint = "https://crm.example/contact"
//! referring_firm = "Aston Vaughan"
//!
//! [intro]
//! duration_ms = 3000
//!
//! [log]
//! level = "debug"
//! file = "survey-quote.log"
//! stdout = true
//! ```

use std::{
    fs,
    io,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};
use survey_core::SubmitConfig;
use thiserror::Error;

/// File picked up from the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "survey-quote.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub submit: SubmitConfig,
    pub intro: IntroConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntroConfig {
    /// How long the splash stays up; 0 skips it.
    pub duration_ms: u64,
}

impl IntroConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for IntroConfig {
    fn default() -> Self {
        Self { duration_ms: 3000 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Any `EnvFilter` directive; `None` keeps the start-up filter.
    pub level: Option<String>,
    /// Appends log records to this file when set.
    pub file: Option<PathBuf>,
    pub stdout: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: None,
            file: None,
            stdout: true,
        }
    }
}

impl AppConfig {
    /// Loads configuration.
    ///
    /// An explicit `path` must exist. Without one, [`DEFAULT_CONFIG_FILE`]
    /// in the working directory is used if present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_file(path),
            None => {
                let default = Path::new(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    Self::load_file(default)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub backend: Option<String>,
    pub endpoint: Option<String>,
    pub referring_firm: Option<String>,
    pub no_intro: bool,
    pub log_level: Option<String>,
    pub log_file: Option<PathBuf>,
    pub quiet: bool,
}

impl ConfigOverrides {
    pub fn apply_to(
        self,
        config: &mut AppConfig,
    ) {
        if let Some(backend) = self.backend {
            config.submit.backend = backend;
        }
        if let Some(endpoint) = self.endpoint {
            config.submit.endpoint = Some(endpoint);
        }
        if let Some(firm) = self.referring_firm {
            config.submit.referring_firm = firm;
        }
        if self.no_intro {
            config.intro.duration_ms = 0;
        }
        if let Some(level) = self.log_level {
            config.log.level = Some(level);
        }
        if let Some(file) = self.log_file {
            config.log.file = Some(file);
        }
        if self.quiet {
            config.log.stdout = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn empty_file_gives_defaults() {
        let file = write_config("");

        let config = AppConfig::load(Some(file.path())).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.intro.duration(), Duration::from_secs(3));
        assert!(config.log.stdout);
    }

    #[test]
    fn partial_file_merges_with_defaults() {
        let file = write_config(
            r#"
            [submit]
            endpoint = "https://crm.example/contact"

            [intro]
            duration_ms = 0
            "#,
        );

        let config = AppConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.submit.backend, "http");
        assert_eq!(config.submit.endpoint.as_deref(), Some("https://crm.example/contact"));
        assert_eq!(config.submit.referring_firm, "Aston Vaughan");
        assert_eq!(config.intro.duration(), Duration::ZERO);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");

        let err = AppConfig::load(Some(path.as_path())).unwrap_err();

        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let file = write_config("[submit\nbackend = ");

        let err = AppConfig::load(Some(file.path())).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn overrides_take_precedence() {
        let mut config = AppConfig::default();
        let overrides = ConfigOverrides {
            backend: Some("dry-run".to_string()),
            referring_firm: Some("Hart & Co".to_string()),
            no_intro: true,
            quiet: true,
            ..ConfigOverrides::default()
        };

        overrides.apply_to(&mut config);

        assert_eq!(config.submit.backend, "dry-run");
        assert_eq!(config.submit.endpoint, None);
        assert_eq!(config.submit.referring_firm, "Hart & Co");
        assert_eq!(config.intro.duration_ms, 0);
        assert!(!config.log.stdout);
    }

    #[test]
    fn empty_overrides_change_nothing() {
        let mut config = AppConfig::default();

        ConfigOverrides::default().apply_to(&mut config);

        assert_eq!(config, AppConfig::default());
    }
}
