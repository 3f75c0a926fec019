//! Optional YAML configuration and its merge with the command line.
//!
//! Everything has a built-in default, so the file is only needed to change
//! which restaurants are polled, their order, or the fetch limits.
//!
//! ```yaml
//! sources: [mahini, zau-vegetarian, kozlovna]
//! request_timeout_secs: 20
//! max_concurrent_fetches: 4
//! url_overrides:
//!   kozlovna: https://www.kozlovna.cz/poledni-menu/
//! ```

use crate::aggregate::AggregateOptions;
use crate::cli::Cli;
use crate::error::ConfigError;
use crate::scrapers::Source;
use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;
use tokio::fs;
use tracing::{info, instrument};
use url::Url;

pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_MAX_CONCURRENT_FETCHES: usize = 4;

/// Contents of the config file. Missing keys fall back to defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Restaurants to poll, in poll order.
    pub sources: Option<Vec<Source>>,
    pub request_timeout_secs: Option<u64>,
    pub max_concurrent_fetches: Option<usize>,
    pub url_overrides: HashMap<Source, String>,
}

impl Config {
    #[instrument(level = "info")]
    pub async fn load(path: &str) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).await.map_err(|error| ConfigError::Io {
            path: path.to_string(),
            error,
        })?;
        let config = Self::from_yaml(&text).map_err(|error| ConfigError::Yaml {
            path: path.to_string(),
            error,
        })?;
        info!("Loaded configuration");
        Ok(config)
    }

    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        // An empty file is an empty mapping, not an error.
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }
}

/// Effective settings for one run: file values overridden by CLI flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub sources: Vec<Source>,
    pub request_timeout: Duration,
    pub max_concurrent_fetches: usize,
    pub fail_fast: bool,
    pub url_overrides: HashMap<Source, String>,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: Config) -> Result<Self, ConfigError> {
        let sources = if cli.sources.is_empty() {
            config.sources.unwrap_or_else(|| Source::DEFAULT.to_vec())
        } else {
            cli.sources.clone()
        };
        if sources.is_empty() {
            return Err(ConfigError::Invalid {
                message: "at least one source must be configured".to_string(),
            });
        }

        let timeout_secs = cli
            .timeout_secs
            .or(config.request_timeout_secs)
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                message: "request timeout must be at least one second".to_string(),
            });
        }

        let max_concurrent_fetches = cli
            .concurrency
            .or(config.max_concurrent_fetches)
            .unwrap_or(DEFAULT_MAX_CONCURRENT_FETCHES);
        if max_concurrent_fetches == 0 {
            return Err(ConfigError::Invalid {
                message: "max_concurrent_fetches must be at least 1".to_string(),
            });
        }

        for (source, url) in &config.url_overrides {
            if source.menu_url().is_none() {
                return Err(ConfigError::Invalid {
                    message: format!("{} has a static menu and takes no url override", source.name()),
                });
            }
            if Url::parse(url).is_err() {
                return Err(ConfigError::Invalid {
                    message: format!("url override for {} is not a URL: {url}", source.name()),
                });
            }
        }

        Ok(Self {
            sources,
            request_timeout: Duration::from_secs(timeout_secs),
            max_concurrent_fetches,
            fail_fast: cli.fail_fast,
            url_overrides: config.url_overrides,
        })
    }

    pub fn aggregate_options(&self) -> AggregateOptions {
        AggregateOptions {
            max_concurrent_fetches: self.max_concurrent_fetches,
            fail_fast: self.fail_fast,
            url_overrides: self.url_overrides.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["lunch_poll"];
        argv.extend_from_slice(args);
        Cli::parse_from(argv)
    }

    #[test]
    fn test_defaults_without_file() {
        let settings = Settings::resolve(&cli(&[]), Config::default()).unwrap();
        assert_eq!(settings.sources, Source::DEFAULT.to_vec());
        assert_eq!(settings.request_timeout, Duration::from_secs(20));
        assert_eq!(settings.max_concurrent_fetches, 4);
        assert!(!settings.fail_fast);
    }

    #[test]
    fn test_config_file_values() {
        let config = Config::from_yaml(
            r#"
sources: [pinta, olive, rebel-wings]
request_timeout_secs: 5
max_concurrent_fetches: 1
url_overrides:
  pinta: http://localhost:8080/pinta
"#,
        )
        .unwrap();
        let settings = Settings::resolve(&cli(&[]), config).unwrap();
        assert_eq!(
            settings.sources,
            vec![Source::Pinta, Source::Olive, Source::RebelWings]
        );
        assert_eq!(settings.request_timeout, Duration::from_secs(5));
        assert_eq!(settings.max_concurrent_fetches, 1);
        assert_eq!(
            settings.aggregate_options().url_overrides[&Source::Pinta],
            "http://localhost:8080/pinta"
        );
    }

    #[test]
    fn test_cli_overrides_file() {
        let config = Config::from_yaml("sources: [pinta]\nrequest_timeout_secs: 5\n").unwrap();
        let settings = Settings::resolve(
            &cli(&["--source", "kozlovna,u-holise", "--timeout-secs", "7", "--fail-fast"]),
            config,
        )
        .unwrap();
        assert_eq!(settings.sources, vec![Source::Kozlovna, Source::UHolise]);
        assert_eq!(settings.request_timeout, Duration::from_secs(7));
        assert!(settings.fail_fast);
    }

    #[test]
    fn test_unknown_source_is_rejected() {
        assert!(Config::from_yaml("sources: [u-fleku]").is_err());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        assert!(Config::from_yaml("timeout: 3").is_err());
    }

    #[test]
    fn test_empty_file_is_default() {
        let config = Config::from_yaml("  \n").unwrap();
        assert!(config.sources.is_none());
    }

    #[test]
    fn test_invalid_values() {
        let config = Config::from_yaml("sources: []").unwrap();
        assert!(Settings::resolve(&cli(&[]), config).is_err());

        let config = Config::from_yaml("max_concurrent_fetches: 0").unwrap();
        assert!(Settings::resolve(&cli(&[]), config).is_err());

        let config = Config::from_yaml("url_overrides:\n  pinta: not a url\n").unwrap();
        assert!(matches!(
            Settings::resolve(&cli(&[]), config),
            Err(ConfigError::Invalid { .. })
        ));
    }

    #[test]
    fn test_url_override_for_static_source_is_rejected() {
        let config =
            Config::from_yaml("url_overrides:\n  zau-vegetarian: http://127.0.0.1:9/zau\n").unwrap();
        assert!(matches!(
            Settings::resolve(&cli(&[]), config),
            Err(ConfigError::Invalid { message }) if message.contains("Zau Vegetarian")
        ));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = Config::load("/nonexistent/lunch_poll.yaml").await.unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lunch_poll.yaml");
        std::fs::write(&path, "sources: [zau-vegetarian]\n").unwrap();

        let config = Config::load(path.to_str().unwrap()).await.unwrap();
        assert_eq!(config.sources, Some(vec![Source::ZauVegetarian]));
    }
}
