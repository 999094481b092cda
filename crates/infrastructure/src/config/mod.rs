//! Application configuration
//!
//! Split into focused sub-modules:
//! - `api`: primary service origin and HTTP client settings
//! - `fallback`: Open-Meteo origin, timezone and fallback policy
//! - `cache`: cache directory and per-kind TTL overrides
//! - `telemetry`: log filter and output format
//!
//! Layering: built-in defaults, then an optional TOML file, then
//! `SWISSINFO_*` environment variables (`__` separates nested keys, e.g.
//! `SWISSINFO_CACHE__DIRECTORY`).

mod api;
mod cache;
mod fallback;
mod telemetry;

use std::path::Path;

use application::RetryPolicy;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub use api::ApiAppConfig;
pub use cache::CacheAppConfig;
pub use fallback::FallbackAppConfig;
pub use telemetry::TelemetryAppConfig;

/// Default config file stem, looked up in the working directory
pub const DEFAULT_CONFIG_NAME: &str = "swissinfo";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "SWISSINFO";

/// Configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Root configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiAppConfig,

    #[serde(default)]
    pub fallback: FallbackAppConfig,

    #[serde(default)]
    pub cache: CacheAppConfig,

    /// Retry budget for primary API requests
    #[serde(default)]
    pub retry: RetryPolicy,

    #[serde(default)]
    pub telemetry: TelemetryAppConfig,
}

impl AppConfig {
    /// Load and validate configuration
    ///
    /// Without `path`, `swissinfo.{toml,json,yaml}` in the working directory
    /// is used when present. An explicit `path` must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => ::config::File::from(path).required(true),
            None => ::config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let config: Self = ::config::Config::builder()
            .add_source(file)
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;

        config.validate().map_err(ConfigError::Invalid)?;
        debug!(
            api = %config.api.base_url,
            cache_dir = %config.cache.directory,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Check every section
    pub fn validate(&self) -> Result<(), String> {
        self.api.validate().map_err(|e| format!("api: {e}"))?;
        self.fallback
            .validate()
            .map_err(|e| format!("fallback: {e}"))?;
        self.cache.validate().map_err(|e| format!("cache: {e}"))?;
        self.retry.validate().map_err(|e| format!("retry: {e}"))?;
        self.telemetry
            .validate()
            .map_err(|e| format!("telemetry: {e}"))?;
        Ok(())
    }
}

/// Shared check for configured origins
pub(crate) fn validate_origin(value: &str) -> Result<(), String> {
    let url = url::Url::parse(value).map_err(|e| format!("invalid base_url '{value}': {e}"))?;
    if matches!(url.scheme(), "http" | "https") {
        Ok(())
    } else {
        Err(format!("base_url '{value}' must use http or https"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use application::services::FallbackPolicy;
    use domain::ResourceKind;
    use std::time::Duration;
    use tempfile::TempDir;

    fn write_config(contents: &str) -> (TempDir, std::path::PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("swissinfo.toml");
        std::fs::write(&path, contents).unwrap();
        (dir, path)
    }

    #[test]
    fn defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.retry.max_attempts, 3);
        assert_eq!(config.fallback.policy, FallbackPolicy::OnDegraded);
    }

    #[test]
    fn file_values_override_defaults() {
        let (_dir, path) = write_config(
            r#"
            [api]
            base_url = "https://swissinfo.example.org"
            timeout_secs = 5

            [cache]
            directory = "/tmp/swissinfo-cache"
            lunch_ttl_secs = 600

            [retry]
            max_attempts = 5

            [fallback]
            policy = "on-any-error"
            "#,
        );

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.api.base_url, "https://swissinfo.example.org");
        assert_eq!(config.api.timeout_secs, 5);
        assert_eq!(config.api.connect_timeout_secs, 10);
        assert_eq!(config.cache.directory, "/tmp/swissinfo-cache");
        assert_eq!(
            config.cache.ttl_policy().ttl_for(ResourceKind::Lunch),
            Duration::from_secs(600)
        );
        assert_eq!(config.retry.max_attempts, 5);
        assert_eq!(config.retry.base_delay_ms, 1000);
        assert_eq!(config.fallback.policy, FallbackPolicy::OnAnyError);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.toml");
        assert!(matches!(
            AppConfig::load(Some(&path)),
            Err(ConfigError::Load(_))
        ));
    }

    #[test]
    fn invalid_values_are_rejected() {
        let (_dir, path) = write_config(
            r#"
            [api]
            base_url = "ftp://swissinfo.example.org"
            "#,
        );
        let err = AppConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(ref msg) if msg.starts_with("api:")));
    }

    #[test]
    fn unknown_fallback_policy_fails_to_load() {
        let (_dir, path) = write_config(
            r#"
            [fallback]
            policy = "sometimes"
            "#,
        );
        assert!(matches!(
            AppConfig::load(Some(&path)),
            Err(ConfigError::Load(_))
        ));
    }

    #[test]
    fn config_serializes_back_to_toml() {
        let rendered = toml::to_string(&AppConfig::default()).unwrap();
        assert!(rendered.contains("[cache]"));
        assert!(rendered.contains("policy = \"on-degraded\""));
    }

    #[test]
    fn origin_validation() {
        assert!(validate_origin("http://localhost:8787").is_ok());
        assert!(validate_origin("https://api.open-meteo.com/v1").is_ok());
        assert!(validate_origin("not a url").is_err());
        assert!(validate_origin("file:///etc").is_err());
    }
}
