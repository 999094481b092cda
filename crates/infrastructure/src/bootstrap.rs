//! Gateway wiring
//!
//! Builds every adapter from [`AppConfig`] once and hands back a ready
//! [`ResourceGateway`]. Callers share it by `Arc`.

use std::{path::PathBuf, sync::Arc};

use application::{
    RetryPolicy,
    ports::{Clock, SystemClock},
    services::{FetchClient, ResourceGateway},
};
use thiserror::Error;
use tracing::info;

use crate::{
    adapters::OpenMeteoFallbackAdapter, cache::FileCacheStore, config::AppConfig,
    http::ReqwestTransport,
};

/// Wiring failures
#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("Failed to build HTTP client: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to open cache directory: {0}")]
    Cache(#[from] application::CacheError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Assemble the gateway with the system clock
pub async fn build_gateway(config: &AppConfig) -> Result<ResourceGateway, BootstrapError> {
    build_gateway_with_clock(config, Arc::new(SystemClock)).await
}

/// Assemble the gateway with an explicit clock
pub async fn build_gateway_with_clock(
    config: &AppConfig,
    clock: Arc<dyn Clock>,
) -> Result<ResourceGateway, BootstrapError> {
    config.validate().map_err(BootstrapError::Config)?;

    let primary = FetchClient::new(
        Arc::new(ReqwestTransport::new(&config.api.http_client_config())?),
        config.api.base_url.clone(),
        config.retry.clone(),
    );

    // The fallback is already the degraded path; one attempt only.
    let fallback_client = FetchClient::new(
        Arc::new(ReqwestTransport::new(&config.fallback.http_client_config())?),
        config.fallback.base_url.clone(),
        RetryPolicy::single_attempt(),
    );
    let timezone = config.fallback.timezone().map_err(BootstrapError::Config)?;
    let fallback = OpenMeteoFallbackAdapter::new(fallback_client, timezone, Arc::clone(&clock));

    let cache = FileCacheStore::with_clock(PathBuf::from(&config.cache.directory), clock).await?;

    info!(
        api = %config.api.base_url,
        fallback = %config.fallback.base_url,
        cache_dir = %config.cache.directory,
        "Gateway ready"
    );

    Ok(
        ResourceGateway::new(primary, Arc::new(cache), Arc::new(fallback))
            .with_ttl_policy(config.cache.ttl_policy()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::ResourceKind;
    use std::time::Duration;
    use tempfile::TempDir;

    fn config_in(dir: &TempDir) -> AppConfig {
        let mut config = AppConfig::default();
        config.cache.directory = dir.path().join("cache").display().to_string();
        config.cache.news_ttl_secs = 60;
        config
    }

    #[tokio::test]
    async fn builds_gateway_and_creates_cache_directory() {
        let dir = TempDir::new().unwrap();
        let config = config_in(&dir);

        let gateway = build_gateway(&config).await.unwrap();
        assert!(dir.path().join("cache").is_dir());
        assert_eq!(
            gateway.ttl_policy().ttl_for(ResourceKind::News),
            Duration::from_secs(60)
        );
    }

    #[tokio::test]
    async fn invalid_config_is_rejected_before_wiring() {
        let dir = TempDir::new().unwrap();
        let mut config = config_in(&dir);
        config.fallback.timezone = "Nowhere/Special".to_string();

        assert!(matches!(
            build_gateway(&config).await,
            Err(BootstrapError::Config(_))
        ));
        assert!(!dir.path().join("cache").exists());
    }
}
