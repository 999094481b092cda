//! Fallback forecast port
//!
//! Secondary source for the sunshine and snow forecasts, used when the
//! primary service is degraded.

use async_trait::async_trait;
use domain::entities::{SnowResponse, SunshineResponse};
#[cfg(test)]
use mockall::automock;

use crate::error::FetchError;

/// Port for computing forecasts directly from the weather provider
#[cfg_attr(test, automock)]
#[async_trait]
pub trait FallbackForecastPort: Send + Sync {
    /// Ranked sunshine destinations for the upcoming weekend
    async fn sunshine(&self) -> Result<SunshineResponse, FetchError>;

    /// Ranked ski resorts for the current week
    async fn snow(&self) -> Result<SnowResponse, FetchError>;
}
