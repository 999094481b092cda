//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer: the file-backed
//! response cache, the reqwest HTTP transport and the Open-Meteo fallback
//! provider. Also hosts configuration loading, tracing setup and the wiring
//! that assembles a ready-to-use gateway.

pub mod adapters;
pub mod bootstrap;
pub mod cache;
pub mod config;
pub mod http;
pub mod telemetry;

pub use adapters::OpenMeteoFallbackAdapter;
pub use bootstrap::{BootstrapError, build_gateway, build_gateway_with_clock};
pub use cache::{FileCacheStore, sanitize_key};
pub use self::config::{
    ApiAppConfig, AppConfig, CacheAppConfig, ConfigError, FallbackAppConfig, TelemetryAppConfig,
};
pub use http::{HttpClientConfig, ReqwestTransport, X_REQUEST_ID};
pub use telemetry::{TelemetryError, init_tracing};
