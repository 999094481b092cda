//! Primary API settings

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::http::HttpClientConfig;

/// Origin and client settings for the primary SwissInfo API
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiAppConfig {
    /// Base origin, e.g. `https://swissinfo.example.org`
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// TCP connect timeout in seconds (default: 10)
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    /// Whole-request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "http://localhost:8787".to_string()
}

pub(super) const fn default_connect_timeout() -> u64 {
    10
}

pub(super) const fn default_timeout() -> u64 {
    30
}

pub(super) fn default_user_agent() -> String {
    format!("SwissInfo/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ApiAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            connect_timeout_secs: default_connect_timeout(),
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl ApiAppConfig {
    #[must_use]
    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig::default()
            .with_connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_user_agent(&self.user_agent)
    }

    pub fn validate(&self) -> Result<(), String> {
        super::validate_origin(&self.base_url)?;
        if self.connect_timeout_secs == 0 || self.timeout_secs == 0 {
            return Err("timeouts must be greater than zero".to_string());
        }
        if self.user_agent.trim().is_empty() {
            return Err("user_agent must not be empty".to_string());
        }
        Ok(())
    }
}
