//! Open-Meteo fallback settings

use std::time::Duration;

use application::services::FallbackPolicy;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::api::{default_connect_timeout, default_timeout, default_user_agent};
use crate::http::HttpClientConfig;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FallbackAppConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// IANA timezone used for date windows and returned series
    #[serde(default = "default_timezone")]
    pub timezone: String,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// When the CLI switches to the fallback provider
    #[serde(default)]
    pub policy: FallbackPolicy,
}

fn default_base_url() -> String {
    "https://api.open-meteo.com/v1".to_string()
}

fn default_timezone() -> String {
    "Europe/Zurich".to_string()
}

impl Default for FallbackAppConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timezone: default_timezone(),
            connect_timeout_secs: default_connect_timeout(),
            timeout_secs: default_timeout(),
            policy: FallbackPolicy::default(),
        }
    }
}

impl FallbackAppConfig {
    pub fn timezone(&self) -> Result<Tz, String> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| format!("unknown timezone '{}': {e}", self.timezone))
    }

    #[must_use]
    pub fn http_client_config(&self) -> HttpClientConfig {
        HttpClientConfig::default()
            .with_connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_user_agent(default_user_agent())
    }

    pub fn validate(&self) -> Result<(), String> {
        super::validate_origin(&self.base_url)?;
        self.timezone()?;
        if self.connect_timeout_secs == 0 || self.timeout_secs == 0 {
            return Err("timeouts must be greater than zero".to_string());
        }
        Ok(())
    }
}
