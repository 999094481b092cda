//! Cache directory and TTL settings

use std::time::Duration;

use domain::{ResourceKind, TtlPolicy};
use serde::{Deserialize, Serialize};

/// Cache configuration with per-kind TTLs in seconds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheAppConfig {
    /// Directory holding cache entries; created on startup
    #[serde(default = "default_directory")]
    pub directory: String,

    /// News TTL (default: 2 hours)
    #[serde(default = "default_news_ttl")]
    pub news_ttl_secs: u64,

    /// Activities TTL (default: 2 hours)
    #[serde(default = "default_activities_ttl")]
    pub activities_ttl_secs: u64,

    /// Lunch TTL (default: 30 minutes)
    #[serde(default = "default_lunch_ttl")]
    pub lunch_ttl_secs: u64,

    /// Weekend TTL (default: 1 hour)
    #[serde(default = "default_weekend_ttl")]
    pub weekend_ttl_secs: u64,

    /// Sunshine TTL (default: 30 minutes)
    #[serde(default = "default_sunshine_ttl")]
    pub sunshine_ttl_secs: u64,

    /// Snow TTL (default: 30 minutes)
    #[serde(default = "default_snow_ttl")]
    pub snow_ttl_secs: u64,
}

fn default_directory() -> String {
    ".cache/swissinfo".to_string()
}

const fn default_secs(kind: ResourceKind) -> u64 {
    kind.default_ttl().as_secs()
}

const fn default_news_ttl() -> u64 {
    default_secs(ResourceKind::News)
}

const fn default_activities_ttl() -> u64 {
    default_secs(ResourceKind::Activities)
}

const fn default_lunch_ttl() -> u64 {
    default_secs(ResourceKind::Lunch)
}

const fn default_weekend_ttl() -> u64 {
    default_secs(ResourceKind::Weekend)
}

const fn default_sunshine_ttl() -> u64 {
    default_secs(ResourceKind::Sunshine)
}

const fn default_snow_ttl() -> u64 {
    default_secs(ResourceKind::Snow)
}

impl Default for CacheAppConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            news_ttl_secs: default_news_ttl(),
            activities_ttl_secs: default_activities_ttl(),
            lunch_ttl_secs: default_lunch_ttl(),
            weekend_ttl_secs: default_weekend_ttl(),
            sunshine_ttl_secs: default_sunshine_ttl(),
            snow_ttl_secs: default_snow_ttl(),
        }
    }
}

impl CacheAppConfig {
    const fn secs_for(&self, kind: ResourceKind) -> u64 {
        match kind {
            ResourceKind::News => self.news_ttl_secs,
            ResourceKind::Activities => self.activities_ttl_secs,
            ResourceKind::Lunch => self.lunch_ttl_secs,
            ResourceKind::Weekend => self.weekend_ttl_secs,
            ResourceKind::Sunshine => self.sunshine_ttl_secs,
            ResourceKind::Snow => self.snow_ttl_secs,
        }
    }

    /// TTL policy with the configured overrides applied
    #[must_use]
    pub fn ttl_policy(&self) -> TtlPolicy {
        ResourceKind::ALL
            .iter()
            .fold(TtlPolicy::default(), |policy, kind| {
                policy.with_ttl(*kind, Duration::from_secs(self.secs_for(*kind)))
            })
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.directory.trim().is_empty() {
            return Err("directory must not be empty".to_string());
        }
        if let Some(kind) = ResourceKind::ALL
            .iter()
            .find(|kind| self.secs_for(**kind) == 0)
        {
            return Err(format!("{kind} TTL must be greater than zero"));
        }
        Ok(())
    }
}
