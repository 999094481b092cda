//! Logical data categories served by the primary API

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, time::Duration};

use crate::errors::DomainError;

/// One of the six resource kinds the gateway resolves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    News,
    Activities,
    Lunch,
    Weekend,
    Sunshine,
    Snow,
}

impl ResourceKind {
    /// All resource kinds
    pub const ALL: [Self; 6] = [
        Self::News,
        Self::Activities,
        Self::Lunch,
        Self::Weekend,
        Self::Sunshine,
        Self::Snow,
    ];

    /// Lowercase name, also the cache key prefix
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::News => "news",
            Self::Activities => "activities",
            Self::Lunch => "lunch",
            Self::Weekend => "weekend",
            Self::Sunshine => "sunshine",
            Self::Snow => "snow",
        }
    }

    /// Endpoint path on the primary API
    #[must_use]
    pub const fn endpoint_path(self) -> &'static str {
        match self {
            Self::News => "/",
            Self::Activities => "/activities",
            Self::Lunch => "/lunch",
            Self::Weekend => "/weekend",
            Self::Sunshine => "/sunshine",
            Self::Snow => "/snow",
        }
    }

    /// Whether requests carry a `city` selector
    #[must_use]
    pub const fn is_city_scoped(self) -> bool {
        !matches!(self, Self::Sunshine | Self::Snow)
    }

    /// Whether the primary API honours `refresh=true` for this kind
    #[must_use]
    pub const fn supports_server_refresh(self) -> bool {
        matches!(self, Self::News | Self::Sunshine | Self::Snow)
    }

    /// Whether a secondary (fallback) data source exists
    #[must_use]
    pub const fn has_fallback(self) -> bool {
        matches!(self, Self::Sunshine | Self::Snow)
    }

    /// Default cache lifetime for this kind
    #[must_use]
    pub const fn default_ttl(self) -> Duration {
        match self {
            Self::News | Self::Activities => Duration::from_secs(2 * 60 * 60),
            Self::Weekend => Duration::from_secs(60 * 60),
            Self::Lunch | Self::Sunshine | Self::Snow => Duration::from_secs(30 * 60),
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| DomainError::UnknownResourceKind(s.to_string()))
    }
}
