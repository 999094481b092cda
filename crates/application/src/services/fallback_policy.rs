//! Caller-level decision whether to use the fallback provider

use std::{fmt, str::FromStr};

use domain::value_objects::ResourceKind;
use serde::{Deserialize, Serialize};

use crate::error::FetchError;

/// When a failed primary fetch should be answered from the fallback provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackPolicy {
    /// Always surface the primary error
    Never,
    /// Rate limiting, 5xx and unreachable server
    #[default]
    OnDegraded,
    /// Any primary failure
    OnAnyError,
}

impl FallbackPolicy {
    /// Whether `error` from a primary fetch of `kind` warrants the fallback
    #[must_use]
    pub const fn should_fall_back(self, kind: ResourceKind, error: &FetchError) -> bool {
        if !kind.has_fallback() {
            return false;
        }
        match self {
            Self::Never => false,
            Self::OnDegraded => error.suggests_fallback(),
            Self::OnAnyError => true,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Never => "never",
            Self::OnDegraded => "on-degraded",
            Self::OnAnyError => "on-any-error",
        }
    }
}

impl fmt::Display for FallbackPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FallbackPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "never" => Ok(Self::Never),
            "on-degraded" | "degraded" => Ok(Self::OnDegraded),
            "on-any-error" | "always" => Ok(Self::OnAnyError),
            other => Err(format!("unknown fallback policy '{other}'")),
        }
    }
}
