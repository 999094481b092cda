//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors surfaced by a fetch against the primary API or the fallback provider
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Request URL could not be constructed
    #[error("Invalid request URL: {0}")]
    InvalidUrl(String),

    /// Response carried no usable status or body
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Non-2xx HTTP status
    #[error("Server returned HTTP {0}")]
    ServerError(u16),

    /// Body did not match the expected schema
    #[error("Failed to decode response: {0}")]
    Decoding(String),

    /// Connection refused, timeout, DNS failure or interrupted body
    #[error("Network error: {0}")]
    TransientTransport(String),

    /// A local precondition failed before any request was sent
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Errors returned by the resource gateway
pub type GatewayError = FetchError;

impl FetchError {
    /// Only transport failures are retried
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::TransientTransport(_))
    }

    /// HTTP status of a server error
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::ServerError(status) => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_rate_limited(&self) -> bool {
        matches!(self, Self::ServerError(429))
    }

    /// Whether the primary service looks degraded (429, 5xx or unreachable)
    #[must_use]
    pub const fn suggests_fallback(&self) -> bool {
        match self {
            Self::ServerError(status) => *status == 429 || *status >= 500,
            Self::TransientTransport(_) => true,
            _ => false,
        }
    }

    /// Short text suitable for display to the user
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::ServerError(429) => {
                "The service is busy right now. Please try again in a moment.".to_string()
            },
            Self::ServerError(status) if *status >= 500 => {
                "The service is temporarily unavailable.".to_string()
            },
            Self::ServerError(status) => format!("The request was rejected (HTTP {status})."),
            Self::TransientTransport(_) => {
                "No connection to the server. Check your network and try again.".to_string()
            },
            Self::Decoding(_) | Self::InvalidResponse(_) => {
                "The server sent data this version cannot read.".to_string()
            },
            Self::InvalidUrl(_) | Self::InvalidData(_) => {
                "The request could not be prepared.".to_string()
            },
        }
    }
}

impl From<DomainError> for FetchError {
    fn from(err: DomainError) -> Self {
        Self::InvalidData(err.to_string())
    }
}

/// Cache store failures; absorbed by the gateway and never surfaced to callers
#[derive(Debug, Error)]
pub enum CacheError {
    /// Filesystem error
    #[error("Cache I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Entry could not be encoded or decoded
    #[error("Cache encoding error: {0}")]
    Encoding(String),
}
