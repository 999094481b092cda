//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Language code is not one of the supported locales
    #[error("Unsupported language: {0}")]
    UnknownLanguage(String),

    /// City identifier is not one of the supported cities
    #[error("Unsupported city: {0}")]
    UnknownCity(String),

    /// Resource kind name is not recognised
    #[error("Unknown resource kind: {0}")]
    UnknownResourceKind(String),

    /// Coordinates outside the valid latitude/longitude range
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),

    /// Date/time could not be computed or parsed
    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),
}
