//! Domain layer for the SwissInfo data core
//!
//! Contains the resource vocabulary (kinds, languages, cities, cache keys,
//! TTL policy), the canonical response entities and domain errors.
//! This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
