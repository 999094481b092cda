//! Value Objects - Immutable, identity-less domain primitives

mod cache_key;
mod city;
mod geo_location;
mod language;
mod resource_kind;
mod resource_request;
mod ttl_policy;

pub use cache_key::{CacheKey, SNOW_CACHE_KEY, SUNSHINE_CACHE_KEY};
pub use city::City;
pub use geo_location::GeoLocation;
pub use language::Language;
pub use resource_kind::ResourceKind;
pub use resource_request::ResourceRequest;
pub use ttl_policy::TtlPolicy;
