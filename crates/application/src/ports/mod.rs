//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod cache_port;
mod clock_port;
mod fallback_port;
mod http_transport_port;

#[cfg(test)]
pub use cache_port::MockCacheStore;
pub use cache_port::{CacheStore, CacheStoreExt};
pub use clock_port::{Clock, ManualClock, SystemClock};
#[cfg(test)]
pub use fallback_port::MockFallbackForecastPort;
pub use fallback_port::FallbackForecastPort;
#[cfg(test)]
pub use http_transport_port::MockHttpTransport;
pub use http_transport_port::{HttpResponse, HttpTransport};
