//! Port implementations backed by external services

mod open_meteo_fallback;

pub use open_meteo_fallback::OpenMeteoFallbackAdapter;
