//! Open-Meteo weather integration
//!
//! Turns multi-location Open-Meteo forecasts (<https://open-meteo.com>) into
//! the canonical sunshine and snow responses. This crate performs no I/O;
//! callers fetch [`OneOrMany<LocationSeries>`] bodies and hand them in.

pub mod catalog;
pub mod models;
pub mod query;
pub mod snow;
pub mod sunshine;
pub mod window;

pub use catalog::{default_snow_locations, default_sunshine_locations};
pub use models::{DailySeries, HourlySeries, LocationSeries, OneOrMany};
pub use query::{FORECAST_PATH, snow_query, sunshine_query};
pub use snow::{rank_resorts, snow_response};
pub use sunshine::{rank_destinations, sunshine_response};
pub use window::{WeekWindow, WeekendWindow, today_in};
