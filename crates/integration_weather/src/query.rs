//! Open-Meteo request parameters

use domain::entities::{SnowLocation, SunshineLocation};
use domain::value_objects::GeoLocation;

use crate::window::{WeekWindow, WeekendWindow};

/// Path of the forecast endpoint below the API base
pub const FORECAST_PATH: &str = "/forecast";

pub const SUNSHINE_DAILY_FIELDS: &str =
    "weather_code,temperature_2m_max,temperature_2m_min,sunshine_duration,precipitation_sum";

pub const SNOW_DAILY_FIELDS: &str =
    "weather_code,temperature_2m_max,temperature_2m_min,snowfall_sum";

pub const SNOW_HOURLY_FIELDS: &str = "snow_depth";

fn coordinate_params<'a>(
    locations: impl Iterator<Item = &'a GeoLocation> + Clone,
) -> [(&'static str, String); 2] {
    let join = |values: Vec<String>| values.join(",");
    [
        (
            "latitude",
            join(locations.clone().map(|l| l.latitude().to_string()).collect()),
        ),
        (
            "longitude",
            join(locations.map(|l| l.longitude().to_string()).collect()),
        ),
    ]
}

/// One batched request covering every sunshine destination
#[must_use]
pub fn sunshine_query(
    locations: &[SunshineLocation],
    window: &WeekendWindow,
    timezone: &str,
) -> Vec<(&'static str, String)> {
    let mut query = coordinate_params(locations.iter().map(|l| &l.location)).to_vec();
    query.extend([
        ("daily", SUNSHINE_DAILY_FIELDS.to_string()),
        ("timezone", timezone.to_string()),
        ("start_date", window.start_date()),
        ("end_date", window.end_date()),
    ]);
    query
}

/// One batched request covering every ski resort
#[must_use]
pub fn snow_query(
    locations: &[SnowLocation],
    window: &WeekWindow,
    timezone: &str,
) -> Vec<(&'static str, String)> {
    let mut query = coordinate_params(locations.iter().map(|l| &l.location)).to_vec();
    query.extend([
        ("daily", SNOW_DAILY_FIELDS.to_string()),
        ("hourly", SNOW_HOURLY_FIELDS.to_string()),
        ("timezone", timezone.to_string()),
        ("start_date", window.start_date()),
        ("end_date", window.end_date()),
    ]);
    query
}
