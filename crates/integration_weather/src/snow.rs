//! Ski resort snowfall from Open-Meteo daily and hourly series

use chrono::{DateTime, Utc};
use domain::entities::{SnowDay, SnowLocation, SnowResort, SnowResponse};
use tracing::{debug, warn};

use crate::models::{LocationSeries, OneOrMany, aligned, value_or_zero};
use crate::window::WeekWindow;

/// Highest hourly snow depth in centimetres, `None` without an hourly series
fn max_depth_cm(series: &LocationSeries) -> Option<f64> {
    let depths = series.hourly.as_ref()?.snow_depth.as_ref()?;
    if depths.is_empty() {
        return None;
    }
    let max_m = depths
        .iter()
        .map(|value| value.unwrap_or(0.0))
        .fold(f64::MIN, f64::max);
    // metres to cm, one decimal
    Some((max_m * 1000.0).round() / 10.0)
}

fn resort(location: &SnowLocation, series: &LocationSeries) -> Option<SnowResort> {
    let daily = series.daily.as_ref()?;
    let dates = daily.time.as_ref()?;
    let len = dates.len();

    let codes = aligned(daily.weather_code.as_ref(), len)?;
    let temp_max = aligned(daily.temperature_2m_max.as_ref(), len)?;
    let temp_min = aligned(daily.temperature_2m_min.as_ref(), len)?;
    let snowfall = aligned(daily.snowfall_sum.as_ref(), len)?;

    let forecast: Vec<SnowDay> = dates
        .iter()
        .enumerate()
        .map(|(i, date)| SnowDay {
            date: date.clone(),
            weather_code: codes[i].unwrap_or(0),
            temp_max: value_or_zero(temp_max, i),
            temp_min: value_or_zero(temp_min, i),
            snowfall_cm: value_or_zero(snowfall, i),
        })
        .collect();
    let total_snowfall_cm = forecast.iter().map(|day| day.snowfall_cm).sum();

    Some(SnowResort {
        id: location.id.clone(),
        name: location.name.clone(),
        name_de: location.name_de.clone(),
        region: location.region.clone(),
        latitude: location.location.latitude(),
        longitude: location.location.longitude(),
        altitude_m: location.altitude_m,
        snow_depth_cm: max_depth_cm(series),
        forecast,
        total_snowfall_cm,
    })
}

/// Descending weekly snowfall; ties keep input order
pub fn rank_resorts(resorts: &mut [SnowResort]) {
    resorts.sort_by(|a, b| b.total_snowfall_cm.total_cmp(&a.total_snowfall_cm));
}

/// Build the ranked response; series are matched to `locations` by position
#[must_use]
pub fn snow_response(
    locations: &[SnowLocation],
    body: OneOrMany<LocationSeries>,
    window: &WeekWindow,
    now: DateTime<Utc>,
) -> SnowResponse {
    let series = body.into_vec();
    if series.len() != locations.len() {
        warn!(
            expected = locations.len(),
            received = series.len(),
            "Provider returned a different number of locations"
        );
    }

    let mut resorts: Vec<SnowResort> = locations
        .iter()
        .zip(series.iter())
        .filter_map(|(location, series)| {
            let converted = resort(location, series);
            if converted.is_none() {
                warn!(location = %location.id, "Skipping resort with missing or misaligned series");
            }
            converted
        })
        .collect();
    rank_resorts(&mut resorts);
    debug!(resorts = resorts.len(), "Snow ranking built");

    SnowResponse {
        resorts,
        week_start: window.start_date(),
        week_end: window.end_date(),
        timestamp: now,
    }
}
