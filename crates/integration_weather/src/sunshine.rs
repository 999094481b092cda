//! Sunshine destinations from Open-Meteo daily series

use chrono::{DateTime, Utc};
use domain::entities::{SunshineDay, SunshineDestination, SunshineLocation, SunshineResponse};
use tracing::{debug, warn};

use crate::models::{LocationSeries, OneOrMany, aligned, value_or_zero};
use crate::window::WeekendWindow;

const SECONDS_PER_HOUR: f64 = 3600.0;

/// Convert one location, or `None` when a required series is missing or misaligned
fn destination(location: &SunshineLocation, series: &LocationSeries) -> Option<SunshineDestination> {
    let daily = series.daily.as_ref()?;
    let dates = daily.time.as_ref()?;
    let len = dates.len();

    let codes = aligned(daily.weather_code.as_ref(), len)?;
    let temp_max = aligned(daily.temperature_2m_max.as_ref(), len)?;
    let temp_min = aligned(daily.temperature_2m_min.as_ref(), len)?;
    let sunshine = aligned(daily.sunshine_duration.as_ref(), len)?;
    let precipitation = aligned(daily.precipitation_sum.as_ref(), len)?;

    let forecast: Vec<SunshineDay> = dates
        .iter()
        .enumerate()
        .map(|(i, date)| SunshineDay {
            date: date.clone(),
            weather_code: codes[i].unwrap_or(0),
            temp_max: value_or_zero(temp_max, i),
            temp_min: value_or_zero(temp_min, i),
            sunshine_hours: value_or_zero(sunshine, i) / SECONDS_PER_HOUR,
            precipitation_mm: value_or_zero(precipitation, i),
        })
        .collect();
    let total_sunshine_hours = forecast.iter().map(|day| day.sunshine_hours).sum();

    Some(SunshineDestination {
        id: location.id.clone(),
        name: location.name.clone(),
        name_de: location.name_de.clone(),
        region: location.region.clone(),
        latitude: location.location.latitude(),
        longitude: location.location.longitude(),
        drive_time_minutes: location.drive_time_minutes,
        is_baseline: location.is_baseline,
        forecast,
        total_sunshine_hours,
    })
}

/// Baseline first, then descending total sunshine; ties keep input order
pub fn rank_destinations(destinations: &mut [SunshineDestination]) {
    destinations.sort_by(|a, b| {
        b.is_baseline
            .cmp(&a.is_baseline)
            .then_with(|| b.total_sunshine_hours.total_cmp(&a.total_sunshine_hours))
    });
}

/// Build the ranked response; series are matched to `locations` by position
#[must_use]
pub fn sunshine_response(
    locations: &[SunshineLocation],
    body: OneOrMany<LocationSeries>,
    window: &WeekendWindow,
    now: DateTime<Utc>,
) -> SunshineResponse {
    let series = body.into_vec();
    if series.len() != locations.len() {
        warn!(
            expected = locations.len(),
            received = series.len(),
            "Provider returned a different number of locations"
        );
    }

    let mut destinations: Vec<SunshineDestination> = locations
        .iter()
        .zip(series.iter())
        .filter_map(|(location, series)| {
            let converted = destination(location, series);
            if converted.is_none() {
                warn!(location = %location.id, "Skipping location with missing or misaligned series");
            }
            converted
        })
        .collect();
    rank_destinations(&mut destinations);
    debug!(destinations = destinations.len(), "Sunshine ranking built");

    let (friday, saturday, sunday) = window.labels();
    SunshineResponse {
        destinations,
        friday,
        saturday,
        sunday,
        timestamp: now,
    }
}
