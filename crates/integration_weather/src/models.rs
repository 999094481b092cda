//! Raw Open-Meteo response models
//!
//! Every series is optional and every value nullable; validation happens
//! per location during conversion.

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use tracing::{debug, warn};

/// A JSON array of values or a single bare value
///
/// Open-Meteo answers a multi-location request with an array and a
/// single-location request with one object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(items) => items,
            Self::One(item) => vec![item],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Many(items) => items.len(),
            Self::One(_) => 1,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Forecast series for one location
///
/// Any JSON object decodes. A field of the wrong shape reads as missing, so
/// the location is skipped during conversion instead of failing the batch.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "serde_json::Value")]
pub struct LocationSeries {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub daily: Option<DailySeries>,
    pub hourly: Option<HourlySeries>,
}

/// Field-by-field view of one location object
#[derive(Deserialize)]
struct RawLocation {
    #[serde(default, deserialize_with = "lenient")]
    latitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    longitude: Option<f64>,
    #[serde(default, deserialize_with = "lenient")]
    daily: Option<DailySeries>,
    #[serde(default, deserialize_with = "lenient")]
    hourly: Option<HourlySeries>,
}

impl TryFrom<serde_json::Value> for LocationSeries {
    type Error = String;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        if !value.is_object() {
            return Err(format!("expected a location object, got {value}"));
        }
        let raw = RawLocation::deserialize(value).map_err(|e| e.to_string())?;
        if raw.daily.is_none() && raw.hourly.is_none() {
            warn!("Location carries no usable daily or hourly series");
        }
        Ok(Self {
            latitude: raw.latitude,
            longitude: raw.longitude,
            daily: raw.daily,
            hourly: raw.hourly,
        })
    }
}

/// Daily aggregates, one entry per date in `time`
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DailySeries {
    #[serde(default, deserialize_with = "lenient")]
    pub time: Option<Vec<String>>,
    #[serde(default, deserialize_with = "lenient")]
    pub weather_code: Option<Vec<Option<i32>>>,
    #[serde(default, deserialize_with = "lenient")]
    pub temperature_2m_max: Option<Vec<Option<f64>>>,
    #[serde(default, deserialize_with = "lenient")]
    pub temperature_2m_min: Option<Vec<Option<f64>>>,
    /// Seconds of sunshine per day
    #[serde(default, deserialize_with = "lenient")]
    pub sunshine_duration: Option<Vec<Option<f64>>>,
    /// Millimetres
    #[serde(default, deserialize_with = "lenient")]
    pub precipitation_sum: Option<Vec<Option<f64>>>,
    /// Centimetres
    #[serde(default, deserialize_with = "lenient")]
    pub snowfall_sum: Option<Vec<Option<f64>>>,
}

/// Hourly values
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HourlySeries {
    #[serde(default, deserialize_with = "lenient")]
    pub time: Option<Vec<String>>,
    /// Metres
    #[serde(default, deserialize_with = "lenient")]
    pub snow_depth: Option<Vec<Option<f64>>>,
}

/// Decode a field, reading a value of the wrong shape as `None`
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    if value.is_null() {
        return Ok(None);
    }
    match serde_json::from_value(value) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => {
            debug!(error = %e, "Ignoring malformed series field");
            Ok(None)
        },
    }
}

/// Series of exactly `len` entries, or `None` when missing or misaligned
pub(crate) fn aligned<T>(series: Option<&Vec<T>>, len: usize) -> Option<&[T]> {
    series.filter(|values| values.len() == len).map(Vec::as_slice)
}

/// Nullable value, treating `null` as zero
pub(crate) fn value_or_zero(values: &[Option<f64>], index: usize) -> f64 {
    values.get(index).copied().flatten().unwrap_or(0.0)
}
