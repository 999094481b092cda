//! Weekend sunshine forecast

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{GeoLocation, Language};

/// Forecast for one day at a sunshine destination
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SunshineDay {
    /// `YYYY-MM-DD`
    pub date: String,
    /// WMO weather interpretation code
    pub weather_code: i32,
    pub temp_max: f64,
    pub temp_min: f64,
    pub sunshine_hours: f64,
    pub precipitation_mm: f64,
}

/// One destination in the sunshine ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SunshineDestination {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_de: Option<String>,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    pub drive_time_minutes: u32,
    /// Reference location always listed first
    #[serde(default)]
    pub is_baseline: bool,
    pub forecast: Vec<SunshineDay>,
    pub total_sunshine_hours: f64,
}

impl SunshineDestination {
    #[must_use]
    pub fn localized_name(&self, language: Language) -> &str {
        language.pick(&self.name, self.name_de.as_deref())
    }

    #[must_use]
    pub const fn coordinates(&self) -> GeoLocation {
        GeoLocation::new_unchecked(self.latitude, self.longitude)
    }
}

/// Ranked destinations for the upcoming Friday to Sunday
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SunshineResponse {
    pub destinations: Vec<SunshineDestination>,
    pub friday: String,
    pub saturday: String,
    pub sunday: String,
    pub timestamp: DateTime<Utc>,
}

impl SunshineResponse {
    /// The baseline destination, if one is present
    #[must_use]
    pub fn baseline(&self) -> Option<&SunshineDestination> {
        self.destinations.iter().find(|dest| dest.is_baseline)
    }
}
