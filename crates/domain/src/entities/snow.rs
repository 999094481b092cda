//! Weekly snow forecast for ski resorts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{GeoLocation, Language};

/// Forecast for one day at a resort
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnowDay {
    /// `YYYY-MM-DD`
    pub date: String,
    pub weather_code: i32,
    pub temp_max: f64,
    pub temp_min: f64,
    pub snowfall_cm: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnowResort {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_de: Option<String>,
    pub region: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude_m: u32,
    /// Current snow depth, absent when the provider reports none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snow_depth_cm: Option<f64>,
    pub forecast: Vec<SnowDay>,
    pub total_snowfall_cm: f64,
}

impl SnowResort {
    #[must_use]
    pub fn localized_name(&self, language: Language) -> &str {
        language.pick(&self.name, self.name_de.as_deref())
    }

    #[must_use]
    pub const fn coordinates(&self) -> GeoLocation {
        GeoLocation::new_unchecked(self.latitude, self.longitude)
    }
}

/// Resorts ranked by fresh snow over the current Monday to Sunday week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnowResponse {
    pub resorts: Vec<SnowResort>,
    pub week_start: String,
    pub week_end: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_snow_depth_decodes_as_none() {
        let json = r#"{
            "resorts": [{
                "id": "zermatt",
                "name": "Zermatt",
                "region": "VS",
                "latitude": 46.02,
                "longitude": 7.75,
                "altitudeM": 1620,
                "forecast": [],
                "totalSnowfallCm": 0.0
            }],
            "weekStart": "2026-10-12",
            "weekEnd": "2026-10-18",
            "timestamp": "2026-10-16T08:00:00Z"
        }"#;
        let response: SnowResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.resorts[0].snow_depth_cm, None);
        assert_eq!(response.resorts[0].altitude_m, 1620);
        assert_eq!(response.week_start, "2026-10-12");
    }
}
