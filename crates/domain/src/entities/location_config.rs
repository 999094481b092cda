//! Static location configuration for the fallback weather provider

use serde::{Deserialize, Serialize};

use crate::{errors::DomainError, value_objects::GeoLocation};

/// A sunshine destination to forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SunshineLocation {
    pub id: String,
    pub name: String,
    pub name_de: Option<String>,
    pub region: String,
    pub location: GeoLocation,
    pub drive_time_minutes: u32,
    pub is_baseline: bool,
}

impl SunshineLocation {
    /// Create a destination, validating its coordinates
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        region: impl Into<String>,
        latitude: f64,
        longitude: f64,
        drive_time_minutes: u32,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id: id.into(),
            name: name.into(),
            name_de: None,
            region: region.into(),
            location: GeoLocation::new(latitude, longitude)?,
            drive_time_minutes,
            is_baseline: false,
        })
    }

    #[must_use]
    pub fn with_name_de(mut self, name_de: impl Into<String>) -> Self {
        self.name_de = Some(name_de.into());
        self
    }

    /// Mark as the reference location
    #[must_use]
    pub const fn as_baseline(mut self) -> Self {
        self.is_baseline = true;
        self
    }
}

/// A ski resort to forecast
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnowLocation {
    pub id: String,
    pub name: String,
    pub name_de: Option<String>,
    pub region: String,
    pub location: GeoLocation,
    /// Village altitude in metres
    pub altitude_m: u32,
}

impl SnowLocation {
    /// Create a resort, validating its coordinates
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        region: impl Into<String>,
        latitude: f64,
        longitude: f64,
        altitude_m: u32,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            id: id.into(),
            name: name.into(),
            name_de: None,
            region: region.into(),
            location: GeoLocation::new(latitude, longitude)?,
            altitude_m,
        })
    }

    #[must_use]
    pub fn with_name_de(mut self, name_de: impl Into<String>) -> Self {
        self.name_de = Some(name_de.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(SunshineLocation::new("x", "X", "ZH", 91.0, 8.0, 0).is_err());
        assert!(SnowLocation::new("y", "Y", "VS", 46.0, 181.0, 1000).is_err());
    }

    #[test]
    fn builder_flags() {
        let location = SunshineLocation::new("zurich", "Zurich", "ZH", 47.37, 8.54, 0)
            .unwrap()
            .with_name_de("Zürich")
            .as_baseline();
        assert!(location.is_baseline);
        assert_eq!(location.name_de.as_deref(), Some("Zürich"));
    }
}
