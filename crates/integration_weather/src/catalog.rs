//! Built-in fallback locations

use domain::entities::{SnowLocation, SunshineLocation};
use domain::value_objects::GeoLocation;

// (id, name, German name, region, latitude, longitude, drive time from Zurich in minutes)
const SUNSHINE_DESTINATIONS: &[(&str, &str, Option<&str>, &str, f64, f64, u32)] = &[
    ("zurich", "Zurich", Some("Zürich"), "ZH", 47.3769, 8.5417, 0),
    ("basel", "Basel", None, "BS", 47.5596, 7.5886, 60),
    ("lucerne", "Lucerne", Some("Luzern"), "LU", 47.0502, 8.3093, 45),
    ("chur", "Chur", None, "GR", 46.8508, 9.5320, 75),
    ("interlaken", "Interlaken", None, "BE", 46.6863, 7.8632, 105),
    ("lugano", "Lugano", None, "TI", 46.0037, 8.9511, 150),
    ("locarno", "Locarno", None, "TI", 46.1709, 8.7995, 165),
    ("st-moritz", "St. Moritz", None, "GR", 46.4908, 9.8355, 150),
    ("montreux", "Montreux", None, "VD", 46.4312, 6.9107, 150),
    ("sion", "Sion", Some("Sitten"), "VS", 46.2331, 7.3606, 160),
    ("geneva", "Geneva", Some("Genf"), "GE", 46.2044, 6.1432, 170),
];

// (id, name, German name, region, latitude, longitude, altitude in metres)
const SKI_RESORTS: &[(&str, &str, Option<&str>, &str, f64, f64, u32)] = &[
    ("zermatt", "Zermatt", None, "VS", 46.0207, 7.7491, 1608),
    ("saas-fee", "Saas-Fee", None, "VS", 46.1081, 7.9280, 1800),
    ("verbier", "Verbier", None, "VS", 46.0961, 7.2286, 1500),
    ("st-moritz", "St. Moritz", None, "GR", 46.4908, 9.8355, 1822),
    ("davos", "Davos", None, "GR", 46.8027, 9.8360, 1560),
    ("arosa", "Arosa", None, "GR", 46.7833, 9.6790, 1775),
    ("laax", "Laax", None, "GR", 46.8065, 9.2580, 1100),
    ("andermatt", "Andermatt", None, "UR", 46.6356, 8.5939, 1444),
    ("engelberg", "Engelberg", None, "OW", 46.8206, 8.4064, 1000),
    ("grindelwald", "Grindelwald", None, "BE", 46.6242, 8.0414, 1034),
];

/// Sunshine destinations, Zurich as the baseline
#[must_use]
pub fn default_sunshine_locations() -> Vec<SunshineLocation> {
    SUNSHINE_DESTINATIONS
        .iter()
        .map(
            |&(id, name, name_de, region, lat, lon, drive)| SunshineLocation {
                id: id.to_string(),
                name: name.to_string(),
                name_de: name_de.map(str::to_string),
                region: region.to_string(),
                location: GeoLocation::new_unchecked(lat, lon),
                drive_time_minutes: drive,
                is_baseline: id == "zurich",
            },
        )
        .collect()
}

/// Swiss ski resorts
#[must_use]
pub fn default_snow_locations() -> Vec<SnowLocation> {
    SKI_RESORTS
        .iter()
        .map(|&(id, name, name_de, region, lat, lon, altitude)| SnowLocation {
            id: id.to_string(),
            name: name.to_string(),
            name_de: name_de.map(str::to_string),
            region: region.to_string(),
            location: GeoLocation::new_unchecked(lat, lon),
            altitude_m: altitude,
        })
        .collect()
}
