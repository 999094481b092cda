//! Property-based tests for forecast ranking

use domain::entities::{SnowResort, SunshineDestination};
use integration_weather::{rank_destinations, rank_resorts};
use proptest::prelude::*;

fn destination(index: usize, hours: f64, is_baseline: bool) -> SunshineDestination {
    SunshineDestination {
        id: format!("d{index}"),
        name: format!("D{index}"),
        name_de: None,
        region: "ZH".to_string(),
        latitude: 47.0,
        longitude: 8.0,
        drive_time_minutes: 30,
        is_baseline,
        forecast: Vec::new(),
        total_sunshine_hours: hours,
    }
}

fn resort(index: usize, cm: f64) -> SnowResort {
    SnowResort {
        id: format!("r{index}"),
        name: format!("R{index}"),
        name_de: None,
        region: "VS".to_string(),
        latitude: 46.0,
        longitude: 7.5,
        altitude_m: 1500,
        snow_depth_cm: None,
        forecast: Vec::new(),
        total_snowfall_cm: cm,
    }
}

proptest! {
    #[test]
    fn baselines_lead_and_rest_descend(
        entries in prop::collection::vec((0.0f64..40.0, any::<bool>()), 0..12)
    ) {
        let mut destinations: Vec<_> = entries
            .iter()
            .enumerate()
            .map(|(i, (hours, baseline))| destination(i, *hours, *baseline))
            .collect();
        rank_destinations(&mut destinations);

        let first_regular = destinations.iter().position(|d| !d.is_baseline).unwrap_or(destinations.len());
        prop_assert!(destinations[first_regular..].iter().all(|d| !d.is_baseline));
        for pair in destinations[first_regular..].windows(2) {
            prop_assert!(pair[0].total_sunshine_hours >= pair[1].total_sunshine_hours);
        }
    }

    #[test]
    fn resorts_descend_and_ties_keep_input_order(
        totals in prop::collection::vec(prop_oneof![Just(0.0f64), Just(5.0), 0.0f64..80.0], 0..12)
    ) {
        let mut resorts: Vec<_> = totals.iter().enumerate().map(|(i, cm)| resort(i, *cm)).collect();
        rank_resorts(&mut resorts);

        for pair in resorts.windows(2) {
            prop_assert!(pair[0].total_snowfall_cm >= pair[1].total_snowfall_cm);
            if (pair[0].total_snowfall_cm - pair[1].total_snowfall_cm).abs() < f64::EPSILON {
                let a: usize = pair[0].id[1..].parse().unwrap();
                let b: usize = pair[1].id[1..].parse().unwrap();
                prop_assert!(a < b);
            }
        }
    }
}
