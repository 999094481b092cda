//! Supported cities for city-scoped resources

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::errors::DomainError;

/// One of the fixed set of cities the primary API serves
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum City {
    #[default]
    Zurich,
    Basel,
    Bern,
    Lucerne,
    Winterthur,
    StGallen,
    Lugano,
}

impl City {
    /// All supported cities, in display order
    pub const ALL: [Self; 7] = [
        Self::Zurich,
        Self::Basel,
        Self::Bern,
        Self::Lucerne,
        Self::Winterthur,
        Self::StGallen,
        Self::Lugano,
    ];

    /// Identifier used in the `city` query parameter and cache keys
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Zurich => "zurich",
            Self::Basel => "basel",
            Self::Bern => "bern",
            Self::Lucerne => "lucerne",
            Self::Winterthur => "winterthur",
            Self::StGallen => "st-gallen",
            Self::Lugano => "lugano",
        }
    }

    /// Local display name
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Zurich => "Zürich",
            Self::Basel => "Basel",
            Self::Bern => "Bern",
            Self::Lucerne => "Luzern",
            Self::Winterthur => "Winterthur",
            Self::StGallen => "St. Gallen",
            Self::Lugano => "Lugano",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for City {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|city| city.id() == normalized)
            .ok_or_else(|| DomainError::UnknownCity(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_cities_with_unique_ids() {
        let mut ids: Vec<_> = City::ALL.iter().map(|c| c.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 7);
    }

    #[test]
    fn default_city_is_zurich() {
        assert_eq!(City::default(), City::Zurich);
    }

    #[test]
    fn parse_roundtrips_every_id() {
        for city in City::ALL {
            assert_eq!(city.id().parse::<City>(), Ok(city));
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        assert!("geneva".parse::<City>().is_err());
    }

    #[test]
    fn serde_matches_id() {
        for city in City::ALL {
            let json = serde_json::to_string(&city).unwrap();
            assert_eq!(json, format!("\"{}\"", city.id()));
        }
    }
}
