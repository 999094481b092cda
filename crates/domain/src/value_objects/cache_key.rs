//! Deterministic cache keys derived from request identity

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{City, Language, ResourceKind};

/// Cache key for the sunshine forecast; bump the suffix to invalidate old entries
pub const SUNSHINE_CACHE_KEY: &str = "sunshine-v2";

/// Cache key for the snow forecast; bump the suffix to invalidate old entries
pub const SNOW_CACHE_KEY: &str = "snow-v2";

/// Storage key for one logical request
///
/// Identical `(kind, city, language)` triples always derive the same key.
/// Only news is keyed by language; the other city-scoped payloads carry both
/// languages and are shared.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheKey(String);

impl CacheKey {
    /// Derive the key for a request
    ///
    /// City-scoped kinds fall back to the default city when `city` is `None`;
    /// sunshine and snow ignore both city and language.
    #[must_use]
    pub fn derive(kind: ResourceKind, city: Option<City>, language: Language) -> Self {
        let city = city.unwrap_or_default();
        let key = match kind {
            ResourceKind::News => format!("news-{}-{}", city.id(), language.code()),
            ResourceKind::Activities | ResourceKind::Lunch | ResourceKind::Weekend => {
                format!("{}-{}", kind.as_str(), city.id())
            },
            ResourceKind::Sunshine => SUNSHINE_CACHE_KEY.to_string(),
            ResourceKind::Snow => SNOW_CACHE_KEY.to_string(),
        };
        Self(key)
    }

    /// Borrow the key text
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CacheKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn news_key_includes_city_and_language() {
        let key = CacheKey::derive(ResourceKind::News, Some(City::Basel), Language::De);
        assert_eq!(key.as_str(), "news-basel-de");
    }

    #[test]
    fn city_scoped_keys_include_city_only() {
        assert_eq!(
            CacheKey::derive(ResourceKind::Lunch, Some(City::StGallen), Language::De).as_str(),
            "lunch-st-gallen"
        );
        assert_eq!(
            CacheKey::derive(ResourceKind::Activities, Some(City::Bern), Language::En).as_str(),
            "activities-bern"
        );
        assert_eq!(
            CacheKey::derive(ResourceKind::Weekend, Some(City::Lugano), Language::En).as_str(),
            "weekend-lugano"
        );
    }

    #[test]
    fn missing_city_uses_default() {
        let key = CacheKey::derive(ResourceKind::News, None, Language::En);
        assert_eq!(key.as_str(), "news-zurich-en");
    }

    #[test]
    fn weather_keys_are_versioned_and_global() {
        let sunshine_en = CacheKey::derive(ResourceKind::Sunshine, None, Language::En);
        let sunshine_de = CacheKey::derive(ResourceKind::Sunshine, Some(City::Bern), Language::De);
        assert_eq!(sunshine_en, sunshine_de);
        assert_eq!(sunshine_en.as_str(), SUNSHINE_CACHE_KEY);
        assert_eq!(
            CacheKey::derive(ResourceKind::Snow, None, Language::De).as_str(),
            SNOW_CACHE_KEY
        );
    }

    #[test]
    fn news_keys_differ_across_city_language_pairs() {
        let mut keys = Vec::new();
        for city in City::ALL {
            for lang in Language::ALL {
                keys.push(CacheKey::derive(ResourceKind::News, Some(city), lang));
            }
        }
        let total = keys.len();
        keys.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        keys.dedup();
        assert_eq!(keys.len(), total);
    }
}
