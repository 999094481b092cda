//! Logical request for one resource

use serde::{Deserialize, Serialize};

use super::{CacheKey, City, Language, ResourceKind};

/// Identifies what to fetch: kind, locale, optional city and cache bypass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResourceRequest {
    /// Resource kind to resolve
    pub kind: ResourceKind,
    /// Locale of the caller
    pub language: Language,
    /// City selector (ignored for sunshine and snow)
    pub city: Option<City>,
    /// Skip the cache read and ask the server to refresh where supported
    pub force_refresh: bool,
}

impl ResourceRequest {
    /// Create a cache-first request without a city selector
    #[must_use]
    pub const fn new(kind: ResourceKind, language: Language) -> Self {
        Self {
            kind,
            language,
            city: None,
            force_refresh: false,
        }
    }

    /// Select a city
    #[must_use]
    pub const fn with_city(mut self, city: City) -> Self {
        self.city = Some(city);
        self
    }

    /// Bypass the cache read
    #[must_use]
    pub const fn refreshing(mut self) -> Self {
        self.force_refresh = true;
        self
    }

    /// City sent to the primary API, `None` for locale-only kinds
    #[must_use]
    pub fn effective_city(&self) -> Option<City> {
        self.kind
            .is_city_scoped()
            .then(|| self.city.unwrap_or_default())
    }

    /// Cache key of this request
    #[must_use]
    pub fn cache_key(&self) -> CacheKey {
        CacheKey::derive(self.kind, self.effective_city(), self.language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_request_is_cache_first() {
        let request = ResourceRequest::new(ResourceKind::Lunch, Language::De);
        assert!(!request.force_refresh);
        assert_eq!(request.city, None);
    }

    #[test]
    fn effective_city_defaults_for_city_scoped_kinds() {
        let request = ResourceRequest::new(ResourceKind::Weekend, Language::En);
        assert_eq!(request.effective_city(), Some(City::Zurich));
    }

    #[test]
    fn effective_city_is_none_for_weather_kinds() {
        let request = ResourceRequest::new(ResourceKind::Snow, Language::En).with_city(City::Bern);
        assert_eq!(request.effective_city(), None);
    }

    #[test]
    fn force_refresh_does_not_change_key() {
        let request = ResourceRequest::new(ResourceKind::News, Language::De).with_city(City::Basel);
        assert_eq!(request.cache_key(), request.refreshing().cache_key());
    }
}
