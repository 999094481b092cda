//! Per-kind cache lifetimes

use std::time::Duration;

use super::ResourceKind;

/// Maps every resource kind to the maximum age of a cached response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TtlPolicy {
    news: Duration,
    activities: Duration,
    lunch: Duration,
    weekend: Duration,
    sunshine: Duration,
    snow: Duration,
}

impl Default for TtlPolicy {
    fn default() -> Self {
        Self {
            news: ResourceKind::News.default_ttl(),
            activities: ResourceKind::Activities.default_ttl(),
            lunch: ResourceKind::Lunch.default_ttl(),
            weekend: ResourceKind::Weekend.default_ttl(),
            sunshine: ResourceKind::Sunshine.default_ttl(),
            snow: ResourceKind::Snow.default_ttl(),
        }
    }
}

impl TtlPolicy {
    /// TTL for a resource kind
    #[must_use]
    pub const fn ttl_for(&self, kind: ResourceKind) -> Duration {
        match kind {
            ResourceKind::News => self.news,
            ResourceKind::Activities => self.activities,
            ResourceKind::Lunch => self.lunch,
            ResourceKind::Weekend => self.weekend,
            ResourceKind::Sunshine => self.sunshine,
            ResourceKind::Snow => self.snow,
        }
    }

    /// Replace the TTL of one kind
    #[must_use]
    pub const fn with_ttl(mut self, kind: ResourceKind, ttl: Duration) -> Self {
        match kind {
            ResourceKind::News => self.news = ttl,
            ResourceKind::Activities => self.activities = ttl,
            ResourceKind::Lunch => self.lunch = ttl,
            ResourceKind::Weekend => self.weekend = ttl,
            ResourceKind::Sunshine => self.sunshine = ttl,
            ResourceKind::Snow => self.snow = ttl,
        }
        self
    }
}
