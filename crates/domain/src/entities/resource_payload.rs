//! Canonical response of any resource kind

use serde::Serialize;

use super::{
    ActivitiesResponse, LunchResponse, NewsResponse, SnowResponse, SunshineResponse,
    WeekendResponse,
};
use crate::value_objects::ResourceKind;

/// Decoded response for one resource kind
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResourcePayload {
    News(NewsResponse),
    Activities(ActivitiesResponse),
    Lunch(LunchResponse),
    Weekend(WeekendResponse),
    Sunshine(SunshineResponse),
    Snow(SnowResponse),
}

impl ResourcePayload {
    /// Decode a JSON body into the shape belonging to `kind`
    pub fn from_json_slice(kind: ResourceKind, bytes: &[u8]) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            ResourceKind::News => Self::News(serde_json::from_slice(bytes)?),
            ResourceKind::Activities => Self::Activities(serde_json::from_slice(bytes)?),
            ResourceKind::Lunch => Self::Lunch(serde_json::from_slice(bytes)?),
            ResourceKind::Weekend => Self::Weekend(serde_json::from_slice(bytes)?),
            ResourceKind::Sunshine => Self::Sunshine(serde_json::from_slice(bytes)?),
            ResourceKind::Snow => Self::Snow(serde_json::from_slice(bytes)?),
        })
    }

    #[must_use]
    pub const fn kind(&self) -> ResourceKind {
        match self {
            Self::News(_) => ResourceKind::News,
            Self::Activities(_) => ResourceKind::Activities,
            Self::Lunch(_) => ResourceKind::Lunch,
            Self::Weekend(_) => ResourceKind::Weekend,
            Self::Sunshine(_) => ResourceKind::Sunshine,
            Self::Snow(_) => ResourceKind::Snow,
        }
    }
}

impl From<NewsResponse> for ResourcePayload {
    fn from(value: NewsResponse) -> Self {
        Self::News(value)
    }
}

impl From<SunshineResponse> for ResourcePayload {
    fn from(value: SunshineResponse) -> Self {
        Self::Sunshine(value)
    }
}

impl From<SnowResponse> for ResourcePayload {
    fn from(value: SnowResponse) -> Self {
        Self::Snow(value)
    }
}
