//! Domain entities - Canonical responses and fallback inputs

mod activities;
mod location_config;
mod lunch;
mod news;
mod resource_payload;
mod snow;
mod sunshine;
mod weekend;

pub use activities::{ActivitiesResponse, Activity};
pub use location_config::{SnowLocation, SunshineLocation};
pub use lunch::{Dish, LunchResponse, Restaurant};
pub use news::{NewsArticle, NewsResponse};
pub use resource_payload::ResourcePayload;
pub use snow::{SnowDay, SnowResort, SnowResponse};
pub use sunshine::{SunshineDay, SunshineDestination, SunshineResponse};
pub use weekend::{WeekendHighlight, WeekendResponse};
