//! Weekend event highlights

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Language;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekendHighlight {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_de: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_de: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
    /// Human-readable date, e.g. "Sat 18 Oct"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl WeekendHighlight {
    #[must_use]
    pub fn localized_title(&self, language: Language) -> &str {
        language.pick(&self.title, self.title_de.as_deref())
    }

    #[must_use]
    pub fn localized_description(&self, language: Language) -> &str {
        language.pick(&self.description, self.description_de.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekendResponse {
    pub highlights: Vec<WeekendHighlight>,
    pub timestamp: DateTime<Utc>,
}
