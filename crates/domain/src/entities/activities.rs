//! Activity suggestions for a city

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Language;

/// Something to do in the selected city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_de: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description_de: Option<String>,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Free-form price label, e.g. "CHF 25" or "free"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default)]
    pub indoor: bool,
}

impl Activity {
    #[must_use]
    pub fn localized_name(&self, language: Language) -> &str {
        language.pick(&self.name, self.name_de.as_deref())
    }

    #[must_use]
    pub fn localized_description(&self, language: Language) -> &str {
        language.pick(&self.description, self.description_de.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitiesResponse {
    pub activities: Vec<Activity>,
    pub timestamp: DateTime<Utc>,
}
