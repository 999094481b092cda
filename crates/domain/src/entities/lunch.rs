//! Lunch menus

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Language;

/// One dish on a daily menu
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dish {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name_de: Option<String>,
    /// Price in CHF
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price_chf: Option<f64>,
    #[serde(default)]
    pub vegetarian: bool,
}

impl Dish {
    #[must_use]
    pub fn localized_name(&self, language: Language) -> &str {
        language.pick(&self.name, self.name_de.as_deref())
    }

    /// Price formatted the way Swiss menus print it
    #[must_use]
    pub fn price_display(&self) -> Option<String> {
        self.price_chf.map(|price| format!("CHF {price:.2}"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub cuisine: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default)]
    pub dishes: Vec<Dish>,
}

impl Restaurant {
    /// Whether any dish on today's menu is vegetarian
    #[must_use]
    pub fn has_vegetarian_option(&self) -> bool {
        self.dishes.iter().any(|dish| dish.vegetarian)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LunchResponse {
    pub restaurants: Vec<Restaurant>,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_menu_with_missing_optionals() {
        let json = r#"{
            "restaurants": [{
                "id": "r1",
                "name": "Hiltl",
                "cuisine": "vegetarian",
                "dishes": [
                    {"name": "Curry", "priceChf": 24.5, "vegetarian": true},
                    {"name": "Soup", "nameDe": "Suppe"}
                ]
            }],
            "timestamp": "2026-10-16T10:00:00Z"
        }"#;
        let response: LunchResponse = serde_json::from_str(json).unwrap();
        let restaurant = &response.restaurants[0];
        assert!(restaurant.has_vegetarian_option());
        assert_eq!(
            restaurant.dishes[0].price_display().as_deref(),
            Some("CHF 24.50")
        );
        assert_eq!(restaurant.dishes[1].price_display(), None);
        assert_eq!(restaurant.dishes[1].localized_name(Language::De), "Suppe");
    }
}
