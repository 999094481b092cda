//! News entities

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Language;

/// A single news article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_de: Option<String>,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_de: Option<String>,
    /// Publisher name
    pub source: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_at: Option<DateTime<Utc>>,
}

impl NewsArticle {
    /// Title in the requested language
    #[must_use]
    pub fn localized_title(&self, language: Language) -> &str {
        language.pick(&self.title, self.title_de.as_deref())
    }

    /// Summary in the requested language
    #[must_use]
    pub fn localized_summary(&self, language: Language) -> &str {
        language.pick(&self.summary, self.summary_de.as_deref())
    }
}

/// News for one city and language, in server order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    pub articles: Vec<NewsArticle>,
    pub last_updated: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "articles": [{
                "id": "a1",
                "title": "Tram line extended",
                "titleDe": "Tramlinie verlängert",
                "summary": "The line now reaches Altstetten.",
                "summaryDe": null,
                "source": "NZZ",
                "url": "https://example.ch/a1",
                "publishedAt": "2026-10-16T07:30:00Z"
            }],
            "lastUpdated": "2026-10-16T08:00:00Z"
        }"#
    }

    #[test]
    fn decodes_camel_case_payload() {
        let response: NewsResponse = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(response.articles.len(), 1);
        let article = &response.articles[0];
        assert_eq!(article.title_de.as_deref(), Some("Tramlinie verlängert"));
        assert!(article.summary_de.is_none());
        assert!(article.category.is_none());
        assert!(article.published_at.is_some());
    }

    #[test]
    fn localized_text_prefers_german_when_present() {
        let response: NewsResponse = serde_json::from_str(sample_json()).unwrap();
        let article = &response.articles[0];
        assert_eq!(article.localized_title(Language::De), "Tramlinie verlängert");
        assert_eq!(article.localized_title(Language::En), "Tram line extended");
        // null German summary falls back to English
        assert_eq!(
            article.localized_summary(Language::De),
            "The line now reaches Altstetten."
        );
    }
}
