//! Supported content languages

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::errors::DomainError;

/// Locale of a request; selects which localized text fields are shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English (the base field of every localized pair)
    #[default]
    En,
    /// German (the `De`-suffixed field)
    De,
}

impl Language {
    /// All supported languages
    pub const ALL: [Self; 2] = [Self::En, Self::De];

    /// Two-letter code used in the `lang` query parameter and cache keys
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::De => "de",
        }
    }

    /// Pick the text for this language from an English/German pair
    ///
    /// German is used only when requested and present; otherwise the
    /// English text is returned.
    #[must_use]
    pub fn pick<'a>(self, en: &'a str, de: Option<&'a str>) -> &'a str {
        match (self, de) {
            (Self::De, Some(german)) => german,
            _ => en,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Self::En),
            "de" | "german" | "deutsch" => Ok(Self::De),
            _ => Err(DomainError::UnknownLanguage(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_two_letters() {
        assert_eq!(Language::En.code(), "en");
        assert_eq!(Language::De.code(), "de");
    }

    #[test]
    fn pick_prefers_german_when_present() {
        assert_eq!(Language::De.pick("Hello", Some("Hallo")), "Hallo");
    }

    #[test]
    fn pick_falls_back_to_english_when_german_missing() {
        assert_eq!(Language::De.pick("Hello", None), "Hello");
    }

    #[test]
    fn pick_ignores_german_for_english() {
        assert_eq!(Language::En.pick("Hello", Some("Hallo")), "Hello");
    }

    #[test]
    fn parse_accepts_codes_and_names() {
        assert_eq!("de".parse::<Language>(), Ok(Language::De));
        assert_eq!("EN".parse::<Language>(), Ok(Language::En));
        assert_eq!("Deutsch".parse::<Language>(), Ok(Language::De));
    }

    #[test]
    fn parse_rejects_unsupported() {
        assert_eq!(
            "fr".parse::<Language>(),
            Err(DomainError::UnknownLanguage("fr".to_string()))
        );
    }

    #[test]
    fn serde_uses_lowercase_codes() {
        assert_eq!(serde_json::to_string(&Language::De).unwrap(), "\"de\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
    }
}
