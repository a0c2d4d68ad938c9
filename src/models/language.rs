use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    En,
    Hi,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
        }
    }

    pub fn toggle(&self) -> Self {
        match self {
            Self::En => Self::Hi,
            Self::Hi => Self::En,
        }
    }

    /// Picks the English or Hindi variant of a piece of UI text.
    pub fn pick<'a>(&self, en: &'a str, hi: &'a str) -> &'a str {
        match self {
            Self::En => en,
            Self::Hi => hi,
        }
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::En
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "hi" => Ok(Self::Hi),
            _ => Err(format!("invalid language: {}", s)),
        }
    }
}

/// Content that carries English and Hindi text side by side.
pub trait Bilingual {
    fn title_in(&self, lang: Language) -> &str;

    fn description_in(&self, lang: Language) -> &str;

    /// Extra localized text a visitor can search on, such as a location.
    fn extra_text_in(&self, _lang: Language) -> Vec<&str> {
        Vec::new()
    }

    fn category(&self) -> &str {
        ""
    }
}

/// Returns `primary` unless it is blank, in which case `fallback`.
pub fn or_fallback<'a>(primary: &'a str, fallback: &'a str) -> &'a str {
    if primary.trim().is_empty() {
        fallback
    } else {
        primary
    }
}
