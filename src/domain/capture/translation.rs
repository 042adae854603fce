//! Translation targets

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidTranslationLanguageError;

/// Longest title plus content accepted for translation
pub const MAX_TRANSLATION_INPUT_LENGTH: usize = 10_000;

/// Language a note can be translated into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TranslationLanguage {
    Polish,
    #[default]
    English,
    German,
    French,
    Spanish,
}

impl TranslationLanguage {
    pub const ALL: [Self; 5] = [
        Self::English,
        Self::German,
        Self::French,
        Self::Spanish,
        Self::Polish,
    ];

    pub const fn code(&self) -> &'static str {
        match self {
            Self::Polish => "pl",
            Self::English => "en",
            Self::German => "de",
            Self::French => "fr",
            Self::Spanish => "es",
        }
    }

    /// English name, as passed to translation models
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Polish => "Polish",
            Self::English => "English",
            Self::German => "German",
            Self::French => "French",
            Self::Spanish => "Spanish",
        }
    }
}

impl FromStr for TranslationLanguage {
    type Err = InvalidTranslationLanguageError;

    /// Accepts codes, English names and Polish names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pl" | "polish" | "polski" => Ok(Self::Polish),
            "en" | "english" | "angielski" => Ok(Self::English),
            "de" | "german" | "niemiecki" => Ok(Self::German),
            "fr" | "french" | "francuski" => Ok(Self::French),
            "es" | "spanish" | "hiszpański" | "hiszpanski" => Ok(Self::Spanish),
            _ => Err(InvalidTranslationLanguageError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for TranslationLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Translated title and body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    pub title: String,
    pub content: String,
}

impl Translation {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}
