//! Note language value object

use std::fmt;
use std::str::FromStr;

use crate::domain::error::InvalidLanguageError;

/// Interface language: board labels and the language generated notes are
/// written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Polish,
    English,
}

impl Language {
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Polish => "pl",
            Self::English => "en",
        }
    }

    pub const fn label(&self) -> &'static str {
        match self {
            Self::Polish => "Polski",
            Self::English => "English",
        }
    }

    /// Instruction appended to generation requests
    pub const fn instruction(&self) -> &'static str {
        match self {
            Self::Polish => "IMPORTANT: Generate the title and content in Polish language.",
            Self::English => "IMPORTANT: Generate the title and content in English language.",
        }
    }
}

impl FromStr for Language {
    type Err = InvalidLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pl" | "polish" => Ok(Self::Polish),
            "en" | "english" => Ok(Self::English),
            _ => Err(InvalidLanguageError { input: s.to_string() }),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_codes_and_names() {
        assert_eq!("pl".parse::<Language>().unwrap(), Language::Polish);
        assert_eq!("EN".parse::<Language>().unwrap(), Language::English);
        assert_eq!(" english ".parse::<Language>().unwrap(), Language::English);
    }

    #[test]
    fn parse_invalid() {
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn default_is_polish() {
        assert_eq!(Language::default(), Language::Polish);
        assert_eq!(Language::default().to_string(), "pl");
    }

    #[test]
    fn instruction_names_language() {
        assert!(Language::English.instruction().contains("English"));
        assert!(Language::Polish.instruction().contains("Polish"));
    }
}
