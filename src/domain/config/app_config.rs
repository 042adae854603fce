//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::capture::{Language, TranslationLanguage};
use crate::domain::recording::Duration;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory holding the persisted note collection
    pub data_dir: Option<String>,
    /// Recording ceiling, e.g. "60s" or "2m"
    pub max_duration: Option<String>,
    /// Interface language ("pl" or "en"): board labels and generated notes
    pub language: Option<String>,
    /// Target language code used by `translate` when none is given
    pub translation_language: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            data_dir: None,
            max_duration: Some("60s".to_string()),
            language: Some("pl".to_string()),
            translation_language: Some("en".to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            data_dir: other.data_dir.or(self.data_dir),
            max_duration: other.max_duration.or(self.max_duration),
            language: other.language.or(self.language),
            translation_language: other.translation_language.or(self.translation_language),
        }
    }

    /// Get max_duration as parsed Duration, or default if not set/invalid
    pub fn max_duration_or_default(&self) -> Duration {
        self.max_duration
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_else(Duration::default_max_duration)
    }

    /// Get language as parsed Language, or default if not set/invalid
    pub fn language_or_default(&self) -> Language {
        self.language
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    pub fn translation_language_or_default(&self) -> TranslationLanguage {
        self.translation_language
            .as_ref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    }

    /// Configured data directory, if any
    pub fn data_dir(&self) -> Option<PathBuf> {
        self.data_dir
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert!(config.data_dir.is_none());
        assert_eq!(config.max_duration, Some("60s".to_string()));
        assert_eq!(config.language, Some("pl".to_string()));
    }

    #[test]
    fn empty_has_all_none() {
        let config = AppConfig::empty();
        assert!(config.data_dir.is_none());
        assert!(config.max_duration.is_none());
        assert!(config.language.is_none());
        assert!(config.translation_language.is_none());
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            data_dir: Some("/base".to_string()),
            max_duration: Some("30s".to_string()),
            language: Some("pl".to_string()),
            translation_language: Some("de".to_string()),
        };
        let other = AppConfig {
            data_dir: None,
            max_duration: Some("2m".to_string()),
            language: Some("en".to_string()),
            translation_language: None,
        };

        let merged = base.merge(other);

        assert_eq!(merged.data_dir, Some("/base".to_string()));
        assert_eq!(merged.max_duration, Some("2m".to_string()));
        assert_eq!(merged.language, Some("en".to_string()));
        assert_eq!(merged.translation_language, Some("de".to_string()));
    }

    #[test]
    fn max_duration_or_default_parses() {
        let config = AppConfig {
            max_duration: Some("90s".to_string()),
            ..Default::default()
        };
        assert_eq!(config.max_duration_or_default().as_secs(), 90);
    }

    #[test]
    fn max_duration_or_default_uses_default_on_invalid() {
        let config = AppConfig {
            max_duration: Some("soon".to_string()),
            ..Default::default()
        };
        assert_eq!(config.max_duration_or_default().as_secs(), 60);
    }

    #[test]
    fn language_or_default() {
        assert_eq!(AppConfig::empty().language_or_default(), Language::Polish);
        let config = AppConfig {
            language: Some("en".to_string()),
            ..Default::default()
        };
        assert_eq!(config.language_or_default(), Language::English);
    }

    #[test]
    fn translation_language_or_default() {
        assert_eq!(
            AppConfig::empty().translation_language_or_default(),
            TranslationLanguage::English
        );
        let config = AppConfig {
            translation_language: Some("fr".to_string()),
            ..Default::default()
        };
        assert_eq!(config.translation_language_or_default(), TranslationLanguage::French);
    }

    #[test]
    fn blank_data_dir_is_unset() {
        let config = AppConfig {
            data_dir: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.data_dir().is_none());

        let config = AppConfig {
            data_dir: Some("/tmp/notes".to_string()),
            ..Default::default()
        };
        assert_eq!(config.data_dir(), Some(PathBuf::from("/tmp/notes")));
    }
}
