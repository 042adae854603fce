//! Domain error types

use thiserror::Error;

/// Error when parsing a duration string
#[derive(Debug, Clone, Error)]
#[error("Invalid duration format: \"{input}\". Expected format: <number>s, <number>m, or <number>m<number>s (e.g., 30s, 1m, 2m30s)")]
pub struct DurationParseError {
    pub input: String,
}

/// Error when an unknown note category is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid category: \"{input}\". Valid categories are: tasks, ideas, notes, meetings")]
pub struct InvalidCategoryError {
    pub input: String,
}

/// Error when a color outside the palette is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid color: \"{input}\". Valid colors are: default, red, orange, yellow, green, blue, purple, pink")]
pub struct InvalidColorError {
    pub input: String,
}

/// Error when an unsupported note language is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid language: \"{input}\". Valid languages are: pl, en")]
pub struct InvalidLanguageError {
    pub input: String,
}

/// Error when a translation target outside the supported set is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid target language: \"{input}\". Valid targets are: pl, en, de, fr, es")]
pub struct InvalidTranslationLanguageError {
    pub input: String,
}

/// Error when an unknown board sort order is provided
#[derive(Debug, Clone, Error)]
#[error("Invalid sort order: \"{input}\". Valid orders are: date, alpha")]
pub struct InvalidSortOrderError {
    pub input: String,
}

/// Error when an image cannot be attached to a note
#[derive(Debug, Clone, Error)]
pub enum ImageError {
    #[error("Image is {size} bytes, the limit is {max} bytes")]
    TooLarge { size: usize, max: usize },

    #[error("Unsupported image type: \"{0}\". Supported: png, jpg, jpeg, gif, webp")]
    UnsupportedType(String),
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),

    #[error("Cannot locate a config directory: neither XDG_CONFIG_HOME nor HOME is set")]
    NoConfigDir,
}
