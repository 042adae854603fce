//! CLI-level errors

use thiserror::Error;

use crate::application::ports::{RecordingError, StorageError};
use crate::application::PersistenceError;
use crate::domain::error::{ConfigError, DurationParseError, ImageError};

/// Anything a command can fail with
#[derive(Debug, Error)]
pub enum CliError {
    #[error("No note matches '{0}'")]
    NotFound(String),

    #[error("'{prefix}' matches {count} notes; use more characters")]
    Ambiguous { prefix: String, count: usize },

    #[error("Invalid reminder '{0}'. Use RFC 3339, YYYY-MM-DDTHH:MM or 'none'")]
    InvalidReminder(String),

    #[error("Note has no version {index} (it has {count})")]
    NoSuchVersion { index: usize, count: usize },

    #[error("Cannot locate a data directory; pass --data-dir or set VOICE_NOTES_DATA_DIR")]
    NoDataDir,

    #[error("Failed to read {path}: {message}")]
    ReadFile { path: String, message: String },

    #[error("Failed to write {path}: {message}")]
    WriteFile { path: String, message: String },

    #[error(transparent)]
    Image(#[from] ImageError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error(transparent)]
    Recording(#[from] RecordingError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Invalid max-duration: {0}")]
    Duration(#[from] DurationParseError),
}

impl From<StorageError> for CliError {
    fn from(e: StorageError) -> Self {
        Self::Persistence(PersistenceError::Storage(e))
    }
}

impl CliError {
    /// Usage mistakes exit with code 2, everything else with 1
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self,
            Self::NotFound(_)
                | Self::Ambiguous { .. }
                | Self::InvalidReminder(_)
                | Self::NoSuchVersion { .. }
                | Self::Duration(_)
        )
    }
}
