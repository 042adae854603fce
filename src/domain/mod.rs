//! Domain layer - Core business logic
//!
//! Contains value objects, entities, and domain errors.
//! This layer has no dependencies on external systems.

pub mod capture;
pub mod config;
pub mod error;
pub mod note;
pub mod recording;

// Re-export common types
pub use capture::{Language, StructuredNote};
pub use config::AppConfig;
pub use error::*;
pub use note::{FieldUpdate, Note, NoteCategory, NoteColor, NoteUpdate, NoteVersion};
pub use recording::{AudioData, AudioMimeType, Duration, RecordingSession, RecordingStatus};
