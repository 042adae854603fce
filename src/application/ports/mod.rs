//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod capture;
pub mod config;
pub mod generator;
pub mod storage;
pub mod system;
pub mod ticker;
pub mod transcriber;

// Re-export common types
pub use capture::{CaptureDevice, CaptureHandle, ChunkSink, RecordingError};
pub use config::ConfigStore;
pub use generator::{
    CategorySuggester, GeneratedNote, GenerationError, NoteGenerator, Summarizer, TagSuggester,
    Translator,
};
pub use storage::{KeyValueStore, StorageError};
pub use system::{Clock, IdGenerator};
pub use ticker::{TickHandle, Ticker};
pub use transcriber::{Transcriber, TranscriptionError};
