//! Application layer - Use cases and port interfaces
//!
//! Contains the note store, the recording lifecycle and the capture
//! pipeline, the editing assists, plus the trait definitions for external system interactions.

pub mod assist;
pub mod capture;
pub mod note_store;
pub mod ports;
pub mod recorder;

// Re-export use cases
pub use assist::{
    AssistError, SuggestCategoryUseCase, SuggestTagsUseCase, SummarizeNotesUseCase,
    TranslateNoteUseCase,
};
pub use capture::{CaptureError, CaptureNoteUseCase, SessionTicket};
pub use note_store::{NoteStore, PersistenceError, MAX_HISTORY, STORAGE_KEY};
pub use recorder::{Recorder, TICK_PERIOD};
