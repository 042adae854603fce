//! Capture domain module: what the AI round-trips produce

mod language;
mod structured_note;
mod suggestion;
mod translation;

pub use language::Language;
pub use structured_note::{StructuredNote, MAX_TRANSCRIPT_LENGTH};
pub use suggestion::{clean_suggested_tags, MAX_SUGGESTED_TAGS, MAX_SUGGESTION_INPUT_LENGTH};
pub use translation::{Translation, TranslationLanguage, MAX_TRANSLATION_INPUT_LENGTH};
