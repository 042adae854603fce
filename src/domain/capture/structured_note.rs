//! Structured note produced from a transcript

use crate::domain::note::NoteCategory;

/// Longest transcript sent to the note generator (~2500 tokens)
pub const MAX_TRANSCRIPT_LENGTH: usize = 10_000;

/// Title, body and column proposed for a transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuredNote {
    pub title: String,
    pub content: String,
    pub category: NoteCategory,
}

impl StructuredNote {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        category: NoteCategory,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category,
        }
    }

    /// Build from raw model output, tolerating a sloppy category
    pub fn from_model_output(title: &str, content: &str, category: &str) -> Self {
        Self::new(title.trim(), content.trim(), NoteCategory::parse_lenient(category))
    }
}
