//! Language-model ports: note generation and the assists offered while
//! editing a note

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::capture::{Language, Translation, TranslationLanguage};
use crate::domain::note::Note;

/// Errors shared by every language-model port
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("Language model unavailable: {0}")]
    Unavailable(String),

    #[error("Language model is busy, try again later")]
    Busy,

    #[error("Model returned an unusable answer: {0}")]
    InvalidResponse(String),
}

/// A note as the model wrote it, before the category is checked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedNote {
    pub title: String,
    pub content: String,
    pub category: String,
}

/// Port for turning a transcript into a titled, categorized note
#[async_trait]
pub trait NoteGenerator: Send + Sync {
    async fn generate(
        &self,
        transcript: &str,
        language: Language,
    ) -> Result<GeneratedNote, GenerationError>;
}

/// Port proposing short tags for a note
#[async_trait]
pub trait TagSuggester: Send + Sync {
    async fn suggest_tags(
        &self,
        title: &str,
        content: &str,
        language: Language,
    ) -> Result<Vec<String>, GenerationError>;
}

/// Port proposing a column for a note. The answer is free text.
#[async_trait]
pub trait CategorySuggester: Send + Sync {
    async fn suggest_category(&self, title: &str, content: &str)
        -> Result<String, GenerationError>;
}

#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        title: &str,
        content: &str,
        target: TranslationLanguage,
    ) -> Result<Translation, GenerationError>;
}

/// Port writing a digest of several notes
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, notes: &[&Note], language: Language)
        -> Result<String, GenerationError>;
}
