//! Model assists for notes already on the board
//!
//! Tag and column suggestions, translation and a digest of the board. Each
//! use case validates its input before calling the model. Results that
//! change a note go through `NoteStore`, so they are persisted, undoable and
//! versioned like any manual edit.

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::capture::{
    clean_suggested_tags, Language, Translation, TranslationLanguage,
    MAX_SUGGESTION_INPUT_LENGTH, MAX_TRANSLATION_INPUT_LENGTH,
};
use crate::domain::note::{merge_tags, Note, NoteCategory, NoteUpdate};

use super::note_store::{NoteStore, PersistenceError};
use super::ports::{
    CategorySuggester, Clock, GenerationError, IdGenerator, KeyValueStore, Summarizer,
    TagSuggester, Translator,
};

#[derive(Debug, Error)]
pub enum AssistError {
    #[error("Note is too long for this ({length} characters, limit is {max})")]
    InputTooLong { length: usize, max: usize },

    #[error("Both title and content are needed")]
    MissingText,

    #[error("No active notes to summarize")]
    NothingToSummarize,

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

fn check_length(title: &str, content: &str, max: usize) -> Result<(), AssistError> {
    let length = title.chars().count() + content.chars().count();
    if length > max {
        return Err(AssistError::InputTooLong { length, max });
    }
    Ok(())
}

fn text_of<S, C, G>(store: &NoteStore<S, C, G>, id: &str) -> Option<(String, String)>
where
    S: KeyValueStore,
    C: Clock,
    G: IdGenerator,
{
    store.get(id).map(|n| (n.title.clone(), n.content.clone()))
}

/// Suggest tags and merge them into a note's tags
pub struct SuggestTagsUseCase<T: TagSuggester> {
    suggester: T,
    language: Language,
}

impl<T: TagSuggester> SuggestTagsUseCase<T> {
    pub fn new(suggester: T, language: Language) -> Self {
        Self { suggester, language }
    }

    /// At most five tags. A note missing its title or content gets none,
    /// without asking the model.
    pub async fn suggest(&self, title: &str, content: &str) -> Result<Vec<String>, AssistError> {
        if title.trim().is_empty() || content.trim().is_empty() {
            return Ok(Vec::new());
        }
        check_length(title, content, MAX_SUGGESTION_INPUT_LENGTH)?;

        let raw = self.suggester.suggest_tags(title, content, self.language).await?;
        Ok(clean_suggested_tags(raw))
    }

    /// Merge suggestions into the note's tags, keeping existing ones first.
    ///
    /// Returns the resulting tags, or `None` for an unknown id.
    pub async fn apply<S, C, G>(
        &self,
        id: &str,
        store: &mut NoteStore<S, C, G>,
    ) -> Result<Option<Vec<String>>, AssistError>
    where
        S: KeyValueStore,
        C: Clock,
        G: IdGenerator,
    {
        let Some((title, content)) = text_of(store, id) else {
            return Ok(None);
        };
        let suggested = self.suggest(&title, &content).await?;

        let Some(note) = store.get(id) else {
            return Ok(None);
        };
        if suggested.is_empty() {
            return Ok(Some(note.tags().to_vec()));
        }
        let merged = merge_tags(note.tags(), &suggested);
        let update =
            NoteUpdate::new(note.title.clone(), note.content.clone()).with_tags(merged.clone());

        store.update_note(id, update)?;
        debug!(note_id = %id, count = merged.len(), "tags merged");
        Ok(Some(merged))
    }
}

/// Suggest the column a note belongs in
pub struct SuggestCategoryUseCase<C: CategorySuggester> {
    suggester: C,
}

impl<C: CategorySuggester> SuggestCategoryUseCase<C> {
    pub fn new(suggester: C) -> Self {
        Self { suggester }
    }

    /// Anything the model answers outside the four columns becomes `notes`,
    /// as does a note missing its title or content.
    pub async fn suggest(&self, title: &str, content: &str) -> Result<NoteCategory, AssistError> {
        if title.trim().is_empty() || content.trim().is_empty() {
            return Ok(NoteCategory::Notes);
        }
        check_length(title, content, MAX_SUGGESTION_INPUT_LENGTH)?;

        let answer = self.suggester.suggest_category(title, content).await?;
        Ok(NoteCategory::parse_lenient(&answer))
    }

    /// Move the note to the suggested column
    pub async fn apply<S, K, G>(
        &self,
        id: &str,
        store: &mut NoteStore<S, K, G>,
    ) -> Result<Option<NoteCategory>, AssistError>
    where
        S: KeyValueStore,
        K: Clock,
        G: IdGenerator,
    {
        let Some((title, content)) = text_of(store, id) else {
            return Ok(None);
        };
        let category = self.suggest(&title, &content).await?;

        if store.update_note_category(id, category)? {
            Ok(Some(category))
        } else {
            Ok(None)
        }
    }
}

/// Translate a note in place
pub struct TranslateNoteUseCase<T: Translator> {
    translator: T,
    default_target: TranslationLanguage,
}

impl<T: Translator> TranslateNoteUseCase<T> {
    pub fn new(translator: T, default_target: TranslationLanguage) -> Self {
        Self {
            translator,
            default_target,
        }
    }

    pub fn default_target(&self) -> TranslationLanguage {
        self.default_target
    }

    /// Blank parts of the model's answer fall back to the source text
    pub async fn translate(
        &self,
        title: &str,
        content: &str,
        target: Option<TranslationLanguage>,
    ) -> Result<Translation, AssistError> {
        if title.trim().is_empty() || content.trim().is_empty() {
            return Err(AssistError::MissingText);
        }
        check_length(title, content, MAX_TRANSLATION_INPUT_LENGTH)?;

        let target = target.unwrap_or(self.default_target);
        let answer = self.translator.translate(title, content, target).await?;

        let pick = |translated: &str, original: &str| {
            let translated = translated.trim();
            if translated.is_empty() {
                original.to_string()
            } else {
                translated.to_string()
            }
        };
        Ok(Translation::new(
            pick(&answer.title, title),
            pick(&answer.content, content),
        ))
    }

    /// Replace the note's text with its translation. The previous text is
    /// kept as a version.
    pub async fn apply<S, C, G>(
        &self,
        id: &str,
        target: Option<TranslationLanguage>,
        store: &mut NoteStore<S, C, G>,
    ) -> Result<Option<Translation>, AssistError>
    where
        S: KeyValueStore,
        C: Clock,
        G: IdGenerator,
    {
        let Some((title, content)) = text_of(store, id) else {
            return Ok(None);
        };
        let translation = self.translate(&title, &content, target).await?;

        let update = NoteUpdate::new(translation.title.clone(), translation.content.clone());
        if !store.update_note(id, update)? {
            return Ok(None);
        }
        info!(note_id = %id, language = %target.unwrap_or(self.default_target), "note translated");
        Ok(Some(translation))
    }
}

/// Digest of the notes on the board
pub struct SummarizeNotesUseCase<S: Summarizer> {
    summarizer: S,
    language: Language,
}

impl<S: Summarizer> SummarizeNotesUseCase<S> {
    pub fn new(summarizer: S, language: Language) -> Self {
        Self { summarizer, language }
    }

    /// Summarize the active notes; archived ones are left out
    pub async fn summarize(&self, notes: &[Note]) -> Result<String, AssistError> {
        let active: Vec<&Note> = notes.iter().filter(|n| !n.is_archived()).collect();
        if active.is_empty() {
            return Err(AssistError::NothingToSummarize);
        }

        let summary = self.summarizer.summarize(&active, self.language).await?;
        let summary = summary.trim();
        if summary.is_empty() {
            return Err(GenerationError::InvalidResponse("empty summary".to_string()).into());
        }
        Ok(summary.to_string())
    }
}
