//! Capture-to-note use case
//!
//! Turns a finished recording into a stored note: transcribe the audio,
//! ask the generator for a title, body and column, then save. Each run is
//! tied to a session ticket; starting a newer session makes the older
//! run's result stale, and stale results are dropped instead of saved.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::capture::{Language, StructuredNote, MAX_TRANSCRIPT_LENGTH};
use crate::domain::note::Note;
use crate::domain::recording::AudioData;

use super::note_store::{NoteStore, PersistenceError};
use super::ports::{
    Clock, GenerationError, IdGenerator, KeyValueStore, NoteGenerator, Transcriber,
    TranscriptionError,
};

/// Errors from the capture use case
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("Recording contains no audio")]
    EmptyAudio,

    #[error("Transcription failed: {0}")]
    Transcription(#[from] TranscriptionError),

    #[error("No speech detected in the recording")]
    EmptyTranscript,

    #[error("Transcript too long ({length} characters, limit is {max})")]
    TranscriptTooLong { length: usize, max: usize },

    #[error("Note generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}

/// Identifies one capture run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTicket(u64);

/// Capture use case
pub struct CaptureNoteUseCase<T, G>
where
    T: Transcriber,
    G: NoteGenerator,
{
    transcriber: T,
    generator: G,
    language: Language,
    generation: Arc<AtomicU64>,
}

impl<T, G> CaptureNoteUseCase<T, G>
where
    T: Transcriber,
    G: NoteGenerator,
{
    pub fn new(transcriber: T, generator: G, language: Language) -> Self {
        Self {
            transcriber,
            generator,
            language,
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Open a new capture run, invalidating every earlier ticket
    pub fn begin_session(&self) -> SessionTicket {
        SessionTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_current(&self, ticket: SessionTicket) -> bool {
        self.generation.load(Ordering::SeqCst) == ticket.0
    }

    /// Process a finished recording into a saved note.
    ///
    /// Returns `Ok(None)` when `ticket` went stale before the note could be
    /// saved.
    pub async fn capture<S, C, I>(
        &self,
        audio: &AudioData,
        ticket: SessionTicket,
        store: &mut NoteStore<S, C, I>,
    ) -> Result<Option<Note>, CaptureError>
    where
        S: KeyValueStore,
        C: Clock,
        I: IdGenerator,
    {
        if audio.is_empty() {
            return Err(CaptureError::EmptyAudio);
        }

        debug!(size = %audio.human_readable_size(), language = %self.language, "transcribing");
        let transcript = self.transcriber.transcribe(audio, self.language).await?;
        if !self.is_current(ticket) {
            debug!("discarding stale transcript");
            return Ok(None);
        }

        let transcript = transcript.trim();
        if transcript.is_empty() {
            return Err(CaptureError::EmptyTranscript);
        }
        let length = transcript.chars().count();
        if length > MAX_TRANSCRIPT_LENGTH {
            return Err(CaptureError::TranscriptTooLong {
                length,
                max: MAX_TRANSCRIPT_LENGTH,
            });
        }

        let generated = self.generator.generate(transcript, self.language).await?;
        if !self.is_current(ticket) {
            debug!("discarding stale note");
            return Ok(None);
        }

        let structured = StructuredNote::from_model_output(
            &generated.title,
            &generated.content,
            &generated.category,
        );
        if structured.title.is_empty() {
            return Err(GenerationError::InvalidResponse("empty title".to_string()).into());
        }

        let note = store.save_note(
            transcript,
            &structured.title,
            &structured.content,
            structured.category,
        )?;
        info!(note_id = %note.id, category = %note.category, "note captured");
        Ok(Some(note))
    }
}
