//! Speech-to-text port

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::capture::Language;
use crate::domain::recording::AudioData;

#[derive(Debug, Clone, Error)]
pub enum TranscriptionError {
    #[error("Transcription service unavailable: {0}")]
    Unavailable(String),

    #[error("Transcription service is busy, try again later")]
    Busy,

    #[error("Audio format not accepted: {0}")]
    UnsupportedAudio(String),

    #[error("Transcription failed: {0}")]
    Failed(String),
}

/// Turns a finished recording into plain text
#[async_trait]
pub trait Transcriber: Send + Sync {
    /// `language` is the language the speaker is expected to use
    async fn transcribe(
        &self,
        audio: &AudioData,
        language: Language,
    ) -> Result<String, TranscriptionError>;
}
