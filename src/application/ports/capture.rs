//! Audio capture device port

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::recording::AudioMimeType;

/// Recording errors
#[derive(Debug, Clone, Error)]
pub enum RecordingError {
    #[error("Microphone access denied: {0}")]
    PermissionDenied(String),

    #[error("No audio device available")]
    NoAudioDevice,

    #[error("Failed to start recording: {0}")]
    StartFailed(String),

    #[error("Recording failed: {0}")]
    RecordingFailed(String),
}

/// Shared buffer the capture device appends encoded chunks to.
///
/// Cloning shares the same buffer. Empty chunks are dropped.
#[derive(Debug, Clone, Default)]
pub struct ChunkSink {
    chunks: Arc<Mutex<Vec<Vec<u8>>>>,
}

impl ChunkSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, chunk: Vec<u8>) {
        if chunk.is_empty() {
            return;
        }
        let mut chunks = self.chunks.lock().unwrap_or_else(|e| e.into_inner());
        chunks.push(chunk);
    }

    /// Remove and return everything buffered so far
    pub fn take(&self) -> Vec<Vec<u8>> {
        let mut chunks = self.chunks.lock().unwrap_or_else(|e| e.into_inner());
        std::mem::take(&mut *chunks)
    }

    pub fn len(&self) -> usize {
        self.chunks.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An acquired capture device
pub trait CaptureHandle: Send {
    /// Begin capturing; chunks are delivered into `sink`
    fn start(&mut self, sink: ChunkSink) -> Result<(), RecordingError>;

    /// Stop capturing. Any remaining audio is flushed into the sink before
    /// this returns. Returns the container format of the chunks.
    fn stop(&mut self) -> Result<AudioMimeType, RecordingError>;

    /// Give the device back to the system
    fn release(&mut self);
}

/// Port for acquiring the microphone
#[async_trait]
pub trait CaptureDevice: Send + Sync {
    /// Ask for access to the capture device. May fail if permission is
    /// denied or no device exists.
    async fn request_access(&self) -> Result<Box<dyn CaptureHandle>, RecordingError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sink_is_shared_between_clones() {
        let sink = ChunkSink::new();
        let device_side = sink.clone();
        device_side.push(vec![1, 2]);
        device_side.push(vec![3]);

        assert_eq!(sink.len(), 2);
        assert_eq!(sink.take(), vec![vec![1, 2], vec![3]]);
        assert!(sink.is_empty());
    }

    #[test]
    fn sink_drops_empty_chunks() {
        let sink = ChunkSink::new();
        sink.push(Vec::new());
        assert!(sink.is_empty());
    }
}
