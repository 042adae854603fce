//! Recorded audio artifact

use std::fmt;

/// Container formats a capture device can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AudioMimeType {
    #[default]
    Flac,
    Wav,
    Webm,
    Ogg,
}

impl AudioMimeType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Flac => "audio/flac",
            Self::Wav => "audio/wav",
            Self::Webm => "audio/webm",
            Self::Ogg => "audio/ogg",
        }
    }

    pub const fn extension(&self) -> &'static str {
        match self {
            Self::Flac => "flac",
            Self::Wav => "wav",
            Self::Webm => "webm",
            Self::Ogg => "ogg",
        }
    }
}

impl fmt::Display for AudioMimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Finished audio of one recording session, handed to the completion callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioData {
    data: Vec<u8>,
    mime_type: AudioMimeType,
}

impl AudioData {
    pub fn new(data: Vec<u8>, mime_type: AudioMimeType) -> Self {
        Self { data, mime_type }
    }

    /// Join buffered chunks into one artifact
    pub fn from_chunks(chunks: Vec<Vec<u8>>, mime_type: AudioMimeType) -> Self {
        Self::new(chunks.concat(), mime_type)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    pub fn mime_type(&self) -> AudioMimeType {
        self.mime_type
    }

    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_chunks_concatenates_in_order() {
        let audio = AudioData::from_chunks(vec![vec![1, 2], vec![], vec![3]], AudioMimeType::Webm);
        assert_eq!(audio.data(), &[1, 2, 3]);
        assert_eq!(audio.mime_type(), AudioMimeType::Webm);
    }

    #[test]
    fn empty_artifact() {
        let audio = AudioData::from_chunks(Vec::new(), AudioMimeType::Flac);
        assert!(audio.is_empty());
    }

    #[test]
    fn human_readable_sizes() {
        assert_eq!(AudioData::new(vec![0; 500], AudioMimeType::Flac).human_readable_size(), "500 B");
        assert_eq!(AudioData::new(vec![0; 2048], AudioMimeType::Flac).human_readable_size(), "2.0 KB");
        assert_eq!(
            AudioData::new(vec![0; 3 * 1024 * 1024], AudioMimeType::Flac).human_readable_size(),
            "3.0 MB"
        );
    }

    #[test]
    fn mime_strings() {
        assert_eq!(AudioMimeType::Flac.to_string(), "audio/flac");
        assert_eq!(AudioMimeType::Webm.extension(), "webm");
    }
}
