//! Recording domain module

mod audio_data;
mod duration;
mod session;

pub use audio_data::{AudioData, AudioMimeType};
pub use duration::{Duration, DEFAULT_MAX_DURATION_SECS};
pub use session::{InvalidStateTransition, RecordingSession, RecordingStatus, TickOutcome};
