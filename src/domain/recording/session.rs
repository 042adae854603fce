//! Recording session state machine

use std::fmt;
use thiserror::Error;

use super::Duration;

/// Recorder states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RecordingStatus {
    #[default]
    Idle,
    Recording,
    Stopped,
}

impl RecordingStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Recording => "recording",
            Self::Stopped => "stopped",
        }
    }
}

impl fmt::Display for RecordingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error when an invalid state transition is attempted
#[derive(Debug, Clone, Error)]
#[error("Invalid state transition: cannot {action} while {current_state}")]
pub struct InvalidStateTransition {
    pub current_state: RecordingStatus,
    pub action: String,
}

/// Result of advancing the session clock by one second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Tick did not belong to the running session
    Ignored,
    /// Counter advanced to the given second
    Elapsed(u64),
    /// Counter reached the ceiling; the session must stop now
    CeilingReached(u64),
}

/// One capture session.
///
/// State machine:
///   IDLE -> RECORDING (start)
///   STOPPED -> RECORDING (start, new session)
///   RECORDING -> STOPPED (stop)
///   any -> IDLE (reset)
///
/// Every start bumps the session number so ticks scheduled for an earlier
/// session can be told apart from current ones.
#[derive(Debug, Default)]
pub struct RecordingSession {
    status: RecordingStatus,
    elapsed_seconds: u64,
    max_duration: Option<Duration>,
    session_id: u64,
}

impl RecordingSession {
    pub fn new(max_duration: Option<Duration>) -> Self {
        Self {
            max_duration,
            ..Default::default()
        }
    }

    pub fn status(&self) -> RecordingStatus {
        self.status
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn session_id(&self) -> u64 {
        self.session_id
    }

    pub fn max_duration(&self) -> Option<Duration> {
        self.max_duration
    }

    /// Change the ceiling; applies from the next tick
    pub fn set_max_duration(&mut self, max_duration: Option<Duration>) {
        self.max_duration = max_duration;
    }

    pub fn is_idle(&self) -> bool {
        self.status == RecordingStatus::Idle
    }

    pub fn is_recording(&self) -> bool {
        self.status == RecordingStatus::Recording
    }

    pub fn is_stopped(&self) -> bool {
        self.status == RecordingStatus::Stopped
    }

    /// Begin a new session and return its number
    pub fn start(&mut self) -> Result<u64, InvalidStateTransition> {
        if self.status == RecordingStatus::Recording {
            return Err(InvalidStateTransition {
                current_state: self.status,
                action: "start recording".to_string(),
            });
        }
        self.session_id += 1;
        self.elapsed_seconds = 0;
        self.status = RecordingStatus::Recording;
        Ok(self.session_id)
    }

    /// Advance the clock for `session`
    pub fn tick(&mut self, session: u64) -> TickOutcome {
        if self.status != RecordingStatus::Recording || session != self.session_id {
            return TickOutcome::Ignored;
        }
        self.elapsed_seconds += 1;

        match self.max_duration {
            Some(max) if !max.is_zero() && self.elapsed_seconds >= max.as_secs() => {
                TickOutcome::CeilingReached(self.elapsed_seconds)
            }
            _ => TickOutcome::Elapsed(self.elapsed_seconds),
        }
    }

    /// Transition from RECORDING to STOPPED
    pub fn stop(&mut self) -> Result<(), InvalidStateTransition> {
        if self.status != RecordingStatus::Recording {
            return Err(InvalidStateTransition {
                current_state: self.status,
                action: "stop recording".to_string(),
            });
        }
        self.status = RecordingStatus::Stopped;
        Ok(())
    }

    /// Return to IDLE from any state
    pub fn reset(&mut self) {
        self.status = RecordingStatus::Idle;
        self.elapsed_seconds = 0;
    }
}
