//! Recording lifecycle use case

use std::time::Duration as StdDuration;

use tracing::{debug, info, warn};

use crate::domain::recording::{AudioData, Duration, RecordingSession, RecordingStatus, TickOutcome};

use super::ports::{CaptureDevice, CaptureHandle, ChunkSink, RecordingError, TickHandle, Ticker};

/// Period of the elapsed-time clock
pub const TICK_PERIOD: StdDuration = StdDuration::from_secs(1);

type CompletionCallback = Box<dyn FnMut(AudioData) + Send>;

/// Drives one capture session at a time.
///
/// The recorder owns the capture handle and the tick handle for the running
/// session. Ticks are fed back through [`Recorder::tick`] by whoever listens
/// to the [`Ticker`]; each tick carries its session number so late ticks
/// from a finished session are ignored.
///
/// When a session stops, by hand or by reaching the ceiling, the finished
/// artifact is kept and passed to the completion callback exactly once.
pub struct Recorder<D, T>
where
    D: CaptureDevice,
    T: Ticker,
{
    device: D,
    ticker: T,
    session: RecordingSession,
    capture: Option<Box<dyn CaptureHandle>>,
    clock: Option<Box<dyn TickHandle>>,
    sink: ChunkSink,
    artifact: Option<AudioData>,
    on_complete: Option<CompletionCallback>,
}

impl<D, T> Recorder<D, T>
where
    D: CaptureDevice,
    T: Ticker,
{
    /// Create an idle recorder. `None` or a zero duration disables auto-stop.
    pub fn new(device: D, ticker: T, max_duration: Option<Duration>) -> Self {
        Self {
            device,
            ticker,
            session: RecordingSession::new(max_duration),
            capture: None,
            clock: None,
            sink: ChunkSink::new(),
            artifact: None,
            on_complete: None,
        }
    }

    /// Register the completion callback, replacing any earlier one.
    ///
    /// Can be called at any time, including mid-session; whichever callback
    /// is registered when the session stops is the one invoked.
    pub fn on_complete<F>(&mut self, callback: F)
    where
        F: FnMut(AudioData) + Send + 'static,
    {
        self.on_complete = Some(Box::new(callback));
    }

    pub fn status(&self) -> RecordingStatus {
        self.session.status()
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.session.elapsed_seconds()
    }

    /// Number of the current (or most recent) session
    pub fn session_id(&self) -> u64 {
        self.session.session_id()
    }

    pub fn max_duration(&self) -> Option<Duration> {
        self.session.max_duration()
    }

    pub fn set_max_duration(&mut self, max_duration: Option<Duration>) {
        self.session.set_max_duration(max_duration);
    }

    /// Artifact of the last completed session
    pub fn artifact(&self) -> Option<&AudioData> {
        self.artifact.as_ref()
    }

    /// Acquire the microphone and begin a new session.
    ///
    /// A no-op while already recording. If the device cannot be acquired or
    /// started the recorder keeps its previous state and the error is
    /// returned.
    pub async fn start_recording(&mut self) -> Result<(), RecordingError> {
        if self.session.is_recording() {
            debug!("already recording, ignoring start");
            return Ok(());
        }

        let mut handle = match self.device.request_access().await {
            Ok(handle) => handle,
            Err(e) => {
                warn!(error = %e, "could not acquire capture device");
                return Err(e);
            }
        };

        self.sink.take();
        if let Err(e) = handle.start(self.sink.clone()) {
            warn!(error = %e, "capture device failed to start");
            discard(handle, false);
            return Err(e);
        }

        let session = match self.session.start() {
            Ok(session) => session,
            Err(e) => {
                warn!(error = %e, "session refused to start");
                discard(handle, true);
                self.sink.take();
                return Err(RecordingError::StartFailed(e.to_string()));
            }
        };
        self.artifact = None;
        self.capture = Some(handle);
        self.clock = Some(self.ticker.start(session, TICK_PERIOD));

        info!(session, max_duration = ?self.session.max_duration().map(|d| d.as_secs()), "recording started");
        Ok(())
    }

    /// Feed one clock tick for `session`.
    ///
    /// Reaching the ceiling stops the session exactly as
    /// [`Recorder::stop_recording`] would.
    pub fn tick(&mut self, session: u64) -> Result<TickOutcome, RecordingError> {
        let outcome = self.session.tick(session);
        if let TickOutcome::CeilingReached(elapsed) = outcome {
            info!(elapsed, "recording ceiling reached");
            self.stop_recording()?;
        }
        Ok(outcome)
    }

    /// Finish the session and hand the artifact to the completion callback.
    ///
    /// A no-op unless recording. On a capture failure the recorder returns to
    /// idle, the callback is not invoked, and the error is returned.
    pub fn stop_recording(&mut self) -> Result<(), RecordingError> {
        if !self.session.is_recording() {
            debug!(status = %self.session.status(), "not recording, ignoring stop");
            return Ok(());
        }

        self.cancel_clock();

        let stopped = match self.capture.take() {
            Some(mut handle) => {
                let mime = handle.stop();
                handle.release();
                mime
            }
            None => Err(RecordingError::RecordingFailed(
                "capture device was not held".to_string(),
            )),
        };

        let mime_type = match stopped {
            Ok(mime_type) => mime_type,
            Err(e) => {
                warn!(error = %e, "capture failed while stopping");
                self.sink.take();
                self.session.reset();
                return Err(e);
            }
        };

        let audio = AudioData::from_chunks(self.sink.take(), mime_type);
        self.session
            .stop()
            .map_err(|e| RecordingError::RecordingFailed(e.to_string()))?;

        info!(
            elapsed = self.session.elapsed_seconds(),
            size = %audio.human_readable_size(),
            "recording stopped"
        );

        self.artifact = Some(audio.clone());
        if let Some(callback) = self.on_complete.as_mut() {
            callback(audio);
        }
        Ok(())
    }

    /// Abandon whatever is in progress and return to idle.
    ///
    /// Discards the artifact and the elapsed counter. Never invokes the
    /// completion callback.
    pub fn reset_recording(&mut self) {
        self.cancel_clock();
        if let Some(mut handle) = self.capture.take() {
            if let Err(e) = handle.stop() {
                debug!(error = %e, "ignoring capture error during reset");
            }
            handle.release();
        }
        self.sink.take();
        self.artifact = None;
        self.session.reset();
        debug!("recorder reset");
    }

    fn cancel_clock(&mut self) {
        if let Some(mut clock) = self.clock.take() {
            clock.cancel();
        }
    }
}

impl<D, T> Drop for Recorder<D, T>
where
    D: CaptureDevice,
    T: Ticker,
{
    fn drop(&mut self) {
        self.cancel_clock();
        if let Some(mut handle) = self.capture.take() {
            let _ = handle.stop();
            handle.release();
        }
    }
}

/// Give back a handle that never became part of a session
fn discard(mut handle: Box<dyn CaptureHandle>, started: bool) {
    if started {
        if let Err(e) = handle.stop() {
            debug!(error = %e, "stopping discarded capture handle");
        }
    }
    handle.release();
}
