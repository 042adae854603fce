//! `record` command: capture a voice note to a FLAC file

use std::path::PathBuf;

use chrono::Local;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::application::Recorder;
use crate::domain::recording::{AudioData, Duration, RecordingStatus};
use crate::infrastructure::{CpalCaptureDevice, TokioTicker};

use super::error::CliError;
use super::presenter::Presenter;

/// Record until Enter, Ctrl-C or the ceiling, then write the artifact
pub async fn run_record(
    max_duration: Duration,
    output: Option<PathBuf>,
    presenter: &mut Presenter,
) -> Result<(), CliError> {
    let (tick_tx, mut ticks) = mpsc::unbounded_channel();
    let (done_tx, mut done) = mpsc::unbounded_channel::<AudioData>();

    let mut recorder = Recorder::new(
        CpalCaptureDevice::new(),
        TokioTicker::new(tick_tx),
        Some(max_duration),
    );
    recorder.on_complete(move |audio| {
        let _ = done_tx.send(audio);
    });

    recorder.start_recording().await?;

    let ceiling = recorder.max_duration().map(|d| d.as_secs());
    let message = format!(
        "Recording... {}  (Enter to stop)",
        presenter.format_elapsed(0, ceiling)
    );
    presenter.start_spinner(&message);

    let mut stdin = BufReader::new(tokio::io::stdin()).lines();
    let mut stdin_open = true;

    while recorder.status() == RecordingStatus::Recording {
        tokio::select! {
            Some(session) = ticks.recv() => {
                if let Err(e) = recorder.tick(session) {
                    presenter.spinner_fail("Recording failed");
                    return Err(e.into());
                }
                presenter.update_spinner(&format!(
                    "Recording... {}  (Enter to stop)",
                    presenter.format_elapsed(recorder.elapsed_seconds(), ceiling)
                ));
            }
            line = stdin.next_line(), if stdin_open => {
                match line {
                    Ok(Some(_)) => stop(&mut recorder, presenter)?,
                    // No terminal attached: rely on Ctrl-C or the ceiling
                    Ok(None) | Err(_) => stdin_open = false,
                }
            }
            _ = tokio::signal::ctrl_c() => stop(&mut recorder, presenter)?,
        }
    }

    let Ok(audio) = done.try_recv() else {
        presenter.spinner_fail("Recording discarded");
        return Ok(());
    };
    presenter.spinner_success(&format!(
        "Recorded {}s ({})",
        recorder.elapsed_seconds(),
        audio.human_readable_size()
    ));

    let path = output.unwrap_or_else(|| default_output(audio.mime_type().extension()));
    tokio::fs::write(&path, audio.data())
        .await
        .map_err(|e| CliError::WriteFile {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
    presenter.output(&path.display().to_string());

    Ok(())
}

fn stop(
    recorder: &mut Recorder<CpalCaptureDevice, TokioTicker>,
    presenter: &mut Presenter,
) -> Result<(), CliError> {
    recorder.stop_recording().map_err(|e| {
        presenter.spinner_fail("Recording failed");
        CliError::from(e)
    })
}

fn default_output(extension: &str) -> PathBuf {
    PathBuf::from(format!(
        "voice-note-{}.{}",
        Local::now().format("%Y%m%d-%H%M%S"),
        extension
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_is_timestamped() {
        let path = default_output("flac");
        let name = path.to_string_lossy();
        assert!(name.starts_with("voice-note-"));
        assert!(name.ends_with(".flac"));
    }
}
