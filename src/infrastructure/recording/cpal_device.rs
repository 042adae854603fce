//! Microphone capture through cpal
//!
//! The cpal stream is not `Send`, so each capture runs on its own thread
//! that owns the stream; the handle only holds shared buffers and flags.
//! Samples are mixed down to mono as they arrive and kept as raw PCM.
//! On stop they are resampled to 16kHz and encoded to FLAC, and the
//! whole artifact is delivered as a single chunk.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::mpsc;
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::Duration as StdDuration;

use async_trait::async_trait;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{SampleFormat, SampleRate, StreamConfig};
use rubato::{FftFixedIn, Resampler};
use tracing::{debug, warn};

use super::flac_encoder::{encode_to_flac, TARGET_SAMPLE_RATE};
use crate::application::ports::{CaptureDevice, CaptureHandle, ChunkSink, RecordingError};
use crate::domain::recording::AudioMimeType;

/// Default system microphone
#[derive(Debug, Clone, Copy, Default)]
pub struct CpalCaptureDevice;

impl CpalCaptureDevice {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CaptureDevice for CpalCaptureDevice {
    async fn request_access(&self) -> Result<Box<dyn CaptureHandle>, RecordingError> {
        // Probe on a blocking thread; some hosts are slow to enumerate
        tokio::task::spawn_blocking(|| {
            let device = input_device()?;
            input_config(&device)?;
            debug!(device = %device.name().unwrap_or_default(), "capture device available");
            Ok::<(), RecordingError>(())
        })
        .await
        .map_err(|e| RecordingError::StartFailed(format!("Device probe failed: {}", e)))??;

        Ok(Box::new(CpalCaptureHandle::default()))
    }
}

/// One acquired microphone session
#[derive(Default)]
pub struct CpalCaptureHandle {
    samples: Arc<Mutex<Vec<i16>>>,
    sample_rate: Arc<AtomicU32>,
    running: Arc<AtomicBool>,
    worker: Option<JoinHandle<()>>,
    sink: Option<ChunkSink>,
}

impl CaptureHandle for CpalCaptureHandle {
    fn start(&mut self, sink: ChunkSink) -> Result<(), RecordingError> {
        if self.worker.is_some() {
            return Err(RecordingError::StartFailed("Capture already running".into()));
        }

        self.samples.lock().unwrap_or_else(|e| e.into_inner()).clear();
        self.running.store(true, Ordering::SeqCst);

        let samples = Arc::clone(&self.samples);
        let sample_rate = Arc::clone(&self.sample_rate);
        let running = Arc::clone(&self.running);
        let (ready_tx, ready_rx) = mpsc::sync_channel(1);

        let worker = std::thread::spawn(move || {
            let stream = match open_stream(samples, Arc::clone(&running)) {
                Ok((stream, rate)) => {
                    sample_rate.store(rate, Ordering::SeqCst);
                    let _ = ready_tx.send(Ok(()));
                    stream
                }
                Err(e) => {
                    running.store(false, Ordering::SeqCst);
                    let _ = ready_tx.send(Err(e));
                    return;
                }
            };

            while running.load(Ordering::SeqCst) {
                std::thread::sleep(StdDuration::from_millis(20));
            }
            drop(stream);
        });

        match ready_rx.recv() {
            Ok(Ok(())) => {
                self.worker = Some(worker);
                self.sink = Some(sink);
                Ok(())
            }
            Ok(Err(e)) => {
                let _ = worker.join();
                Err(e)
            }
            Err(_) => {
                let _ = worker.join();
                Err(RecordingError::StartFailed("Capture thread exited".into()))
            }
        }
    }

    fn stop(&mut self) -> Result<AudioMimeType, RecordingError> {
        self.join_worker();

        let samples = std::mem::take(&mut *self.samples.lock().unwrap_or_else(|e| e.into_inner()));
        if samples.is_empty() {
            return Err(RecordingError::RecordingFailed("No audio data captured".into()));
        }

        let rate = self.sample_rate.load(Ordering::SeqCst);
        let resampled = resample_to_target(&samples, rate)?;
        let flac = encode_to_flac(&resampled, TARGET_SAMPLE_RATE)
            .map_err(|e| RecordingError::RecordingFailed(e.to_string()))?;
        debug!(device_rate = rate, samples = samples.len(), bytes = flac.len(), "capture encoded");

        if let Some(sink) = self.sink.take() {
            sink.push(flac);
        }
        Ok(AudioMimeType::Flac)
    }

    fn release(&mut self) {
        self.join_worker();
        self.sink = None;
    }
}

impl CpalCaptureHandle {
    fn join_worker(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("capture thread panicked");
            }
        }
    }
}

impl Drop for CpalCaptureHandle {
    fn drop(&mut self) {
        self.join_worker();
    }
}

fn input_device() -> Result<cpal::Device, RecordingError> {
    cpal::default_host()
        .default_input_device()
        .ok_or(RecordingError::NoAudioDevice)
}

/// Pick an i16 or f32 input config, preferring mono and the 16kHz rate
fn input_config(device: &cpal::Device) -> Result<(StreamConfig, SampleFormat), RecordingError> {
    let supported = device
        .supported_input_configs()
        .map_err(|e| RecordingError::PermissionDenied(format!("Failed to query input configs: {}", e)))?;

    let covers_target = |range: &cpal::SupportedStreamConfigRange| {
        range.min_sample_rate().0 <= TARGET_SAMPLE_RATE && range.max_sample_rate().0 >= TARGET_SAMPLE_RATE
    };

    let mut best: Option<cpal::SupportedStreamConfigRange> = None;
    for range in supported {
        if !matches!(range.sample_format(), SampleFormat::I16 | SampleFormat::F32) {
            continue;
        }
        let better = match &best {
            None => true,
            Some(current) => {
                range.channels() < current.channels()
                    || (covers_target(&range) && !covers_target(current))
            }
        };
        if better {
            best = Some(range);
        }
    }

    let range = best.ok_or_else(|| RecordingError::StartFailed("No suitable input config".into()))?;
    let sample_rate = if covers_target(&range) {
        SampleRate(TARGET_SAMPLE_RATE)
    } else {
        range.min_sample_rate()
    };

    Ok((
        StreamConfig {
            channels: range.channels(),
            sample_rate,
            buffer_size: cpal::BufferSize::Default,
        },
        range.sample_format(),
    ))
}

fn open_stream(
    samples: Arc<Mutex<Vec<i16>>>,
    running: Arc<AtomicBool>,
) -> Result<(cpal::Stream, u32), RecordingError> {
    let device = input_device()?;
    let (config, format) = input_config(&device)?;
    let channels = config.channels;
    let on_error = |err: cpal::StreamError| warn!(error = %err, "audio stream error");

    let stream = match format {
        SampleFormat::I16 => device.build_input_stream(
            &config,
            move |data: &[i16], _: &cpal::InputCallbackInfo| {
                if running.load(Ordering::SeqCst) {
                    let mono = mix_to_mono(data, channels);
                    if let Ok(mut buffer) = samples.lock() {
                        buffer.extend_from_slice(&mono);
                    }
                }
            },
            on_error,
            None,
        ),
        SampleFormat::F32 => device.build_input_stream(
            &config,
            move |data: &[f32], _: &cpal::InputCallbackInfo| {
                if running.load(Ordering::SeqCst) {
                    let pcm: Vec<i16> = data.iter().map(|&s| (s * 32767.0) as i16).collect();
                    let mono = mix_to_mono(&pcm, channels);
                    if let Ok(mut buffer) = samples.lock() {
                        buffer.extend_from_slice(&mono);
                    }
                }
            },
            on_error,
            None,
        ),
        other => {
            return Err(RecordingError::StartFailed(format!(
                "Unsupported sample format: {:?}",
                other
            )))
        }
    }
    .map_err(|e| RecordingError::PermissionDenied(e.to_string()))?;

    stream
        .play()
        .map_err(|e| RecordingError::StartFailed(e.to_string()))?;

    Ok((stream, config.sample_rate.0))
}

/// Average interleaved frames down to one channel
fn mix_to_mono(samples: &[i16], channels: u16) -> Vec<i16> {
    if channels <= 1 {
        return samples.to_vec();
    }
    samples
        .chunks(channels as usize)
        .map(|frame| {
            let sum: i32 = frame.iter().map(|&s| i32::from(s)).sum();
            (sum / frame.len() as i32) as i16
        })
        .collect()
}

fn resample_to_target(samples: &[i16], source_rate: u32) -> Result<Vec<i16>, RecordingError> {
    if source_rate == TARGET_SAMPLE_RATE || source_rate == 0 {
        return Ok(samples.to_vec());
    }

    let input: Vec<f32> = samples.iter().map(|&s| f32::from(s) / 32768.0).collect();
    let ratio = f64::from(TARGET_SAMPLE_RATE) / f64::from(source_rate);
    let output_len = (input.len() as f64 * ratio).ceil() as usize;

    let mut resampler = FftFixedIn::<f32>::new(
        source_rate as usize,
        TARGET_SAMPLE_RATE as usize,
        1024,
        2,
        1,
    )
    .map_err(|e| RecordingError::RecordingFailed(format!("Resampler init failed: {}", e)))?;

    let mut output = Vec::with_capacity(output_len + 1024);
    let mut pos = 0;
    while pos < input.len() {
        let needed = resampler.input_frames_next();
        let end = (pos + needed).min(input.len());
        let mut chunk = input[pos..end].to_vec();
        chunk.resize(needed, 0.0);

        let resampled = resampler
            .process(&[chunk], None)
            .map_err(|e| RecordingError::RecordingFailed(format!("Resampling failed: {}", e)))?;
        output.extend(resampled[0].iter().map(|&s| (s * 32767.0) as i16));
        pos = end;
    }

    output.truncate(output_len);
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mono_passes_through() {
        let mono = vec![100i16, -200, 300];
        assert_eq!(mix_to_mono(&mono, 1), mono);
    }

    #[test]
    fn stereo_frames_are_averaged() {
        assert_eq!(mix_to_mono(&[100, 200, -300, -100], 2), vec![150, -200]);
    }

    #[test]
    fn target_rate_is_not_resampled() {
        let samples = vec![1i16, 2, 3];
        assert_eq!(resample_to_target(&samples, TARGET_SAMPLE_RATE).unwrap(), samples);
    }

    #[test]
    fn downsampling_shrinks_by_rate_ratio() {
        let samples = vec![0i16; 48000];
        let out = resample_to_target(&samples, 48000).unwrap();
        assert!(out.len() <= 16000);
        assert!(out.len() > 15000);
    }

    #[test]
    fn stop_without_samples_fails() {
        let mut handle = CpalCaptureHandle::default();
        assert!(matches!(
            handle.stop(),
            Err(RecordingError::RecordingFailed(_))
        ));
    }
}
