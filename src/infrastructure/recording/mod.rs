//! Audio capture adapters

mod cpal_device;
mod flac_encoder;

pub use cpal_device::{CpalCaptureDevice, CpalCaptureHandle};
pub use flac_encoder::{encode_to_flac, EncodingError, TARGET_SAMPLE_RATE};
