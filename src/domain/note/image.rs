//! Image attachments, stored inline as data URIs

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::domain::error::ImageError;

/// Largest image accepted as an attachment (bytes, before encoding)
pub const MAX_IMAGE_SIZE: usize = 500_000;

/// Mime type for a file extension
pub fn image_mime_type(extension: &str) -> Result<&'static str, ImageError> {
    match extension.to_lowercase().as_str() {
        "png" => Ok("image/png"),
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "gif" => Ok("image/gif"),
        "webp" => Ok("image/webp"),
        other => Err(ImageError::UnsupportedType(other.to_string())),
    }
}

/// Encode image bytes as a `data:` URI
pub fn encode_image_data_uri(bytes: &[u8], mime_type: &str) -> Result<String, ImageError> {
    if bytes.len() > MAX_IMAGE_SIZE {
        return Err(ImageError::TooLarge {
            size: bytes.len(),
            max: MAX_IMAGE_SIZE,
        });
    }
    Ok(format!("data:{};base64,{}", mime_type, STANDARD.encode(bytes)))
}
