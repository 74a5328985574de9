//! Local image staging: file bytes to an embeddable `data:` URI.
//!
//! The composer stages an image by reading a user-selected file and
//! embedding it in memory. Nothing is transcoded or written back to disk.

use base64::{engine::general_purpose, Engine as _};
use std::path::Path;
use thiserror::Error;

use super::types::ImageRef;

/// Default upper bound for a staged image (10 MB).
pub const DEFAULT_MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("Failed to read image: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image is {size} bytes (max {max} bytes)")]
    TooLarge { size: u64, max: u64 },

    #[error("Image file is empty")]
    Empty,

    #[error("Not a supported image format (png, jpeg, gif, webp, bmp)")]
    UnsupportedFormat,
}

/// Detect an image MIME type from the file's magic bytes.
pub fn sniff_mime(bytes: &[u8]) -> Option<&'static str> {
    const PNG: &[u8] = b"\x89PNG\r\n\x1a\n";
    const JPEG: &[u8] = b"\xff\xd8\xff";

    if bytes.starts_with(PNG) {
        Some("image/png")
    } else if bytes.starts_with(JPEG) {
        Some("image/jpeg")
    } else if bytes.starts_with(b"GIF87a") || bytes.starts_with(b"GIF89a") {
        Some("image/gif")
    } else if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        Some("image/webp")
    } else if bytes.starts_with(b"BM") && bytes.len() >= 14 {
        Some("image/bmp")
    } else {
        None
    }
}

/// Convert raw image bytes into an embedded `data:` URI reference.
pub fn encode_data_uri(bytes: &[u8]) -> Result<ImageRef, ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::Empty);
    }
    let mime = sniff_mime(bytes).ok_or(ImageError::UnsupportedFormat)?;
    let encoded = general_purpose::STANDARD.encode(bytes);
    Ok(ImageRef::new(format!("data:{};base64,{}", mime, encoded)))
}

/// Read an image file and embed it.
///
/// The size limit is checked against file metadata before any bytes are read.
pub async fn read_image(path: &Path, max_bytes: u64) -> Result<ImageRef, ImageError> {
    let meta = tokio::fs::metadata(path).await?;
    if meta.len() > max_bytes {
        return Err(ImageError::TooLarge {
            size: meta.len(),
            max: max_bytes,
        });
    }

    let bytes = tokio::fs::read(path).await?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "Read image for staging");
    encode_data_uri(&bytes)
}
