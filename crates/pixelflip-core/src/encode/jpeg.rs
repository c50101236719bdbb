//! JPEG encoding using the `image` crate's JPEG encoder.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;

use super::types::check_dimensions;
use super::EncodeError;
use crate::buffer::PixelBuffer;

/// Encode a pixel buffer to JPEG bytes.
///
/// # Arguments
///
/// * `buffer` - Image to encode (must be non-empty)
/// * `quality` - JPEG quality (1-100, where 100 is highest quality); values
///   outside the range are clamped
///
/// # Errors
///
/// Returns `EncodeError::InvalidDimensions` for an empty buffer.
pub fn encode_jpeg(buffer: &PixelBuffer, quality: u8) -> Result<Vec<u8>, EncodeError> {
    check_dimensions(buffer)?;

    let quality = quality.clamp(1, 100);
    let mut output = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut output, quality);

    encoder
        .write_image(
            buffer.as_raw(),
            buffer.width(),
            buffer.height(),
            ExtendedColorType::Rgb8,
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(output.into_inner())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
