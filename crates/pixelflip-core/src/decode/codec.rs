//! Byte decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{ImageError, ImageReader};
use tracing::debug;

use super::{DecodeError, DecodeOptions, Orientation};
use crate::buffer::PixelBuffer;

/// Decode image bytes into an RGB pixel buffer.
///
/// The container format is guessed from the bytes (JPEG and PNG are
/// supported). Alpha, if present, is dropped. When
/// `options.apply_orientation` is set, the EXIF orientation tag is honored
/// by running the matching mirror/rotate transforms on the decoded pixels.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format is not recognized.
/// Returns `DecodeError::Corrupted` if the bytes cannot be decoded.
pub fn decode_image(bytes: &[u8], options: &DecodeOptions) -> Result<PixelBuffer, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::Corrupted(e.to_string()))?;

    if reader.format().is_none() {
        return Err(DecodeError::InvalidFormat);
    }

    let img = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(_) => DecodeError::InvalidFormat,
        other => DecodeError::Corrupted(other.to_string()),
    })?;

    let mut buffer = PixelBuffer::from_rgb_image(img.into_rgb8());

    if options.apply_orientation {
        let orientation = extract_orientation(bytes);
        if orientation != Orientation::Normal {
            debug!(?orientation, "Applying EXIF orientation");
        }
        for transform in orientation.transforms() {
            buffer = transform.apply(&buffer);
        }
    }

    Ok(buffer)
}

/// Extract EXIF orientation from image bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found or orientation
/// cannot be determined.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let exif_reader = Reader::new();
    let mut cursor = Cursor::new(bytes);

    match exif_reader.read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

/// Extract EXIF orientation value from image bytes (for external use).
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    extract_orientation(bytes)
}
