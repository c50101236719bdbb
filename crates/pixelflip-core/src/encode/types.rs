//! Core types for image encoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::{encode_jpeg, encode_png};
use crate::buffer::PixelBuffer;

/// Default JPEG quality for rendered frames.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Errors that can occur during encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The codec rejected the image
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Container format used for rendered frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "format", rename_all = "snake_case")]
pub enum FrameFormat {
    /// Lossless PNG.
    #[default]
    Png,
    /// JPEG with the given quality (1-100).
    Jpeg { quality: u8 },
}

impl FrameFormat {
    /// JPEG at the default quality.
    pub fn jpeg() -> Self {
        FrameFormat::Jpeg {
            quality: DEFAULT_JPEG_QUALITY,
        }
    }

    /// Encode `buffer` in this format.
    pub fn encode(&self, buffer: &PixelBuffer) -> Result<Vec<u8>, EncodeError> {
        match *self {
            FrameFormat::Png => encode_png(buffer),
            FrameFormat::Jpeg { quality } => encode_jpeg(buffer, quality),
        }
    }

    /// MIME type of the encoded bytes.
    pub fn mime_type(&self) -> &'static str {
        match self {
            FrameFormat::Png => "image/png",
            FrameFormat::Jpeg { .. } => "image/jpeg",
        }
    }
}

/// Reject images that codecs cannot represent.
pub(crate) fn check_dimensions(buffer: &PixelBuffer) -> Result<(), EncodeError> {
    if buffer.is_empty() {
        let (width, height) = buffer.dimensions();
        return Err(EncodeError::InvalidDimensions { width, height });
    }
    Ok(())
}
