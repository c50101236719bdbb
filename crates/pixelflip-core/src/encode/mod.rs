//! Image encoding for pixelflip.
//!
//! This module provides functionality for:
//! - Encoding pixel buffers to PNG (lossless) or JPEG (configurable quality)
//! - Selecting the frame format used by display sinks
//!
//! # Examples
//!
//! ```ignore
//! use pixelflip_core::encode::encode_png;
//! use pixelflip_core::{PixelBuffer, Rgb};
//!
//! let image = PixelBuffer::filled(100, 100, Rgb::new(128, 128, 128)).unwrap();
//! let png_bytes = encode_png(&image).unwrap();
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod jpeg;
mod png;
mod types;

pub use jpeg::encode_jpeg;
pub use png::encode_png;
pub use types::{EncodeError, FrameFormat, DEFAULT_JPEG_QUALITY};
