//! Image loading for pixelflip.
//!
//! This module provides functionality for:
//! - Decoding JPEG and PNG bytes into a [`PixelBuffer`](crate::PixelBuffer)
//! - Correcting EXIF orientation with the engine's own transforms
//! - Resolving a locator to bytes through an [`ImageSource`]
//!
//! # Examples
//!
//! ```ignore
//! use pixelflip_core::decode::{FileSource, ImageSource};
//!
//! let image = FileSource::default().open("photo.jpg").unwrap();
//! println!("Decoded {}x{} image", image.width(), image.height());
//! ```

mod codec;
mod source;
mod types;

pub use codec::{decode_image, get_orientation};
pub use source::{FileSource, ImageSource, MemorySource};
pub use types::{DecodeError, DecodeOptions, Orientation};
