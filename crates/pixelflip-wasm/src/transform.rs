//! WASM bindings for the pixel transforms.
//!
//! Each binding returns a new image; the input is left untouched.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const rotated = rotate_right(image);
//! const flipped = mirror_horizontal(rotated);
//! ```

use crate::types::JsPixelBuffer;
use pixelflip_core::transform::{self, MirrorAxis, RotateDirection};
use wasm_bindgen::prelude::*;

/// Flip an image left/right.
#[wasm_bindgen]
pub fn mirror_horizontal(image: &JsPixelBuffer) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(transform::mirror(image.buffer(), MirrorAxis::Horizontal))
}

/// Flip an image top/bottom.
#[wasm_bindgen]
pub fn mirror_vertical(image: &JsPixelBuffer) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(transform::mirror(image.buffer(), MirrorAxis::Vertical))
}

/// Rotate an image 90° counter-clockwise. Width and height are swapped.
#[wasm_bindgen]
pub fn rotate_left(image: &JsPixelBuffer) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(transform::rotate(image.buffer(), RotateDirection::Left))
}

/// Rotate an image 90° clockwise. Width and height are swapped.
#[wasm_bindgen]
pub fn rotate_right(image: &JsPixelBuffer) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(transform::rotate(image.buffer(), RotateDirection::Right))
}

/// Invert every color channel.
#[wasm_bindgen]
pub fn invert(image: &JsPixelBuffer) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(transform::invert(image.buffer()))
}

/// Convert to greyscale (truncating channel average).
#[wasm_bindgen]
pub fn greyscale(image: &JsPixelBuffer) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(transform::greyscale(image.buffer()))
}
