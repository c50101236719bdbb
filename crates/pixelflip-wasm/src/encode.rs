//! Image encoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { encode_png, encode_jpeg } from '@pixelflip/wasm';
//!
//! const png = encode_png(image);
//! const jpeg = encode_jpeg(image, 90);
//! ```

use crate::types::{to_js_error, JsPixelBuffer};
use pixelflip_core::encode;
use wasm_bindgen::prelude::*;

/// Encode an image to JPEG bytes.
///
/// # Arguments
///
/// * `image` - Image to encode
/// * `quality` - JPEG quality (1-100, clamped; recommended: 90)
///
/// # Errors
///
/// Returns an error if the image is empty or encoding fails internally.
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsPixelBuffer, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(image.buffer(), quality).map_err(to_js_error)
}

/// Encode an image to lossless PNG bytes.
///
/// # Errors
///
/// Returns an error if the image is empty or encoding fails internally.
#[wasm_bindgen]
pub fn encode_png(image: &JsPixelBuffer) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(image.buffer()).map_err(to_js_error)
}
