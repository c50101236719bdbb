//! Pixelflip WASM - WebAssembly bindings for pixelflip
//!
//! This crate exposes the pixelflip-core buffer, transforms, codecs and edit
//! session to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for image data
//! - `transform` - Mirror, rotate, invert and greyscale bindings
//! - `decode` - Image decoding bindings (JPEG, PNG)
//! - `encode` - Image encoding bindings (JPEG, PNG)
//! - `editor` - Stateful edit session with revert
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, rotate_right } from '@pixelflip/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const rotated = rotate_right(decode_image(bytes));
//! console.log(`Rotated to ${rotated.width}x${rotated.height}`);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod editor;
mod encode;
mod transform;
mod types;

// Re-export public types
pub use decode::{decode_image, get_orientation};
pub use editor::JsEditor;
pub use encode::{encode_jpeg, encode_png};
pub use transform::{greyscale, invert, mirror_horizontal, mirror_vertical, rotate_left, rotate_right};
pub use types::JsPixelBuffer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
