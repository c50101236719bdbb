//! Per-pixel color transforms: inversion and greyscale.
//!
//! Both operate on each pixel independently and preserve dimensions.

use tracing::debug;

use crate::buffer::{PixelBuffer, CHANNELS};

/// Maximum value of an 8-bit channel.
const MAX_CHANNEL: u8 = u8::MAX;

/// Invert every channel: `v` becomes `255 - v`.
///
/// Inverting twice reproduces the source exactly.
pub fn invert(source: &PixelBuffer) -> PixelBuffer {
    let (width, height) = source.dimensions();
    debug!(width, height, "Inverting image colors");

    let output = source.as_raw().iter().map(|&v| MAX_CHANNEL - v).collect();
    PixelBuffer::from_raw_unchecked(width, height, output)
}

/// Convert to greyscale by averaging the three channels.
///
/// The average is `(r + g + b) / 3` with truncating integer division, so
/// results are never rounded up. Applying greyscale to its own output is a
/// no-op.
pub fn greyscale(source: &PixelBuffer) -> PixelBuffer {
    let (width, height) = source.dimensions();
    debug!(width, height, "Converting image to greyscale");

    let mut output = source.clone();
    for px in output.data_mut().chunks_exact_mut(CHANNELS) {
        let sum = px[0] as u16 + px[1] as u16 + px[2] as u16;
        let avg = (sum / 3) as u8;
        px.fill(avg);
    }
    output
}
