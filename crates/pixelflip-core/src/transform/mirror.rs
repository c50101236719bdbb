//! Mirror (flip) across the vertical or horizontal center line.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::buffer::{PixelBuffer, CHANNELS};

/// Which way a mirror flips the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MirrorAxis {
    /// Flip left/right: output `(x, y)` = source `(W-1-x, y)`.
    Horizontal,
    /// Flip top/bottom: output `(x, y)` = source `(x, H-1-y)`.
    Vertical,
}

/// Mirror an image, producing a new buffer of the same dimensions.
///
/// Mirroring twice on the same axis reproduces the source exactly.
pub fn mirror(source: &PixelBuffer, axis: MirrorAxis) -> PixelBuffer {
    let (width, height) = source.dimensions();
    debug!(width, height, ?axis, "Mirroring image");

    let row_len = width as usize * CHANNELS;
    let src = source.as_raw();
    let mut output = Vec::with_capacity(src.len());

    // chunks_exact panics on a zero chunk size
    if row_len == 0 {
        return PixelBuffer::from_raw_unchecked(width, height, output);
    }

    match axis {
        MirrorAxis::Horizontal => {
            for row in src.chunks_exact(row_len) {
                for px in row.chunks_exact(CHANNELS).rev() {
                    output.extend_from_slice(px);
                }
            }
        }
        MirrorAxis::Vertical => {
            for row in src.chunks_exact(row_len).rev() {
                output.extend_from_slice(row);
            }
        }
    }

    PixelBuffer::from_raw_unchecked(width, height, output)
}
