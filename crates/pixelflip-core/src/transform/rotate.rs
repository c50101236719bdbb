//! Quarter-turn rotation by exact coordinate remapping.
//!
//! No interpolation is involved: every source pixel lands on exactly one
//! output pixel. A `W` x `H` source becomes an `H` x `W` output.
//!
//! ```text
//! Source (3x2)     Right (2x3)     Left (2x3)
//! ┌───────┐        ┌─────┐         ┌─────┐
//! │ 1 2 3 │        │ 4 1 │         │ 3 6 │
//! │ 4 5 6 │        │ 5 2 │         │ 2 5 │
//! └───────┘        │ 6 3 │         │ 1 4 │
//!                  └─────┘         └─────┘
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::buffer::{PixelBuffer, CHANNELS};

/// Direction of a 90° rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotateDirection {
    /// Counter-clockwise: source `(x, y)` goes to output `(y, W-1-x)`.
    Left,
    /// Clockwise: source `(x, y)` goes to output `(H-1-y, x)`.
    Right,
}

impl RotateDirection {
    /// The opposite direction.
    pub fn inverse(self) -> Self {
        match self {
            RotateDirection::Left => RotateDirection::Right,
            RotateDirection::Right => RotateDirection::Left,
        }
    }
}

/// Rotate an image by 90° in the given direction.
///
/// The output width is the source height and the output height is the
/// source width.
pub fn rotate(source: &PixelBuffer, direction: RotateDirection) -> PixelBuffer {
    let (width, height) = source.dimensions();
    debug!(width, height, ?direction, "Rotating image 90 degrees");

    let src = source.as_raw();
    let mut output = vec![0u8; src.len()];

    // Output is `height` pixels wide.
    let (w, h) = (width as usize, height as usize);
    for y in 0..h {
        for x in 0..w {
            let (dst_x, dst_y) = match direction {
                RotateDirection::Right => (h - 1 - y, x),
                RotateDirection::Left => (y, w - 1 - x),
            };
            let src_idx = (y * w + x) * CHANNELS;
            let dst_idx = (dst_y * h + dst_x) * CHANNELS;
            output[dst_idx..dst_idx + CHANNELS].copy_from_slice(&src[src_idx..src_idx + CHANNELS]);
        }
    }

    PixelBuffer::from_raw_unchecked(height, width, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Rgb;

    fn grey(v: u8) -> Rgb {
        Rgb::new(v, v, v)
    }

    /// 3x2 image, red channel numbered 1..=6 in row-major order.
    fn numbered() -> PixelBuffer {
        let pixels = (1..=6).map(|v| Rgb::new(v, 0, 255 - v)).collect();
        PixelBuffer::from_pixels(3, 2, pixels).unwrap()
    }

    fn reds(buf: &PixelBuffer) -> Vec<u8> {
        buf.pixels().map(|p| p.r).collect()
    }

    #[test]
    fn test_rotate_right_square() {
        let src =
            PixelBuffer::from_pixels(2, 2, vec![grey(0), grey(10), grey(20), grey(30)]).unwrap();
        let out = rotate(&src, RotateDirection::Right);

        assert_eq!(out.dimensions(), (2, 2));
        assert_eq!(
            out.pixels().collect::<Vec<_>>(),
            vec![grey(20), grey(0), grey(30), grey(10)]
        );
    }

    #[test]
    fn test_rotate_left_square() {
        let src =
            PixelBuffer::from_pixels(2, 2, vec![grey(0), grey(10), grey(20), grey(30)]).unwrap();
        let out = rotate(&src, RotateDirection::Left);

        assert_eq!(
            out.pixels().collect::<Vec<_>>(),
            vec![grey(10), grey(30), grey(0), grey(20)]
        );
    }

    #[test]
    fn test_rotate_right_non_square() {
        let out = rotate(&numbered(), RotateDirection::Right);
        assert_eq!(out.dimensions(), (2, 3));
        assert_eq!(reds(&out), vec![4, 1, 5, 2, 6, 3]);
    }

    #[test]
    fn test_rotate_left_non_square() {
        let out = rotate(&numbered(), RotateDirection::Left);
        assert_eq!(out.dimensions(), (2, 3));
        assert_eq!(reds(&out), vec![3, 6, 2, 5, 1, 4]);
    }

    #[test]
    fn test_rotate_keeps_channels_together() {
        let src = numbered();
        let out = rotate(&src, RotateDirection::Right);
        // Source (0, 0) lands on (H-1-0, 0) = (1, 0)
        assert_eq!(out.get(1, 0).unwrap(), src.get(0, 0).unwrap());
        assert_eq!(out.get(1, 0).unwrap(), Rgb::new(1, 0, 254));
    }

    #[test]
    fn test_rotate_single_row_becomes_column() {
        let src = PixelBuffer::from_pixels(3, 1, vec![grey(1), grey(2), grey(3)]).unwrap();

        let right = rotate(&src, RotateDirection::Right);
        assert_eq!(right.dimensions(), (1, 3));
        assert_eq!(reds(&right), vec![1, 2, 3]);

        let left = rotate(&src, RotateDirection::Left);
        assert_eq!(left.dimensions(), (1, 3));
        assert_eq!(reds(&left), vec![3, 2, 1]);
    }

    #[test]
    fn test_rotate_empty_swaps_dimensions() {
        for (w, h) in [(0, 0), (4, 0), (0, 7)] {
            let src = PixelBuffer::new(w, h).unwrap();
            for direction in [RotateDirection::Left, RotateDirection::Right] {
                let out = rotate(&src, direction);
                assert_eq!(out.dimensions(), (h, w));
                assert!(out.as_raw().is_empty());
            }
        }
    }

    #[test]
    fn test_direction_inverse() {
        assert_eq!(RotateDirection::Left.inverse(), RotateDirection::Right);
        assert_eq!(RotateDirection::Right.inverse(), RotateDirection::Left);
    }
}
