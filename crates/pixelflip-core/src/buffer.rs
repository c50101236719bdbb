//! Owned RGB pixel buffer shared by every transform.
//!
//! Pixels are stored interleaved (3 bytes per pixel) in row-major order, so
//! the pixel at `(x, y)` starts at byte `(y * width + x) * 3`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Bytes per RGB pixel.
pub const CHANNELS: usize = 3;

/// Errors raised by buffer construction and pixel access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BufferError {
    /// The requested dimensions cannot be addressed in memory.
    #[error("Invalid dimensions: {width}x{height} exceeds addressable buffer size")]
    InvalidDimensions { width: u32, height: u32 },

    /// Raw data length doesn't match the dimensions.
    #[error("Invalid pixel data: expected {expected} values, got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Coordinate lies outside the buffer.
    #[error("Pixel ({x}, {y}) is out of bounds for {width}x{height} buffer")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// A single 8-bit-per-channel RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// True when all three channels hold the same value.
    pub fn is_grey(self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(c: Rgb) -> Self {
        [c.r, c.g, c.b]
    }
}

/// An owned, rectangular grid of RGB pixels.
///
/// A buffer with zero width or height is valid and represents an empty image.
/// `Clone` is a deep copy: a cloned buffer never shares storage with its source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

/// Byte length of a `width` x `height` RGB buffer, if it fits in `usize`.
fn byte_len(width: u32, height: u32) -> Option<usize> {
    (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(CHANNELS)
}

impl PixelBuffer {
    /// Allocate a zero-filled (black) buffer.
    ///
    /// Callers are expected to overwrite the content; the initial value is
    /// not part of the contract.
    pub fn new(width: u32, height: u32) -> Result<Self, BufferError> {
        let len = byte_len(width, height).ok_or(BufferError::InvalidDimensions { width, height })?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    /// Allocate a buffer where every pixel is `color`.
    pub fn filled(width: u32, height: u32, color: Rgb) -> Result<Self, BufferError> {
        let mut buffer = Self::new(width, height)?;
        for px in buffer.data.chunks_exact_mut(CHANNELS) {
            px.copy_from_slice(&<[u8; 3]>::from(color));
        }
        Ok(buffer)
    }

    /// Wrap interleaved RGB bytes. The length must be exactly `width * height * 3`.
    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> Result<Self, BufferError> {
        let expected =
            byte_len(width, height).ok_or(BufferError::InvalidDimensions { width, height })?;
        if data.len() != expected {
            return Err(BufferError::InvalidPixelData {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a buffer from row-major pixels. The length must be exactly `width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgb>) -> Result<Self, BufferError> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or(BufferError::InvalidDimensions { width, height })?;
        if pixels.len() != expected {
            return Err(BufferError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }
        let data = pixels.into_iter().flat_map(<[u8; 3]>::from).collect();
        Self::from_raw(width, height, data)
    }

    /// Wrap bytes whose length the caller already derived from a valid buffer.
    pub(crate) fn from_raw_unchecked(width: u32, height: u32, data: Vec<u8>) -> Self {
        debug_assert_eq!(
            Some(data.len()),
            byte_len(width, height),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Create a buffer from an `image::RgbImage`.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            data: img.into_raw(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.data.len() / CHANNELS
    }

    /// True for a zero-width or zero-height buffer.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Interleaved RGB bytes in row-major order.
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Iterate pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.data
            .chunks_exact(CHANNELS)
            .map(|px| Rgb::new(px[0], px[1], px[2]))
    }

    /// Read the pixel at `(x, y)`.
    pub fn get(&self, x: u32, y: u32) -> Result<Rgb, BufferError> {
        let idx = self.offset(x, y)?;
        Ok(Rgb::new(
            self.data[idx],
            self.data[idx + 1],
            self.data[idx + 2],
        ))
    }

    /// Write the pixel at `(x, y)`. Only that cell changes.
    pub fn set(&mut self, x: u32, y: u32, color: Rgb) -> Result<(), BufferError> {
        let idx = self.offset(x, y)?;
        self.data[idx..idx + CHANNELS].copy_from_slice(&<[u8; 3]>::from(color));
        Ok(())
    }

    fn offset(&self, x: u32, y: u32) -> Result<usize, BufferError> {
        if x >= self.width || y >= self.height {
            return Err(BufferError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(self.index(x, y))
    }

    /// Unchecked byte offset; callers guarantee `x < width` and `y < height`.
    #[inline]
    pub(crate) fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    pub(crate) fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zero_filled() {
        let buf = PixelBuffer::new(3, 2).unwrap();
        assert_eq!(buf.dimensions(), (3, 2));
        assert_eq!(buf.pixel_count(), 6);
        assert_eq!(buf.as_raw().len(), 18);
        assert!(buf.pixels().all(|p| p == Rgb::BLACK));
    }

    #[test]
    fn test_empty_buffers_are_valid() {
        for (w, h) in [(0, 0), (5, 0), (0, 5)] {
            let buf = PixelBuffer::new(w, h).unwrap();
            assert!(buf.is_empty());
            assert_eq!(buf.pixel_count(), 0);
            assert_eq!(buf.dimensions(), (w, h));
        }
    }

    #[test]
    fn test_new_rejects_unaddressable_dimensions() {
        // (2^32 - 1)^2 * 3 overflows a 64-bit usize
        let result = PixelBuffer::new(u32::MAX, u32::MAX);
        assert!(matches!(result, Err(BufferError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_get_set_round_trip() {
        let mut buf = PixelBuffer::new(4, 3).unwrap();
        buf.set(2, 1, Rgb::new(10, 20, 30)).unwrap();
        assert_eq!(buf.get(2, 1).unwrap(), Rgb::new(10, 20, 30));

        // Neighbours untouched
        assert_eq!(buf.get(1, 1).unwrap(), Rgb::BLACK);
        assert_eq!(buf.get(3, 1).unwrap(), Rgb::BLACK);
        assert_eq!(buf.get(2, 0).unwrap(), Rgb::BLACK);
        assert_eq!(buf.get(2, 2).unwrap(), Rgb::BLACK);
    }

    #[test]
    fn test_row_major_layout() {
        let mut buf = PixelBuffer::new(2, 2).unwrap();
        buf.set(1, 0, Rgb::new(1, 2, 3)).unwrap();
        buf.set(0, 1, Rgb::new(4, 5, 6)).unwrap();
        assert_eq!(buf.as_raw(), &[0, 0, 0, 1, 2, 3, 4, 5, 6, 0, 0, 0]);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut buf = PixelBuffer::new(2, 3).unwrap();
        assert_eq!(
            buf.get(2, 0),
            Err(BufferError::OutOfBounds {
                x: 2,
                y: 0,
                width: 2,
                height: 3
            })
        );
        assert!(buf.get(0, 3).is_err());
        assert!(buf.set(5, 5, Rgb::WHITE).is_err());

        let empty = PixelBuffer::new(0, 0).unwrap();
        assert!(empty.get(0, 0).is_err());
    }

    #[test]
    fn test_from_raw_length_check() {
        assert!(PixelBuffer::from_raw(2, 1, vec![0; 6]).is_ok());
        assert_eq!(
            PixelBuffer::from_raw(2, 1, vec![0; 5]),
            Err(BufferError::InvalidPixelData {
                expected: 6,
                actual: 5
            })
        );
    }

    #[test]
    fn test_from_pixels() {
        let buf =
            PixelBuffer::from_pixels(2, 1, vec![Rgb::new(10, 20, 30), Rgb::new(40, 50, 60)])
                .unwrap();
        assert_eq!(buf.as_raw(), &[10, 20, 30, 40, 50, 60]);

        let err = PixelBuffer::from_pixels(2, 2, vec![Rgb::BLACK]).unwrap_err();
        assert_eq!(
            err,
            BufferError::InvalidPixelData {
                expected: 4,
                actual: 1
            }
        );
    }

    #[test]
    fn test_filled() {
        let buf = PixelBuffer::filled(3, 3, Rgb::new(7, 8, 9)).unwrap();
        assert!(buf.pixels().all(|p| p == Rgb::new(7, 8, 9)));
    }

    #[test]
    fn test_clone_is_independent() {
        let original = PixelBuffer::filled(2, 2, Rgb::WHITE).unwrap();
        let mut copy = original.clone();
        copy.set(0, 0, Rgb::BLACK).unwrap();

        assert_eq!(original.get(0, 0).unwrap(), Rgb::WHITE);
        assert_ne!(original, copy);
    }

    #[test]
    fn test_from_rgb_image() {
        let img = image::RgbImage::from_raw(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let buf = PixelBuffer::from_rgb_image(img);
        assert_eq!(buf.dimensions(), (2, 1));
        assert_eq!(buf.get(1, 0).unwrap(), Rgb::new(4, 5, 6));
    }

    #[test]
    fn test_error_display() {
        let err = BufferError::OutOfBounds {
            x: 4,
            y: 1,
            width: 3,
            height: 3,
        };
        assert_eq!(err.to_string(), "Pixel (4, 1) is out of bounds for 3x3 buffer");
    }
}
