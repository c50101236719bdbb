//! Core types for image decoding.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transform::{MirrorAxis, RotateDirection, Transform};

/// Error types for image loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The container format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image bytes are corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    Corrupted(String),

    /// The locator could not be read.
    #[error("Image source unavailable: {locator}: {reason}")]
    SourceUnavailable { locator: String, reason: String },
}

/// Options controlling how image bytes become a pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Rotate/mirror the decoded pixels according to the EXIF orientation tag.
    pub apply_orientation: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            apply_orientation: true,
        }
    }
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    /// Horizontal flip.
    FlipHorizontal = 2,
    /// Rotate 180 degrees.
    Rotate180 = 3,
    /// Vertical flip.
    FlipVertical = 4,
    /// Transpose (rotate 90 CW, then flip horizontal).
    Transpose = 5,
    /// Rotate 90 degrees clockwise.
    Rotate90CW = 6,
    /// Transverse (rotate 90 CCW, then flip horizontal).
    Transverse = 7,
    /// Rotate 270 degrees clockwise (90 CCW).
    Rotate270CW = 8,
}

const RIGHT: Transform = Transform::Rotate(RotateDirection::Right);
const LEFT: Transform = Transform::Rotate(RotateDirection::Left);
const FLIP_H: Transform = Transform::Mirror(MirrorAxis::Horizontal);
const FLIP_V: Transform = Transform::Mirror(MirrorAxis::Vertical);

impl Orientation {
    /// Transforms that bring stored pixels upright, in application order.
    pub fn transforms(self) -> &'static [Transform] {
        match self {
            Orientation::Normal => &[],
            Orientation::FlipHorizontal => &[FLIP_H],
            Orientation::Rotate180 => &[RIGHT, RIGHT],
            Orientation::FlipVertical => &[FLIP_V],
            Orientation::Transpose => &[RIGHT, FLIP_H],
            Orientation::Rotate90CW => &[RIGHT],
            Orientation::Transverse => &[LEFT, FLIP_H],
            Orientation::Rotate270CW => &[LEFT],
        }
    }
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            1 => Orientation::Normal,
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}
