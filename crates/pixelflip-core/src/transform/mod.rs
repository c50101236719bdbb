//! Pixel buffer transforms: mirror, quarter-turn rotation, invert, greyscale.
//!
//! Every transform is a pure function of its source buffer. The source is
//! never mutated; a freshly allocated buffer is returned instead, so a
//! transformed image can never alias the image it was derived from.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner
//! - `x` grows to the right, `y` grows downwards
//! - Rotation directions are as seen on screen (Right = clockwise)
//!
//! Empty buffers (zero width or height) are accepted by every transform and
//! produce an empty buffer with the transformed dimensions.

mod color;
mod mirror;
mod rotate;

pub use color::{greyscale, invert};
pub use mirror::{mirror, MirrorAxis};
pub use rotate::{rotate, RotateDirection};

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;

/// One of the supported transforms, with its direction parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "direction", rename_all = "snake_case")]
pub enum Transform {
    Mirror(MirrorAxis),
    Rotate(RotateDirection),
    Invert,
    Greyscale,
}

impl Transform {
    /// Apply this transform, producing a new buffer.
    pub fn apply(&self, source: &PixelBuffer) -> PixelBuffer {
        match *self {
            Transform::Mirror(axis) => mirror(source, axis),
            Transform::Rotate(direction) => rotate(source, direction),
            Transform::Invert => invert(source),
            Transform::Greyscale => greyscale(source),
        }
    }

    /// Dimensions of the output for a `width` x `height` source.
    pub fn output_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        match self {
            Transform::Rotate(_) => (height, width),
            _ => (width, height),
        }
    }

    /// The transform that undoes this one, if any.
    ///
    /// Greyscale is lossy and has no inverse.
    pub fn inverse(&self) -> Option<Transform> {
        match *self {
            Transform::Mirror(axis) => Some(Transform::Mirror(axis)),
            Transform::Rotate(direction) => Some(Transform::Rotate(direction.inverse())),
            Transform::Invert => Some(Transform::Invert),
            Transform::Greyscale => None,
        }
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
