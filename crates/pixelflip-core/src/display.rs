//! Display sinks: where the current view goes after every edit.

use tracing::{debug, warn};

use crate::buffer::PixelBuffer;
use crate::encode::FrameFormat;

/// Accepts the buffer to show on screen.
///
/// Rendering is entirely the sink's concern; the core never sees a
/// rendering failure.
pub trait DisplaySink {
    fn present(&mut self, view: &PixelBuffer);
}

impl<D: DisplaySink + ?Sized> DisplaySink for &mut D {
    fn present(&mut self, view: &PixelBuffer) {
        (**self).present(view)
    }
}

/// Discards every frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DisplaySink for NullSink {
    fn present(&mut self, _view: &PixelBuffer) {}
}

/// Encodes each presented view and keeps the latest encoded frame.
#[derive(Debug, Clone, Default)]
pub struct FrameSink {
    format: FrameFormat,
    frame: Option<Vec<u8>>,
    dimensions: (u32, u32),
    presented: u64,
}

impl FrameSink {
    pub fn new(format: FrameFormat) -> Self {
        Self {
            format,
            ..Self::default()
        }
    }

    pub fn format(&self) -> FrameFormat {
        self.format
    }

    /// Encoded bytes of the last presented view.
    ///
    /// `None` before the first frame or when the last view could not be
    /// encoded (codecs reject empty images).
    pub fn frame(&self) -> Option<&[u8]> {
        self.frame.as_deref()
    }

    /// Dimensions of the last presented view.
    pub fn dimensions(&self) -> (u32, u32) {
        self.dimensions
    }

    /// Number of views presented so far.
    pub fn presented(&self) -> u64 {
        self.presented
    }
}

impl DisplaySink for FrameSink {
    fn present(&mut self, view: &PixelBuffer) {
        self.presented += 1;
        self.dimensions = view.dimensions();
        match self.format.encode(view) {
            Ok(bytes) => {
                debug!(
                    frame = self.presented,
                    len = bytes.len(),
                    "Encoded display frame"
                );
                self.frame = Some(bytes);
            }
            Err(e) => {
                warn!(frame = self.presented, error = %e, "Could not encode display frame");
                self.frame = None;
            }
        }
    }
}
