//! Image sources: where the bytes for a `load` come from.

use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use super::{decode_image, DecodeError, DecodeOptions};
use crate::buffer::PixelBuffer;

/// Resolves a locator to a decoded pixel buffer.
///
/// Called once per `load`.
pub trait ImageSource {
    fn open(&self, locator: &str) -> Result<PixelBuffer, DecodeError>;
}

impl<S: ImageSource + ?Sized> ImageSource for &S {
    fn open(&self, locator: &str) -> Result<PixelBuffer, DecodeError> {
        (**self).open(locator)
    }
}

/// Reads images from the filesystem; the locator is a path.
#[derive(Debug, Clone, Default)]
pub struct FileSource {
    options: DecodeOptions,
}

impl FileSource {
    pub fn new(options: DecodeOptions) -> Self {
        Self { options }
    }
}

impl ImageSource for FileSource {
    fn open(&self, locator: &str) -> Result<PixelBuffer, DecodeError> {
        let bytes =
            std::fs::read(Path::new(locator)).map_err(|e| DecodeError::SourceUnavailable {
                locator: locator.to_string(),
                reason: e.to_string(),
            })?;
        debug!(locator, len = bytes.len(), "Read image file");
        decode_image(&bytes, &self.options)
    }
}

/// Serves images from byte blobs held in memory, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    blobs: HashMap<String, Vec<u8>>,
    options: DecodeOptions,
}

impl MemorySource {
    pub fn new(options: DecodeOptions) -> Self {
        Self {
            blobs: HashMap::new(),
            options,
        }
    }

    /// Register `bytes` under `name`, replacing any previous blob.
    pub fn insert(&mut self, name: impl Into<String>, bytes: Vec<u8>) {
        self.blobs.insert(name.into(), bytes);
    }

    pub fn with(mut self, name: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.insert(name, bytes);
        self
    }
}

impl ImageSource for MemorySource {
    fn open(&self, locator: &str) -> Result<PixelBuffer, DecodeError> {
        let bytes = self
            .blobs
            .get(locator)
            .ok_or_else(|| DecodeError::SourceUnavailable {
                locator: locator.to_string(),
                reason: "no such entry".to_string(),
            })?;
        decode_image(bytes, &self.options)
    }
}
