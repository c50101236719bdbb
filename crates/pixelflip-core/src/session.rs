//! Edit session: the originally loaded image and the currently displayed one.
//!
//! # States
//!
//! ```text
//!            load                 apply
//! Empty ───────────▶ Loaded ───────────────▶ Edited ──┐
//!                      ▲                       │  ▲   │ apply
//!                      └────── revert ─────────┘  └───┘
//! ```
//!
//! `load` is accepted from any state and replaces whatever was there.
//! `apply` and `revert` on an empty session fail with [`SessionError::NoImage`].

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::buffer::PixelBuffer;
use crate::transform::Transform;

/// Errors raised by session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The operation needs an image but none is loaded.
    #[error("No image loaded")]
    NoImage,
}

/// Observable state of a [`Session`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// No image loaded.
    Empty,
    /// An image is loaded and the current view equals the original.
    Loaded,
    /// At least one transform has been applied since the last load or revert.
    Edited,
}

#[derive(Debug, Clone)]
struct Images {
    original: PixelBuffer,
    current: PixelBuffer,
    applied: Vec<Transform>,
}

/// Tracks the original image and the current, possibly transformed, view.
///
/// The original and current buffers always exist together. The current view
/// never shares storage with the original.
#[derive(Debug, Clone, Default)]
pub struct Session {
    images: Option<Images>,
}

impl Session {
    /// Create an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SessionState {
        match &self.images {
            None => SessionState::Empty,
            Some(images) if images.applied.is_empty() => SessionState::Loaded,
            Some(_) => SessionState::Edited,
        }
    }

    /// True when an image is loaded.
    pub fn has_image(&self) -> bool {
        self.images.is_some()
    }

    /// Load a new original image, discarding any previous image and edits.
    pub fn load(&mut self, buffer: PixelBuffer) {
        let (width, height) = buffer.dimensions();
        debug!(width, height, "Loading image into session");
        self.images = Some(Images {
            current: buffer.clone(),
            original: buffer,
            applied: Vec::new(),
        });
    }

    /// Apply a transform to the current view.
    ///
    /// The session moves to [`SessionState::Edited`] even when the transform
    /// leaves the content unchanged.
    pub fn apply(&mut self, transform: Transform) -> Result<(), SessionError> {
        let images = self.images.as_mut().ok_or(SessionError::NoImage)?;
        images.current = transform.apply(&images.current);
        images.applied.push(transform);
        Ok(())
    }

    /// Restore the current view to a fresh copy of the original.
    pub fn revert(&mut self) -> Result<(), SessionError> {
        let images = self.images.as_mut().ok_or(SessionError::NoImage)?;
        debug!(discarded = images.applied.len(), "Reverting to original image");
        images.current = images.original.clone();
        images.applied.clear();
        Ok(())
    }

    /// The buffer to display.
    pub fn current_view(&self) -> Result<&PixelBuffer, SessionError> {
        self.images
            .as_ref()
            .map(|images| &images.current)
            .ok_or(SessionError::NoImage)
    }

    /// The image as originally loaded.
    pub fn original(&self) -> Result<&PixelBuffer, SessionError> {
        self.images
            .as_ref()
            .map(|images| &images.original)
            .ok_or(SessionError::NoImage)
    }

    /// Transforms applied since the last load or revert, oldest first.
    pub fn applied(&self) -> &[Transform] {
        self.images
            .as_ref()
            .map(|images| images.applied.as_slice())
            .unwrap_or(&[])
    }

    /// Drop the loaded image and return to [`SessionState::Empty`].
    pub fn clear(&mut self) {
        self.images = None;
    }
}

/// A [`Session`] that can be shared between callers.
///
/// Each operation holds the lock for its whole read-modify-write, so
/// concurrent `load`/`apply`/`revert` calls are serialized.
#[derive(Debug, Clone, Default)]
pub struct SharedSession {
    inner: Arc<Mutex<Session>>,
}

impl SharedSession {
    pub fn new(session: Session) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    // A transform completes before `current` is replaced, so the session is
    // valid even if a holder panicked.
    fn lock(&self) -> MutexGuard<'_, Session> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn state(&self) -> SessionState {
        self.lock().state()
    }

    pub fn load(&self, buffer: PixelBuffer) {
        self.lock().load(buffer);
    }

    pub fn apply(&self, transform: Transform) -> Result<(), SessionError> {
        self.lock().apply(transform)
    }

    pub fn revert(&self) -> Result<(), SessionError> {
        self.lock().revert()
    }

    /// Copy of the current view.
    pub fn snapshot(&self) -> Result<PixelBuffer, SessionError> {
        self.lock().current_view().cloned()
    }

    /// Run `f` with exclusive access to the session.
    pub fn with<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        f(&mut self.lock())
    }
}


// ============================================================================
// Property-Based Tests
// ============================================================================
