//! Wires the command surface to the session, image source and display sink.
//!
//! The editor is the only place that talks to collaborators: it asks the
//! source for pixels on `Load`, runs the session operation, and hands the
//! resulting view to the sink.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::buffer::PixelBuffer;
use crate::command::{Command, CommandError};
use crate::decode::{DecodeError, DecodeOptions, ImageSource};
use crate::display::DisplaySink;
use crate::encode::FrameFormat;
use crate::session::{Session, SessionError, SessionState};

/// Editor configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// How loaded bytes are decoded.
    pub decode: DecodeOptions,
    /// Format of the frames handed to frame-encoding sinks.
    pub frame: FrameFormat,
}

/// Errors surfaced by [`Editor::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditorError {
    /// The image could not be loaded; the session is unchanged.
    #[error("Could not load image: {0}")]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Command(#[from] CommandError),
}

/// What a dispatched command did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The session changed and the new view was presented.
    Presented,
    /// The command was not available in the current state and did nothing.
    Ignored,
}

/// Drives a [`Session`] from user commands.
#[derive(Debug)]
pub struct Editor<S, D> {
    source: S,
    sink: D,
    session: Session,
    locator: Option<String>,
}

impl<S: ImageSource, D: DisplaySink> Editor<S, D> {
    pub fn new(source: S, sink: D) -> Self {
        Self {
            source,
            sink,
            session: Session::new(),
            locator: None,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> SessionState {
        self.session.state()
    }

    pub fn sink(&self) -> &D {
        &self.sink
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Where the loaded image came from, for display next to it.
    ///
    /// Only a successful load changes this.
    pub fn loaded_locator(&self) -> Option<&str> {
        self.locator.as_deref()
    }

    /// The view currently on display.
    pub fn current_view(&self) -> Result<&PixelBuffer, SessionError> {
        self.session.current_view()
    }

    /// Parse and dispatch a named command (see [`Command`]'s `FromStr`).
    pub fn dispatch_str(&mut self, name: &str) -> Result<Outcome, EditorError> {
        let command = name.parse::<Command>()?;
        self.dispatch(command)
    }

    /// Execute a user command.
    ///
    /// Commands that are not enabled in the current state return
    /// [`Outcome::Ignored`] rather than an error. A failed load leaves the
    /// session exactly as it was.
    pub fn dispatch(&mut self, command: Command) -> Result<Outcome, EditorError> {
        if !command.is_enabled(self.session.state()) {
            debug!(%command, "Ignoring command with no image loaded");
            return Ok(Outcome::Ignored);
        }

        match command {
            Command::Load(locator) => {
                let buffer = self.source.open(&locator).map_err(|e| {
                    warn!(%locator, error = %e, "Failed to load image");
                    e
                })?;
                info!(
                    %locator,
                    width = buffer.width(),
                    height = buffer.height(),
                    "Loaded image"
                );
                self.session.load(buffer);
                self.locator = Some(locator);
            }
            Command::Revert => {
                info!(discarded = self.session.applied().len(), "Reverting edits");
                self.session.revert()?;
            }
            other => {
                if let Some(transform) = other.transform() {
                    debug!(?transform, "Applying transform");
                    self.session.apply(transform)?;
                }
            }
        }

        self.sink.present(self.session.current_view()?);
        Ok(Outcome::Presented)
    }
}
