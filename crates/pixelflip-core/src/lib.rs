//! Pixelflip Core - Image transform library
//!
//! This crate provides the core functionality for pixelflip: an owned RGB
//! pixel buffer, pure mirror/rotate/invert/greyscale transforms, and an edit
//! session that tracks the original and current image so edits can be
//! reverted.
//!
//! # Module Structure
//!
//! - `buffer` - [`PixelBuffer`] and [`Rgb`]
//! - `transform` - The transform engine
//! - `session` - Original/current image state machine
//! - `decode` - Image sources and byte decoding
//! - `encode` - PNG/JPEG encoding
//! - `display` - Display sinks
//! - `command` - User intents
//! - `editor` - Wiring of commands, session, source and sink

pub mod buffer;
pub mod command;
pub mod decode;
pub mod display;
pub mod editor;
pub mod encode;
pub mod session;
pub mod transform;

pub use buffer::{BufferError, PixelBuffer, Rgb};
pub use command::{Command, CommandError, CommandGroup};
pub use decode::{DecodeError, DecodeOptions, FileSource, ImageSource, MemorySource};
pub use display::{DisplaySink, FrameSink, NullSink};
pub use editor::{Editor, EditorConfig, EditorError, Outcome};
pub use encode::{EncodeError, FrameFormat};
pub use session::{Session, SessionError, SessionState, SharedSession};
pub use transform::{greyscale, invert, mirror, rotate, MirrorAxis, RotateDirection, Transform};
