//! Edit session bindings.
//!
//! `JsEditor` owns the original and current image for one editing session in
//! WASM memory, so the UI only moves pixels across the boundary when it needs
//! to draw them.
//!
//! # Example
//!
//! ```typescript
//! import { JsEditor } from '@pixelflip/wasm';
//!
//! const editor = new JsEditor({ frame: { format: 'jpeg', quality: 85 } });
//! editor.load_bytes(new Uint8Array(await file.arrayBuffer()), file.name);
//! editor.dispatch('rotate-right');
//! editor.dispatch('greyscale');
//! const blob = new Blob([editor.current_frame()], { type: editor.frame_mime_type() });
//! editor.revert();
//! ```

use crate::types::{to_js_error, JsPixelBuffer};
use pixelflip_core::decode::{decode_image, DecodeError};
use pixelflip_core::{Command, EditorConfig, Session, SessionError, SessionState, Transform};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Plain-object view of the session handed to JavaScript by
/// [`JsEditor::summary`].
#[derive(Debug, Serialize)]
struct EditSummary<'a> {
    state: SessionState,
    name: Option<&'a str>,
    width: u32,
    height: u32,
    applied: &'a [Transform],
}

/// An editing session exposed to JavaScript.
#[wasm_bindgen]
pub struct JsEditor {
    session: Session,
    config: EditorConfig,
    name: Option<String>,
}

#[wasm_bindgen]
impl JsEditor {
    /// Create an editor.
    ///
    /// `config` may be `undefined`/`null` for defaults, or an object shaped
    /// like `{ decode: { apply_orientation }, frame: { format, quality } }`.
    /// Missing fields fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if `config` does not match that shape.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsEditor, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            EditorConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };
        Ok(JsEditor::with_config(config))
    }

    /// Decode `bytes` and start a new session with them.
    ///
    /// `name` (typically the file name) is what `loaded_name` reports
    /// afterwards.
    ///
    /// # Errors
    ///
    /// Returns an error if the bytes cannot be decoded. The previous session
    /// and its name, if any, are kept.
    pub fn load_bytes(&mut self, bytes: &[u8], name: Option<String>) -> Result<(), JsValue> {
        self.load(bytes, name).map_err(|e| {
            let message = format!("Could not load image: {}", e);
            web_sys::console::warn_1(&JsValue::from_str(&message));
            to_js_error(message)
        })
    }

    /// Run a named command (`mirror-horizontal`, `rotate-left`, `invert`,
    /// `greyscale`, `revert`, ...).
    ///
    /// Returns `false` when the command is not available because no image is
    /// loaded.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown names and for `load`, which goes through
    /// `load_bytes` instead.
    pub fn dispatch(&mut self, name: &str) -> Result<bool, JsValue> {
        let command = name.parse::<Command>().map_err(to_js_error)?;
        if let Command::Load(_) = command {
            return Err(to_js_error("Use load_bytes to load an image"));
        }
        self.run(&command).map_err(to_js_error)
    }

    /// Name given with the last successful `load_bytes`.
    pub fn loaded_name(&self) -> Option<String> {
        self.name.clone()
    }

    /// Discard all edits. Returns `false` when no image is loaded.
    pub fn revert(&mut self) -> bool {
        self.session.revert().is_ok()
    }

    /// `"empty"`, `"loaded"` or `"edited"`.
    pub fn state(&self) -> String {
        match self.session.state() {
            SessionState::Empty => "empty",
            SessionState::Loaded => "loaded",
            SessionState::Edited => "edited",
        }
        .to_string()
    }

    /// Whether transform and revert commands are available.
    pub fn can_transform(&self) -> bool {
        self.session.has_image()
    }

    /// Number of transforms applied since the last load or revert.
    pub fn edit_count(&self) -> usize {
        self.session.applied().len()
    }

    /// Session state, loaded name, current dimensions and applied transforms
    /// as a plain object, e.g. `{ state: 'edited', name: 'cat.png', width: 2,
    /// height: 4, applied: [{ kind: 'rotate', direction: 'right' }] }`.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn summary(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.edit_summary())?)
    }

    /// Copy of the image currently on display.
    ///
    /// # Errors
    ///
    /// Returns an error if no image is loaded.
    pub fn current_view(&self) -> Result<JsPixelBuffer, JsValue> {
        self.session
            .current_view()
            .map(|view| JsPixelBuffer::from_buffer(view.clone()))
            .map_err(to_js_error)
    }

    /// Copy of the image as it was loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if no image is loaded.
    pub fn original(&self) -> Result<JsPixelBuffer, JsValue> {
        self.session
            .original()
            .map(|view| JsPixelBuffer::from_buffer(view.clone()))
            .map_err(to_js_error)
    }

    /// The current view encoded in the configured frame format.
    ///
    /// # Errors
    ///
    /// Returns an error if no image is loaded or the view is empty.
    pub fn current_frame(&self) -> Result<Vec<u8>, JsValue> {
        let view = self.session.current_view().map_err(to_js_error)?;
        self.config.frame.encode(view).map_err(to_js_error)
    }

    /// MIME type of the bytes returned by `current_frame`.
    pub fn frame_mime_type(&self) -> String {
        self.config.frame.mime_type().to_string()
    }
}

impl JsEditor {
    pub(crate) fn with_config(config: EditorConfig) -> Self {
        Self {
            session: Session::new(),
            config,
            name: None,
        }
    }

    fn edit_summary(&self) -> EditSummary<'_> {
        let (width, height) = self
            .session
            .current_view()
            .map(|view| view.dimensions())
            .unwrap_or((0, 0));
        EditSummary {
            state: self.session.state(),
            name: self.name.as_deref(),
            width,
            height,
            applied: self.session.applied(),
        }
    }

    pub(crate) fn load(&mut self, bytes: &[u8], name: Option<String>) -> Result<(), DecodeError> {
        let buffer = decode_image(bytes, &self.config.decode)?;
        self.session.load(buffer);
        self.name = name;
        Ok(())
    }

    /// Apply a non-load command; `Ok(false)` if it is not enabled.
    pub(crate) fn run(&mut self, command: &Command) -> Result<bool, SessionError> {
        if !command.is_enabled(self.session.state()) {
            return Ok(false);
        }
        match command.transform() {
            Some(transform) => self.session.apply(transform)?,
            None => self.session.revert()?,
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pixelflip_core::encode::encode_png;
    use pixelflip_core::{FrameFormat, PixelBuffer, Rgb};

    fn sample_png() -> Vec<u8> {
        let buffer =
            PixelBuffer::from_pixels(2, 1, vec![Rgb::new(10, 20, 30), Rgb::new(40, 50, 60)])
                .unwrap();
        encode_png(&buffer).unwrap()
    }

    #[test]
    fn test_starts_empty() {
        let editor = JsEditor::with_config(EditorConfig::default());
        assert_eq!(editor.state(), "empty");
        assert!(!editor.can_transform());
        assert_eq!(editor.frame_mime_type(), "image/png");
    }

    #[test]
    fn test_commands_disabled_without_image() {
        let mut editor = JsEditor::with_config(EditorConfig::default());
        assert_eq!(editor.run(&Command::Invert), Ok(false));
        assert_eq!(editor.run(&Command::Revert), Ok(false));
        assert!(!editor.revert());
        assert_eq!(editor.state(), "empty");
    }

    #[test]
    fn test_load_and_edit() {
        let mut editor = JsEditor::with_config(EditorConfig::default());
        editor.load(&sample_png(), Some("sample.png".into())).unwrap();
        assert_eq!(editor.state(), "loaded");

        assert_eq!(editor.run(&Command::RotateRight), Ok(true));
        assert_eq!(editor.run(&Command::Invert), Ok(true));
        assert_eq!(editor.state(), "edited");
        assert_eq!(editor.edit_count(), 2);

        let view = editor.session.current_view().unwrap();
        assert_eq!(view.dimensions(), (1, 2));
        assert_eq!(view.get(0, 0).unwrap(), Rgb::new(245, 235, 225));
    }

    #[test]
    fn test_revert_restores_original() {
        let mut editor = JsEditor::with_config(EditorConfig::default());
        editor.load(&sample_png(), Some("sample.png".into())).unwrap();
        editor.run(&Command::Greyscale).unwrap();
        editor.run(&Command::MirrorVertical).unwrap();

        assert!(editor.revert());
        assert_eq!(editor.state(), "loaded");
        assert_eq!(
            editor.session.current_view().unwrap(),
            editor.session.original().unwrap()
        );
    }

    #[test]
    fn test_failed_load_keeps_session() {
        let mut editor = JsEditor::with_config(EditorConfig::default());
        editor.load(&sample_png(), Some("sample.png".into())).unwrap();
        editor.run(&Command::Invert).unwrap();

        assert_eq!(
            editor.load(&[1, 2, 3], Some("broken.png".into())),
            Err(DecodeError::InvalidFormat)
        );
        assert_eq!(editor.state(), "edited");
        assert_eq!(editor.edit_count(), 1);
        assert_eq!(editor.loaded_name().as_deref(), Some("sample.png"));
    }

    #[test]
    fn test_loaded_name_follows_last_load() {
        let mut editor = JsEditor::with_config(EditorConfig::default());
        assert_eq!(editor.loaded_name(), None);

        editor.load(&sample_png(), Some("a.png".into())).unwrap();
        assert_eq!(editor.loaded_name().as_deref(), Some("a.png"));

        editor.load(&sample_png(), None).unwrap();
        assert_eq!(editor.loaded_name(), None);
    }

    #[test]
    fn test_edit_summary() {
        let mut editor = JsEditor::with_config(EditorConfig::default());
        let summary = editor.edit_summary();
        assert_eq!(summary.state, SessionState::Empty);
        assert_eq!(summary.name, None);
        assert_eq!((summary.width, summary.height), (0, 0));

        editor.load(&sample_png(), Some("sample.png".into())).unwrap();
        editor.run(&Command::RotateLeft).unwrap();
        let summary = editor.edit_summary();
        assert_eq!(summary.state, SessionState::Edited);
        assert_eq!(summary.name, Some("sample.png"));
        assert_eq!((summary.width, summary.height), (1, 2));
        assert_eq!(summary.applied, &[Command::RotateLeft.transform().unwrap()]);
    }

    #[test]
    fn test_jpeg_frame_config() {
        let config = EditorConfig {
            frame: FrameFormat::jpeg(),
            ..EditorConfig::default()
        };
        let editor = JsEditor::with_config(config);
        assert_eq!(editor.frame_mime_type(), "image/jpeg");
    }
}
