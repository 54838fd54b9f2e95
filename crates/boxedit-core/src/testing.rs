use std::collections::VecDeque;
use std::io;

use crate::clipboard::Clipboard;
use crate::error::ClipboardError;
use crate::key::Key;
use crate::render::RenderRequest;
use crate::screen::Screen;

/// A headless [`Screen`] that plays back a fixed list of keys and records
/// every frame it is asked to draw.
///
/// When the script runs out, [`read_key`](Screen::read_key) fails with
/// [`io::ErrorKind::UnexpectedEof`], which ends the session the same way a
/// dead terminal would.
///
/// # Example
///
/// ```rust,ignore
/// use boxedit_core::testing::ScriptedTerminal;
/// use boxedit_core::{run_session, EditorConfig, EditorController, Key};
///
/// let mut editor = EditorController::new(EditorConfig::default());
/// let mut term = ScriptedTerminal::new([Key::Char('a'), Key::F(2)]);
/// let outcome = run_session(&mut editor, &mut term).unwrap();
/// assert_eq!(outcome.text(), Some("a"));
/// assert_eq!(term.frames().len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ScriptedTerminal {
    keys: VecDeque<Key>,
    frames: Vec<RenderRequest>,
    draw_budget: Option<usize>,
    size: Option<(u16, u16)>,
}

impl ScriptedTerminal {
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
            frames: Vec::new(),
            draw_budget: None,
            size: None,
        }
    }

    /// Report a screen of `rows` x `cols` cells.
    pub fn with_size(mut self, rows: u16, cols: u16) -> Self {
        self.size = Some((rows, cols));
        self
    }

    /// Change the reported screen size, as a terminal resize would.
    pub fn resize(&mut self, rows: u16, cols: u16) {
        self.size = Some((rows, cols));
    }

    /// Let the first `draws` draws succeed, then fail every later one.
    pub fn fail_draw_after(mut self, draws: usize) -> Self {
        self.draw_budget = Some(draws);
        self
    }

    /// Append more keys to the script.
    pub fn push_keys(&mut self, keys: impl IntoIterator<Item = Key>) {
        self.keys.extend(keys);
    }

    /// Every frame drawn so far, oldest first.
    pub fn frames(&self) -> &[RenderRequest] {
        &self.frames
    }

    /// Keys not yet read.
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl Screen for ScriptedTerminal {
    fn read_key(&mut self) -> io::Result<Key> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "key script exhausted"))
    }

    fn draw(&mut self, request: &RenderRequest) -> io::Result<()> {
        if self.draw_budget == Some(0) {
            return Err(io::Error::other("scripted draw failure"));
        }
        if let Some(budget) = self.draw_budget.as_mut() {
            *budget -= 1;
        }
        self.frames.push(request.clone());
        Ok(())
    }

    fn size(&mut self) -> io::Result<Option<(u16, u16)>> {
        Ok(self.size)
    }
}

/// A [`Clipboard`] that always returns the same text, or always fails.
#[derive(Debug, Clone, Default)]
pub struct StaticClipboard {
    text: Option<String>,
}

impl StaticClipboard {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// A clipboard whose every read fails.
    pub fn failing() -> Self {
        Self { text: None }
    }
}

impl Clipboard for StaticClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        self.text
            .clone()
            .ok_or_else(|| ClipboardError::Read("static clipboard is empty".into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plays_keys_in_order_then_fails() {
        let mut term = ScriptedTerminal::new([Key::Char('a'), Key::Enter]);
        assert_eq!(term.read_key().unwrap(), Key::Char('a'));
        term.push_keys([Key::Esc]);
        assert_eq!(term.remaining(), 2);
        assert_eq!(term.read_key().unwrap(), Key::Enter);
        assert_eq!(term.read_key().unwrap(), Key::Esc);
        let err = term.read_key().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn draw_budget() {
        let request = RenderRequest {
            lines: Vec::new(),
            cursor: None,
            box_size: (1, 1),
            box_location: (0, 0),
            border: false,
            title: None,
            quick_help: String::new(),
            help: None,
            multi_line: false,
        };
        let mut term = ScriptedTerminal::new([]).fail_draw_after(2);
        assert!(term.draw(&request).is_ok());
        assert!(term.draw(&request).is_ok());
        assert!(term.draw(&request).is_err());
        assert_eq!(term.frames().len(), 2);
    }

    #[test]
    fn static_clipboard() {
        assert_eq!(StaticClipboard::new("hi").read_text().unwrap(), "hi");
        assert!(StaticClipboard::failing().read_text().is_err());
    }
}
