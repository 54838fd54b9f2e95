//! The key-dispatch state machine of an editing session.

use tracing::{debug, trace};

use crate::buffer::{Cursor, TextBuffer};
use crate::clipboard::{Clipboard, NoClipboard};
use crate::config::EditorConfig;
use crate::error::EditError;
use crate::key::Key;
use crate::keymap::{Action, KeyMap};
use crate::render::RenderRequest;
use crate::viewport::Viewport;

const TAB: &str = "    ";

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// Keys edit the buffer.
    Editing,
    /// The help overlay is up; the next key dismisses it.
    HelpShown,
    /// Finished with the text kept.
    Accepted,
    /// Finished with the text discarded.
    Cancelled,
}

impl EditorState {
    pub fn is_finished(self) -> bool {
        matches!(self, EditorState::Accepted | EditorState::Cancelled)
    }
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user accepted; carries the full text.
    Accepted(String),
    /// The user cancelled; nothing is returned.
    Cancelled,
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Outcome::Accepted(_))
    }

    pub fn text(&self) -> Option<&str> {
        match self {
            Outcome::Accepted(text) => Some(text),
            Outcome::Cancelled => None,
        }
    }

    /// `(accepted, text)`, with an empty string for a cancelled session.
    pub fn into_pair(self) -> (bool, String) {
        match self {
            Outcome::Accepted(text) => (true, text),
            Outcome::Cancelled => (false, String::new()),
        }
    }
}

/// What the caller should do after feeding a key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing changed.
    None,
    /// State changed; paint [`EditorController::render`].
    Redraw,
    /// The session is over.
    Finished(Outcome),
}

/// Owns the buffer, cursor and scroll state of one editing session and
/// turns keys into edits.
///
/// # Example
///
/// ```rust,ignore
/// use boxedit_core::{EditorConfig, EditorController, Effect, Key};
///
/// let mut editor = EditorController::new(EditorConfig::new().with_single_line(true));
/// editor.handle_key(Key::Char('h'));
/// editor.handle_key(Key::Char('i'));
/// assert!(matches!(editor.handle_key(Key::Enter), Effect::Finished(_)));
/// ```
pub struct EditorController {
    config: EditorConfig,
    keymap: KeyMap,
    buffer: TextBuffer,
    cursor: Cursor,
    viewport: Viewport,
    /// Text area size (rows, cols) currently in use.
    geometry: (u16, u16),
    state: EditorState,
    clipboard: Box<dyn Clipboard>,
}

impl EditorController {
    /// Start a session from `config`.  Initial text longer than the line cap
    /// is truncated to the cap.
    pub fn new(config: EditorConfig) -> Self {
        let mut buffer = TextBuffer::from_text(&config.initial_text);
        if let Some(limit) = config.line_limit() {
            buffer.truncate_lines(limit);
        }
        let (rows, cols) = config.box_size;
        let keymap = KeyMap::for_config(&config);
        Self {
            config,
            keymap,
            buffer,
            cursor: Cursor::default(),
            viewport: Viewport::new(rows, cols),
            geometry: (rows, cols),
            state: EditorState::Editing,
            clipboard: Box::new(NoClipboard),
        }
    }

    /// Use `clipboard` for the paste action.
    pub fn with_clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }

    /// Replace the key map.
    pub fn with_keymap(mut self, keymap: KeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn keymap(&self) -> &KeyMap {
        &self.keymap
    }

    pub fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn state(&self) -> EditorState {
        self.state
    }

    /// Text area size (rows, cols) the text is currently wrapped to.
    pub fn geometry(&self) -> (u16, u16) {
        self.geometry
    }

    /// Wrap and scroll for a text area of `rows` x `cols` cells.  Returns
    /// whether the size changed.
    pub fn set_geometry(&mut self, rows: u16, cols: u16) -> bool {
        let geometry = (rows.max(1), cols.max(1));
        if geometry == self.geometry {
            return false;
        }
        debug!(?geometry, "text area resized");
        self.geometry = geometry;
        self.viewport = Viewport::new(geometry.0, geometry.1);
        self.viewport.follow(&self.buffer, self.cursor);
        true
    }

    /// Shrink the text area so the whole box fits a screen of `rows` x
    /// `cols` cells, or grow it back toward the configured size.
    pub fn fit_to_screen(&mut self, rows: u16, cols: u16) -> bool {
        let (rows, cols) = self.config.fit_box_size(rows, cols);
        self.set_geometry(rows, cols)
    }

    /// The current text, lines joined with `'\n'`.
    pub fn value(&self) -> String {
        self.buffer.text()
    }

    /// Move the cursor, clamped into the buffer.
    pub fn set_cursor(&mut self, pos: Cursor) {
        self.cursor = self.buffer.clamp(pos);
        self.viewport.follow(&self.buffer, self.cursor);
    }

    /// End the session as cancelled without a key, e.g. after the terminal
    /// failed.
    pub fn abort(&mut self) {
        if !self.state.is_finished() {
            debug!("session aborted");
            self.state = EditorState::Cancelled;
        }
    }

    /// Feed one key.
    pub fn handle_key(&mut self, key: Key) -> Effect {
        match self.state {
            EditorState::Accepted | EditorState::Cancelled => Effect::None,
            EditorState::HelpShown if key == Key::Resize => Effect::Redraw,
            EditorState::HelpShown => {
                self.state = EditorState::Editing;
                Effect::Redraw
            }
            EditorState::Editing => self.dispatch(key),
        }
    }

    /// Build the view of the current state.
    pub fn render(&self) -> RenderRequest {
        let mask = self.config.password_mode.then_some(self.config.mask_glyph);
        let help_shown = self.state == EditorState::HelpShown;
        RenderRequest {
            lines: self.viewport.visible_lines(&self.buffer, mask),
            cursor: if help_shown {
                None
            } else {
                self.viewport.cursor_position(&self.buffer, self.cursor)
            },
            box_size: self.geometry,
            box_location: self.config.box_location,
            border: self.config.box_border,
            title: self.config.title().map(String::from),
            quick_help: self.keymap.quick_help(),
            help: help_shown.then(|| self.keymap.help_entries()),
            multi_line: self.buffer.line_count() > 1,
        }
    }

    fn dispatch(&mut self, key: Key) -> Effect {
        if let Some(action) = self.keymap.resolve(&key) {
            return self.apply(action);
        }
        match key {
            Key::Char(c) if !c.is_control() => self.insert_text(&c.to_string()),
            Key::Paste(text) => self.paste(&text),
            other => {
                trace!(key = %other, "unbound key");
                Effect::None
            }
        }
    }

    fn apply(&mut self, action: Action) -> Effect {
        if let Some(target) = self.motion_target(action) {
            return self.move_to(target);
        }
        match action {
            Action::Accept => self.finish(Outcome::Accepted(self.buffer.text())),
            Action::Cancel => self.finish(Outcome::Cancelled),
            Action::Help => {
                debug!("help shown");
                self.state = EditorState::HelpShown;
                Effect::Redraw
            }
            Action::Newline if self.config.single_line => {
                self.finish(Outcome::Accepted(self.buffer.text()))
            }
            Action::Newline => match self.check_capacity(1) {
                Ok(()) => self.edit(TextBuffer::insert_newline),
                Err(err) => reject(err),
            },
            Action::DeleteForward => self.edit(TextBuffer::delete_forward),
            Action::DeleteBackward => self.edit(TextBuffer::delete_backward),
            Action::DeleteWordBackward => self.edit(TextBuffer::delete_word_backward),
            Action::KillToEnd => self.edit(TextBuffer::delete_to_line_end),
            Action::KillToStart => self.edit(TextBuffer::delete_to_line_start),
            Action::Paste => match self.clipboard.read_text() {
                Ok(text) => self.paste(&text),
                Err(err) => {
                    debug!(error = %err, "paste ignored");
                    Effect::None
                }
            },
            Action::InsertTab => self.insert_text(TAB),
            Action::Redraw => Effect::Redraw,
            // Resolved by `motion_target` above.
            Action::Left
            | Action::Right
            | Action::Up
            | Action::Down
            | Action::WordLeft
            | Action::WordRight
            | Action::Home
            | Action::End
            | Action::PageUp
            | Action::PageDown => Effect::None,
        }
    }

    /// Where a cursor motion lands, or `None` for actions that are not
    /// motions.  Horizontal motions cross line boundaries; vertical ones
    /// clamp the column.
    fn motion_target(&self, action: Action) -> Option<Cursor> {
        let buf = &self.buffer;
        let cur = self.cursor;
        let last_row = buf.line_count() - 1;
        let line_len = buf.line_length(cur.row);
        let end_of_prev = |row: usize| Cursor::new(row - 1, buf.line_length(row - 1));
        let target = match action {
            Action::Left if cur.col > 0 => Cursor::new(cur.row, cur.col - 1),
            Action::Left if cur.row > 0 => end_of_prev(cur.row),
            Action::Right if cur.col < line_len => Cursor::new(cur.row, cur.col + 1),
            Action::Right if cur.row < last_row => Cursor::new(cur.row + 1, 0),
            Action::Up => Cursor::new(cur.row.saturating_sub(1), cur.col),
            Action::Down => Cursor::new((cur.row + 1).min(last_row), cur.col),
            Action::WordLeft if cur.col == 0 && cur.row > 0 => end_of_prev(cur.row),
            Action::WordLeft => Cursor::new(cur.row, buf.prev_word_boundary(cur)),
            Action::WordRight if cur.col == line_len && cur.row < last_row => {
                Cursor::new(cur.row + 1, 0)
            }
            Action::WordRight => Cursor::new(cur.row, buf.next_word_boundary(cur)),
            Action::Home => Cursor::new(cur.row, 0),
            Action::End => Cursor::new(cur.row, line_len),
            Action::PageUp => {
                Cursor::new(cur.row.saturating_sub(self.viewport.height()), cur.col)
            }
            Action::PageDown => Cursor::new(
                (cur.row + self.viewport.height()).min(last_row),
                cur.col,
            ),
            Action::Left | Action::Right => cur,
            _ => return None,
        };
        Some(buf.clamp(target))
    }

    /// Insert text without line breaks at the cursor.
    fn insert_text(&mut self, text: &str) -> Effect {
        if !self.config.single_line {
            if let Err(err) = self.check_capacity(0) {
                return reject(err);
            }
        }
        self.edit(|buf, cur| buf.insert_str(cur, text))
    }

    /// Bulk insert: the first segment goes in at the cursor, each further
    /// segment on a new line.  Segments past the line cap are dropped.
    fn paste(&mut self, text: &str) -> Effect {
        let text = sanitize_paste(text);
        let mut segments = text.split('\n');
        let before = self.footprint();
        if let Some(first) = segments.next() {
            self.cursor = self.buffer.insert_str(self.cursor, first);
        }
        for segment in segments {
            if let Err(err) = self.check_capacity(1) {
                trace!(error = %err, "paste truncated");
                break;
            }
            self.cursor = self.buffer.insert_newline(self.cursor);
            self.cursor = self.buffer.insert_str(self.cursor, segment);
        }
        self.changed_since(before)
    }

    /// Whether `extra` more lines fit under the line cap.
    fn check_capacity(&self, extra: usize) -> Result<(), EditError> {
        match self.config.line_limit() {
            Some(limit) if self.buffer.line_count() + extra > limit => {
                Err(EditError::CapacityExceeded { limit })
            }
            _ => Ok(()),
        }
    }

    fn edit(&mut self, op: impl FnOnce(&mut TextBuffer, Cursor) -> Cursor) -> Effect {
        let before = self.footprint();
        self.cursor = op(&mut self.buffer, self.cursor);
        self.changed_since(before)
    }

    fn move_to(&mut self, pos: Cursor) -> Effect {
        if pos == self.cursor {
            return Effect::None;
        }
        self.cursor = pos;
        self.refresh()
    }

    fn footprint(&self) -> (usize, usize, Cursor) {
        (self.buffer.line_count(), self.buffer.char_count(), self.cursor)
    }

    fn changed_since(&mut self, before: (usize, usize, Cursor)) -> Effect {
        if self.footprint() == before {
            Effect::None
        } else {
            self.refresh()
        }
    }

    fn refresh(&mut self) -> Effect {
        self.viewport.follow(&self.buffer, self.cursor);
        Effect::Redraw
    }

    fn finish(&mut self, outcome: Outcome) -> Effect {
        self.state = if outcome.is_accepted() {
            EditorState::Accepted
        } else {
            EditorState::Cancelled
        };
        debug!(state = ?self.state, "session finished");
        Effect::Finished(outcome)
    }
}

fn reject(err: EditError) -> Effect {
    trace!(error = %err, "edit rejected");
    Effect::None
}

/// Normalise line endings, expand tabs and drop other control characters.
fn sanitize_paste(text: &str) -> String {
    text.replace("\r\n", "\n")
        .chars()
        .filter_map(|c| match c {
            '\r' => Some("\n".to_string()),
            '\t' => Some(TAB.to_string()),
            '\n' => Some("\n".to_string()),
            c if c.is_control() => None,
            c => Some(c.to_string()),
        })
        .collect()
}
