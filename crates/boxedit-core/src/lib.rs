//! Core of the **boxedit** pop-up text editor.
//!
//! `boxedit-core` holds everything about an editing session that does not
//! touch a real terminal: the text buffer, key classification, key bindings,
//! wrapping and scrolling, and the state machine that turns keys into edits.
//! Terminal I/O and the system clipboard are reached through the [`Screen`]
//! and [`Clipboard`] traits, so the whole session can be driven headlessly
//! in tests.
//!
//! # Key types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`EditorConfig`] | Construction options: initial text, box geometry, modes |
//! | [`EditorController`] | Owns buffer, cursor and scroll; dispatches [`Key`]s |
//! | [`TextBuffer`] | Logical lines with cursor-relative edit operations |
//! | [`Viewport`] | Word wrapping and minimal scrolling |
//! | [`KeyMap`] | Keys to [`Action`]s, plus the help text derived from them |
//! | [`RenderRequest`] | Plain data describing one frame |
//! | [`ScriptedTerminal`](testing::ScriptedTerminal) | Headless [`Screen`] for tests |
//!
//! # Session lifecycle
//!
//! 1. **construct** -- [`EditorController::new`] loads the initial text,
//!    truncated to the line cap, with the cursor at the origin.
//! 2. **draw** -- the screen paints [`EditorController::render`].
//! 3. **dispatch** -- each key goes through [`EditorController::handle_key`],
//!    which returns an [`Effect`].
//! 4. **repeat** -- 2-3 repeat until the effect is [`Effect::Finished`].
//!
//! [`run_session`] implements this loop.
//!
//! # Quick example
//!
//! ```ignore
//! use boxedit_core::testing::ScriptedTerminal;
//! use boxedit_core::{run_session, EditorConfig, EditorController, Key};
//!
//! let config = EditorConfig::new().with_title("Name").with_single_line(true);
//! let mut editor = EditorController::new(config);
//! let mut term = ScriptedTerminal::new([Key::Char('o'), Key::Char('k'), Key::Enter]);
//! let (accepted, text) = run_session(&mut editor, &mut term)?.into_pair();
//! assert!(accepted);
//! assert_eq!(text, "ok");
//! ```

pub mod buffer;
pub mod clipboard;
pub mod config;
pub mod controller;
pub mod error;
pub mod key;
pub mod keymap;
pub mod render;
pub mod screen;
pub mod session;
pub mod testing;
pub mod viewport;

pub use buffer::{Cursor, TextBuffer};
pub use clipboard::{Clipboard, NoClipboard};
pub use config::EditorConfig;
pub use controller::{EditorController, EditorState, Effect, Outcome};
pub use error::{ClipboardError, EditError, EditorError};
pub use key::Key;
pub use keymap::{Action, Binding, HelpEntry, KeyMap};
pub use render::RenderRequest;
pub use screen::Screen;
pub use session::run_session;
pub use viewport::{DisplayLine, Viewport, CONTROL_GLYPH};
