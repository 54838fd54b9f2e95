//! **boxedit** -- a pop-up text-entry box for terminal UIs.
//!
//! This is the umbrella crate.  It re-exports the session core and the
//! widgets, and adds what needs a real terminal: raw-mode setup and
//! teardown, the crossterm key source, the system clipboard and file
//! logging.
//!
//! ```toml
//! [dependencies]
//! boxedit = "0.1"
//! ```
//!
//! # Re-exports
//!
//! * All public items from [`boxedit_core`] are available at the crate root
//!   ([`EditorConfig`], [`EditorController`], [`Key`], [`Outcome`],
//!   [`run_session`], etc.).
//! * The [`widgets`] module re-exports everything from [`boxedit_widgets`].
//! * [`ratatui`] and [`crossterm`] are re-exported so downstream crates do
//!   not need to depend on them directly.
//!
//! # Quick start
//!
//! ```ignore
//! use boxedit::EditorConfig;
//!
//! let config = EditorConfig::new()
//!     .with_title("Name")
//!     .with_box_size(1, 40)
//!     .with_single_line(true);
//! let (accepted, name) = boxedit::edit(config)?;
//! if accepted {
//!     println!("hello, {name}");
//! }
//! ```
//!
//! Inside an application that already owns a ratatui terminal, use
//! [`Editor::run_over`] so the box floats over the existing screen.

pub mod clipboard;
pub mod editor;
pub mod logging;
pub mod terminal;

pub use boxedit_core::*;
pub mod widgets {
    pub use boxedit_widgets::*;
}

pub use clipboard::SystemClipboard;
pub use editor::{edit, edit_with, Editor};
pub use logging::init_file_logging;
pub use terminal::{OutputTarget, TerminalOptions, TerminalScreen};

// Re-export dependencies for downstream crates
pub use crossterm;
pub use ratatui;
