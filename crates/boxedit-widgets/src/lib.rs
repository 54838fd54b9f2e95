//! ratatui rendering for the **boxedit** pop-up editor.
//!
//! The widgets here are stateless: they paint a
//! [`boxedit_core::RenderRequest`] and nothing else, so they can be dropped
//! into any ratatui frame, including one that already shows the caller's own
//! UI underneath.
//!
//! # Widgets
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`editor_box`] | The box itself: border, title, quick help, text, cursor |
//! | [`help`] | Key binding help overlay |
//!
//! # Utilities
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`overlay`] | Centering and clearing helpers for floating panels |

pub mod editor_box;
pub mod help;
pub mod overlay;

pub use editor_box::{draw_request, EditorBox, EditorBoxStyle};
pub use help::{HelpOverlay, HelpStyle};
