//! Key bindings: which [`Key`]s trigger which editor [`Action`]s.
//!
//! The same table drives key dispatch, the quick-help text in the box title
//! and the entries of the help overlay.

use crate::config::EditorConfig;
use crate::key::Key;

/// What the editor does in response to a bound key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Finish the session, returning the text.
    Accept,
    /// Finish the session, discarding the text.
    Cancel,
    /// Show the key help overlay.
    Help,
    /// Split the line at the cursor (accepts in single-line mode).
    Newline,
    Left,
    Right,
    Up,
    Down,
    WordLeft,
    WordRight,
    Home,
    End,
    PageUp,
    PageDown,
    DeleteForward,
    DeleteBackward,
    DeleteWordBackward,
    KillToEnd,
    KillToStart,
    /// Insert the clipboard contents.
    Paste,
    /// Insert four spaces.
    InsertTab,
    /// Repaint without changing anything.
    Redraw,
}

/// A set of keys mapped to one action, with a description for help display.
#[derive(Debug, Clone)]
pub struct Binding {
    /// Keys that trigger this binding.
    pub keys: Vec<Key>,
    /// The action performed.
    pub action: Action,
    /// Human-readable description shown in the help overlay.
    pub description: String,
    /// Disabled bindings never match and are left out of help.
    pub enabled: bool,
}

impl Binding {
    pub fn new(keys: Vec<Key>, action: Action, description: impl Into<String>) -> Self {
        Self {
            keys,
            action,
            description: description.into(),
            enabled: true,
        }
    }

    /// Whether `key` triggers this binding.  Always `false` when disabled.
    pub fn matches(&self, key: &Key) -> bool {
        self.enabled && self.keys.iter().any(|k| k == key)
    }

    /// Set whether this binding is enabled.
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Keys joined with `/`, e.g. `F2/^x`.
    pub fn label(&self) -> String {
        self.keys
            .iter()
            .map(Key::to_string)
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// One row of the help overlay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpEntry {
    pub keys: String,
    pub description: String,
}

/// An ordered list of bindings.  The first enabled binding matching a key
/// wins.
#[derive(Debug, Clone)]
pub struct KeyMap {
    bindings: Vec<Binding>,
}

impl KeyMap {
    pub fn new(bindings: Vec<Binding>) -> Self {
        Self { bindings }
    }

    /// The standard bindings, adjusted for single-line mode and for whether
    /// the help overlay is available.
    pub fn for_config(config: &EditorConfig) -> Self {
        let accept_keys = if config.single_line {
            vec![Key::F(2), Key::Enter, Key::Ctrl('x')]
        } else {
            vec![Key::F(2), Key::Ctrl('x')]
        };
        Self::new(vec![
            Binding::new(accept_keys, Action::Accept, "Save and exit"),
            Binding::new(
                vec![Key::F(3), Key::Esc, Key::Ctrl('c')],
                Action::Cancel,
                "Exit without saving",
            ),
            Binding::new(vec![Key::F(1)], Action::Help, "Show this help")
                .enabled(config.help_overlay),
            Binding::new(vec![Key::Enter], Action::Newline, "Insert line at cursor")
                .enabled(!config.single_line),
            Binding::new(vec![Key::Left, Key::Ctrl('b')], Action::Left, "Cursor left"),
            Binding::new(vec![Key::Right, Key::Ctrl('f')], Action::Right, "Cursor right"),
            Binding::new(vec![Key::Up, Key::Ctrl('p')], Action::Up, "Cursor up"),
            Binding::new(vec![Key::Down, Key::Ctrl('n')], Action::Down, "Cursor down"),
            Binding::new(
                vec![Key::WordLeft, Key::Alt('b')],
                Action::WordLeft,
                "Previous word",
            ),
            Binding::new(
                vec![Key::WordRight, Key::Alt('f')],
                Action::WordRight,
                "Next word",
            ),
            Binding::new(vec![Key::Home, Key::Ctrl('a')], Action::Home, "Beginning of line"),
            Binding::new(vec![Key::End, Key::Ctrl('e')], Action::End, "End of line"),
            Binding::new(vec![Key::PageUp], Action::PageUp, "Page up"),
            Binding::new(vec![Key::PageDown], Action::PageDown, "Page down"),
            Binding::new(
                vec![Key::Delete, Key::Ctrl('d')],
                Action::DeleteForward,
                "Delete current char",
            ),
            Binding::new(
                vec![Key::Backspace, Key::Ctrl('h')],
                Action::DeleteBackward,
                "Delete previous char",
            ),
            Binding::new(
                vec![Key::Ctrl('w'), Key::WordBackspace],
                Action::DeleteWordBackward,
                "Delete previous word",
            ),
            Binding::new(vec![Key::Ctrl('k')], Action::KillToEnd, "Delete to end of line"),
            Binding::new(vec![Key::Ctrl('u')], Action::KillToStart, "Delete to start of line"),
            Binding::new(vec![Key::Ctrl('v')], Action::Paste, "Paste clipboard"),
            Binding::new(vec![Key::Tab], Action::InsertTab, "Insert four spaces"),
            Binding::new(vec![Key::Resize, Key::Ctrl('l')], Action::Redraw, "Redraw"),
        ])
    }

    /// The action bound to `key`, if any.
    pub fn resolve(&self, key: &Key) -> Option<Action> {
        self.bindings
            .iter()
            .find(|b| b.matches(key))
            .map(|b| b.action)
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Entries for the help overlay, in binding order.
    pub fn help_entries(&self) -> Vec<HelpEntry> {
        self.bindings
            .iter()
            .filter(|b| b.enabled && b.action != Action::Redraw)
            .map(|b| HelpEntry {
                keys: b.label(),
                description: b.description.clone(),
            })
            .collect()
    }

    /// The one-line reminder shown next to the title, e.g.
    /// `F2/^x: Save, F3/ESC/^c: Cancel`.
    pub fn quick_help(&self) -> String {
        let label = |action: Action| {
            self.bindings
                .iter()
                .find(|b| b.enabled && b.action == action)
                .map(Binding::label)
        };
        let mut parts = Vec::new();
        if let Some(keys) = label(Action::Accept) {
            parts.push(format!("{keys}: Save"));
        }
        if let Some(keys) = label(Action::Cancel) {
            parts.push(format!("{keys}: Cancel"));
        }
        if let Some(keys) = label(Action::Help) {
            parts.push(format!("{keys}: Help"));
        }
        parts.join(", ")
    }
}
