use std::fmt;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A classified key event.
///
/// The input collaborator turns whatever the terminal reports into one of
/// these variants, so the editor state machine never sees raw platform key
/// codes.  Crossterm events convert through the [`From`] impls below.
///
/// # Example
///
/// ```rust,ignore
/// use boxedit_core::Key;
///
/// let key: Key = crossterm::event::read()?.into();
/// match key {
///     Key::Char(c) => println!("typed {c}"),
///     Key::Ctrl('x') => println!("save"),
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// A printable character (shift already applied).
    Char(char),
    /// A letter pressed with Ctrl, always lowercase.
    Ctrl(char),
    /// A character pressed with Alt.
    Alt(char),
    Enter,
    Tab,
    Backspace,
    Delete,
    Esc,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    /// Ctrl/Alt + Left.
    WordLeft,
    /// Ctrl/Alt + Right.
    WordRight,
    /// Ctrl/Alt + Backspace.
    WordBackspace,
    /// Function key F1..F12.
    F(u8),
    /// A block of text delivered at once (bracketed paste).
    Paste(String),
    /// The terminal was resized; the box should be redrawn.
    Resize,
    /// Anything the editor has no use for (mouse, focus, key release, ...).
    Unknown,
}

impl Key {
    /// Whether this key inserts itself into the buffer.
    pub fn is_printable(&self) -> bool {
        matches!(self, Key::Char(c) if !c.is_control())
    }
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        if event.kind == KeyEventKind::Release {
            return Key::Unknown;
        }
        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
        let alt = event.modifiers.contains(KeyModifiers::ALT);
        match event.code {
            KeyCode::Char(c) if ctrl => Key::Ctrl(c.to_ascii_lowercase()),
            KeyCode::Char(c) if alt => Key::Alt(c),
            KeyCode::Char(c) => Key::Char(c),
            KeyCode::Left if ctrl || alt => Key::WordLeft,
            KeyCode::Right if ctrl || alt => Key::WordRight,
            KeyCode::Backspace if ctrl || alt => Key::WordBackspace,
            KeyCode::Enter => Key::Enter,
            KeyCode::Tab => Key::Tab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Delete => Key::Delete,
            KeyCode::Esc => Key::Esc,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Home => Key::Home,
            KeyCode::End => Key::End,
            KeyCode::PageUp => Key::PageUp,
            KeyCode::PageDown => Key::PageDown,
            KeyCode::F(n) => Key::F(n),
            _ => Key::Unknown,
        }
    }
}

impl From<Event> for Key {
    fn from(event: Event) -> Self {
        match event {
            Event::Key(k) => Key::from(k),
            Event::Paste(s) => Key::Paste(s),
            Event::Resize(_, _) => Key::Resize,
            Event::Mouse(_) | Event::FocusGained | Event::FocusLost => Key::Unknown,
        }
    }
}

/// Short labels in the style of the quick-help line: `^x`, `F2`, `PgUp`.
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Char(c) => write!(f, "{c}"),
            Key::Ctrl(c) => write!(f, "^{c}"),
            Key::Alt(c) => write!(f, "M-{c}"),
            Key::Enter => f.write_str("Enter"),
            Key::Tab => f.write_str("Tab"),
            Key::Backspace => f.write_str("Backspace"),
            Key::Delete => f.write_str("Del"),
            Key::Esc => f.write_str("ESC"),
            Key::Left => f.write_str("Left"),
            Key::Right => f.write_str("Right"),
            Key::Up => f.write_str("Up"),
            Key::Down => f.write_str("Down"),
            Key::Home => f.write_str("Home"),
            Key::End => f.write_str("End"),
            Key::PageUp => f.write_str("PgUp"),
            Key::PageDown => f.write_str("PgDn"),
            Key::WordLeft => f.write_str("^Left"),
            Key::WordRight => f.write_str("^Right"),
            Key::WordBackspace => f.write_str("M-Backspace"),
            Key::F(n) => write!(f, "F{n}"),
            Key::Paste(_) => f.write_str("paste"),
            Key::Resize => f.write_str("resize"),
            Key::Unknown => f.write_str("?"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn plain_and_shifted_chars() {
        assert_eq!(Key::from(press(KeyCode::Char('a'), KeyModifiers::NONE)), Key::Char('a'));
        assert_eq!(Key::from(press(KeyCode::Char('A'), KeyModifiers::SHIFT)), Key::Char('A'));
    }

    #[test]
    fn ctrl_chars_are_lowercased() {
        assert_eq!(Key::from(press(KeyCode::Char('X'), KeyModifiers::CONTROL)), Key::Ctrl('x'));
    }

    #[test]
    fn modified_arrows_become_word_motion() {
        assert_eq!(Key::from(press(KeyCode::Left, KeyModifiers::CONTROL)), Key::WordLeft);
        assert_eq!(Key::from(press(KeyCode::Right, KeyModifiers::ALT)), Key::WordRight);
        assert_eq!(Key::from(press(KeyCode::Backspace, KeyModifiers::ALT)), Key::WordBackspace);
    }

    #[test]
    fn release_events_are_ignored() {
        let mut ev = press(KeyCode::Char('a'), KeyModifiers::NONE);
        ev.kind = KeyEventKind::Release;
        assert_eq!(Key::from(ev), Key::Unknown);
    }

    #[test]
    fn terminal_events() {
        assert_eq!(Key::from(Event::Paste("hi".into())), Key::Paste("hi".into()));
        assert_eq!(Key::from(Event::Resize(80, 24)), Key::Resize);
        assert_eq!(Key::from(Event::FocusLost), Key::Unknown);
    }

    #[test]
    fn control_chars_are_not_printable() {
        assert!(Key::Char('a').is_printable());
        assert!(!Key::Char('\u{7}').is_printable());
        assert!(!Key::Enter.is_printable());
    }

    #[test]
    fn display_labels() {
        assert_eq!(Key::Ctrl('x').to_string(), "^x");
        assert_eq!(Key::F(2).to_string(), "F2");
        assert_eq!(Key::Esc.to_string(), "ESC");
    }
}
