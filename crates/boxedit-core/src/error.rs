/// Errors that end an editing session early.
#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    /// The terminal failed to read a key, draw, or set itself up.
    #[error("terminal backend error: {0}")]
    Backend(#[from] std::io::Error),
}

/// Errors from a [`Clipboard`](crate::clipboard::Clipboard) collaborator.
///
/// These never end a session; the paste key simply does nothing.
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    /// No clipboard is available in this environment.
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    /// The clipboard exists but reading text from it failed.
    #[error("clipboard read failed: {0}")]
    Read(String),
}

/// Reasons an edit is rejected.  Rejections leave the editor untouched and
/// are only ever logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EditError {
    /// The edit would grow the buffer past its line cap.
    #[error("line limit of {limit} reached")]
    CapacityExceeded { limit: usize },
}
