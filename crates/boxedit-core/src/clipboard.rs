//! The clipboard capability consumed by the paste action.

use crate::error::ClipboardError;

/// Something that can hand the editor a block of text to paste.
///
/// The system implementation lives in the `boxedit` crate; tests use
/// [`StaticClipboard`](crate::testing::StaticClipboard).
pub trait Clipboard {
    /// Read the current clipboard contents as text.
    fn read_text(&mut self) -> Result<String, ClipboardError>;
}

/// A clipboard that is never available.  The default for new controllers.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoClipboard;

impl Clipboard for NoClipboard {
    fn read_text(&mut self) -> Result<String, ClipboardError> {
        Err(ClipboardError::Unavailable("no clipboard configured".into()))
    }
}
