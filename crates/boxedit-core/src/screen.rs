//! The terminal capability an editing session drives.

use std::io;

use crate::key::Key;
use crate::render::RenderRequest;

/// A surface that delivers keys and paints [`RenderRequest`]s.
///
/// The real implementation in the `boxedit` crate is backed by ratatui and
/// crossterm; [`ScriptedTerminal`](crate::testing::ScriptedTerminal) plays
/// back a fixed key list for tests.
pub trait Screen {
    /// Block until the next key arrives.
    fn read_key(&mut self) -> io::Result<Key>;

    /// Paint the box described by `request`.
    fn draw(&mut self, request: &RenderRequest) -> io::Result<()>;

    /// Current screen size in (rows, cols), if known.  The session fits the
    /// box to it at startup and after every resize.
    fn size(&mut self) -> io::Result<Option<(u16, u16)>> {
        Ok(None)
    }
}

impl<S: Screen + ?Sized> Screen for &mut S {
    fn read_key(&mut self) -> io::Result<Key> {
        (**self).read_key()
    }

    fn draw(&mut self, request: &RenderRequest) -> io::Result<()> {
        (**self).draw(request)
    }

    fn size(&mut self) -> io::Result<Option<(u16, u16)>> {
        (**self).size()
    }
}
