//! The read-dispatch-draw loop tying a controller to a screen.

use tracing::{debug, warn};

use crate::controller::{EditorController, Effect, Outcome};
use crate::error::EditorError;
use crate::key::Key;
use crate::screen::Screen;

/// Draw once, then feed keys from `screen` into `editor` until the session
/// finishes, redrawing after every change.  The box is fitted to the screen
/// before the first frame and again on every resize.
///
/// A terminal failure ends the session: the controller is moved to the
/// cancelled state and the error is returned.
pub fn run_session<S: Screen>(
    editor: &mut EditorController,
    screen: &mut S,
) -> Result<Outcome, EditorError> {
    match drive(editor, screen) {
        Ok(outcome) => {
            debug!(accepted = outcome.is_accepted(), "session ended");
            Ok(outcome)
        }
        Err(err) => {
            warn!(error = %err, "terminal failed; cancelling session");
            editor.abort();
            Err(EditorError::Backend(err))
        }
    }
}

fn drive<S: Screen>(editor: &mut EditorController, screen: &mut S) -> std::io::Result<Outcome> {
    fit(editor, screen)?;
    screen.draw(&editor.render())?;
    loop {
        let key = screen.read_key()?;
        if key == Key::Resize {
            fit(editor, screen)?;
        }
        match editor.handle_key(key) {
            Effect::None => {}
            Effect::Redraw => screen.draw(&editor.render())?,
            Effect::Finished(outcome) => return Ok(outcome),
        }
    }
}

fn fit<S: Screen>(editor: &mut EditorController, screen: &mut S) -> std::io::Result<()> {
    if let Some((rows, cols)) = screen.size()? {
        editor.fit_to_screen(rows, cols);
    }
    Ok(())
}
