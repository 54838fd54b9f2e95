use boxedit_core::{run_session, EditorConfig, EditorController, EditorError, NoClipboard, Outcome};
use ratatui::backend::Backend;
use ratatui::{Frame, Terminal};
use tracing::debug;

use crate::clipboard::SystemClipboard;
use crate::terminal::{init_terminal, restore_terminal, TerminalOptions, TerminalScreen};

/// A reusable pop-up editor.
///
/// Build it once from an [`EditorConfig`] and call [`run`](Editor::run) as
/// often as needed; every run starts a fresh session from the configured
/// initial text, so a cancelled run leaves nothing behind.
///
/// # Example
///
/// ```rust,ignore
/// use boxedit::{Editor, EditorConfig};
///
/// let editor = Editor::new(EditorConfig::new().with_title("Commit message"));
/// let outcome = editor.run(&mut terminal)?;
/// if let Some(text) = outcome.text() {
///     commit(text);
/// }
/// ```
pub struct Editor {
    config: EditorConfig,
    system_clipboard: bool,
}

impl Editor {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            config,
            system_clipboard: true,
        }
    }

    /// Whether the paste key reads the OS clipboard (default: true).
    /// Bracketed paste from the terminal works either way.
    pub fn with_system_clipboard(mut self, enabled: bool) -> Self {
        self.system_clipboard = enabled;
        self
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Replace the config used by later runs.
    pub fn set_config(&mut self, config: EditorConfig) {
        self.config = config;
    }

    /// A fresh controller for one session.
    pub fn controller(&self) -> EditorController {
        let controller = EditorController::new(self.config.clone());
        if self.system_clipboard {
            controller.with_clipboard(SystemClipboard::new())
        } else {
            controller.with_clipboard(NoClipboard)
        }
    }

    /// Run one session inside a terminal the caller already set up.
    pub fn run<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<Outcome, EditorError> {
        let mut screen = TerminalScreen::new(terminal);
        run_session(&mut self.controller(), &mut screen)
    }

    /// Like [`run`](Editor::run), but repaints the caller's screen with
    /// `background` underneath the box on every frame.
    pub fn run_over<'t, B, F>(
        &self,
        terminal: &'t mut Terminal<B>,
        background: F,
    ) -> Result<Outcome, EditorError>
    where
        B: Backend,
        F: FnMut(&mut Frame) + 't,
    {
        let mut screen = TerminalScreen::new(terminal).with_background(background);
        run_session(&mut self.controller(), &mut screen)
    }
}

/// Run one session on a terminal of its own with default options.
///
/// Returns `(true, text)` when the user accepts and `(false, "")` when they
/// cancel.
pub fn edit(config: EditorConfig) -> Result<(bool, String), EditorError> {
    edit_with(config, TerminalOptions::default())
}

/// Run one session with custom terminal options.
///
/// The terminal is restored before returning, whether the session finished
/// normally or failed.
pub fn edit_with(
    config: EditorConfig,
    options: TerminalOptions,
) -> Result<(bool, String), EditorError> {
    if let Some(path) = &options.log_file {
        crate::logging::init_file_logging(path)?;
    }
    debug!(?options, "starting session");

    let mut terminal = match init_terminal(&options) {
        Ok(terminal) => terminal,
        Err(err) => {
            restore_terminal(&options).ok();
            return Err(err.into());
        }
    };
    let result = Editor::new(config).run(&mut terminal);
    restore_terminal(&options)?;
    Ok(result?.into_pair())
}
