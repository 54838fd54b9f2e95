//! Terminal setup and teardown, and the ratatui-backed [`Screen`].

use std::io::{self, stderr, stdout, Stderr, Stdout, Write};
use std::path::PathBuf;

use boxedit_core::{Key, RenderRequest, Screen};
use boxedit_widgets::draw_request;
use crossterm::{
    cursor,
    event::{self, DisableBracketedPaste, EnableBracketedPaste},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::{Frame, Terminal};

/// Output target for the editor box.
///
/// By default the box renders to **stdout**.  When stdout is piped (e.g. the
/// accepted text is being captured), switch to
/// [`Stderr`](OutputTarget::Stderr) so the box goes to the terminal while the
/// text flows through the pipe.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    /// Write to stdout (default).
    #[default]
    Stdout,
    /// Write to stderr.
    Stderr,
}

/// Writer that wraps either stdout or stderr.
pub enum Output {
    Stdout(Stdout),
    Stderr(Stderr),
}

impl Write for Output {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Output::Stdout(w) => w.write(buf),
            Output::Stderr(w) => w.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Output::Stdout(w) => w.flush(),
            Output::Stderr(w) => w.flush(),
        }
    }
}

impl Output {
    fn new(target: OutputTarget) -> Self {
        match target {
            OutputTarget::Stdout => Output::Stdout(stdout()),
            OutputTarget::Stderr => Output::Stderr(stderr()),
        }
    }
}

/// How [`edit_with`](crate::edit_with) prepares the terminal.
///
/// # Example
///
/// ```rust,ignore
/// use boxedit::{OutputTarget, TerminalOptions};
///
/// let opts = TerminalOptions {
///     output: OutputTarget::Stderr,
///     alt_screen: false,
///     ..TerminalOptions::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalOptions {
    /// Draw in the alternate screen (default: true).
    pub alt_screen: bool,
    /// Deliver pasted text as one event (default: true).
    pub bracketed_paste: bool,
    /// Restore the terminal before a panic message is printed (default: true).
    pub catch_panics: bool,
    /// Send `tracing` output to this file.
    pub log_file: Option<PathBuf>,
    /// Output target: stdout (default) or stderr.
    pub output: OutputTarget,
}

impl Default for TerminalOptions {
    fn default() -> Self {
        Self {
            alt_screen: true,
            bracketed_paste: true,
            catch_panics: true,
            log_file: None,
            output: OutputTarget::default(),
        }
    }
}

/// Put the terminal into raw mode and build a ratatui terminal over it.
pub fn init_terminal(options: &TerminalOptions) -> io::Result<Terminal<CrosstermBackend<Output>>> {
    // Install panic hook that restores terminal (only once to avoid stacking)
    if options.catch_panics {
        use std::sync::Once;
        static HOOK_INSTALLED: Once = Once::new();
        let alt_screen = options.alt_screen;
        let output_target = options.output;
        HOOK_INSTALLED.call_once(|| {
            let original_hook = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |info| {
                let _ = restore_terminal_minimal(alt_screen, output_target);
                original_hook(info);
            }));
        });
    }

    enable_raw_mode()?;
    let mut writer = Output::new(options.output);
    if options.alt_screen {
        execute!(writer, EnterAlternateScreen)?;
    }
    if options.bracketed_paste {
        execute!(writer, EnableBracketedPaste)?;
    }
    execute!(writer, cursor::Hide)?;

    Terminal::new(CrosstermBackend::new(writer))
}

/// Undo [`init_terminal`].
pub fn restore_terminal(options: &TerminalOptions) -> io::Result<()> {
    restore_terminal_minimal(options.alt_screen, options.output)
}

fn restore_terminal_minimal(alt_screen: bool, output_target: OutputTarget) -> io::Result<()> {
    // Best effort: keep going so as much terminal state as possible comes back.
    let raw = disable_raw_mode();
    let mut writer = Output::new(output_target);
    execute!(writer, DisableBracketedPaste).ok();
    execute!(writer, cursor::Show).ok();
    if alt_screen {
        execute!(writer, LeaveAlternateScreen).ok();
    }
    raw
}

/// Block on crossterm for the next event and classify it.
pub fn read_crossterm_key() -> io::Result<Key> {
    Ok(Key::from(event::read()?))
}

type Painter<'t> = Box<dyn FnMut(&mut Frame) + 't>;
type KeySource<'t> = Box<dyn FnMut() -> io::Result<Key> + 't>;

/// A [`Screen`] drawing into a ratatui [`Terminal`] owned by the caller.
///
/// Keys come from crossterm unless another source is supplied with
/// [`with_input`](Self::with_input).  An optional background painter runs
/// before the box on every frame, so the caller's own UI stays visible
/// around it.
pub struct TerminalScreen<'t, B: Backend> {
    terminal: &'t mut Terminal<B>,
    background: Option<Painter<'t>>,
    input: KeySource<'t>,
}

impl<'t, B: Backend> TerminalScreen<'t, B> {
    pub fn new(terminal: &'t mut Terminal<B>) -> Self {
        Self {
            terminal,
            background: None,
            input: Box::new(read_crossterm_key),
        }
    }

    /// Repaint with `paint` underneath the box each frame.
    pub fn with_background(mut self, paint: impl FnMut(&mut Frame) + 't) -> Self {
        self.background = Some(Box::new(paint));
        self
    }

    /// Read keys from `input` instead of crossterm.
    pub fn with_input(mut self, input: impl FnMut() -> io::Result<Key> + 't) -> Self {
        self.input = Box::new(input);
        self
    }
}

impl<B: Backend> Screen for TerminalScreen<'_, B> {
    fn read_key(&mut self) -> io::Result<Key> {
        (self.input)()
    }

    fn draw(&mut self, request: &RenderRequest) -> io::Result<()> {
        let Self {
            terminal,
            background,
            ..
        } = self;
        terminal
            .draw(|frame| {
                if let Some(paint) = background.as_mut() {
                    paint(frame);
                }
                draw_request(frame, request);
            })
            .map(|_| ())
            .map_err(|e| io::Error::other(e.to_string()))
    }

    fn size(&mut self) -> io::Result<Option<(u16, u16)>> {
        let size = self
            .terminal
            .size()
            .map_err(|e| io::Error::other(e.to_string()))?;
        Ok(Some((size.height, size.width)))
    }
}
