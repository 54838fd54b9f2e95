/// Construction options for an editing session.
///
/// All fields have defaults (see [`Default`]); use the `with_*` builders or
/// struct update syntax to override what you need.
///
/// # Example
///
/// ```rust,ignore
/// use boxedit_core::EditorConfig;
///
/// let config = EditorConfig::new()
///     .with_title("Password")
///     .with_box_size(1, 30)
///     .with_password_mode(true)
///     .with_single_line(true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// Text the box starts with.
    pub initial_text: String,
    /// Size of the text area in (rows, cols), excluding border and title.
    pub box_size: (u16, u16),
    /// Top-left corner of the box (row, col) on the screen.
    pub box_location: (u16, u16),
    /// Title shown above the text area.
    pub title: Option<String>,
    /// Draw a border around the box.
    pub box_border: bool,
    /// Show every character as [`mask_glyph`](Self::mask_glyph).
    pub password_mode: bool,
    /// Glyph used in password mode.
    pub mask_glyph: char,
    /// Enter accepts instead of inserting a newline.
    pub single_line: bool,
    /// Maximum number of lines in multi-line mode (`None` = unlimited).
    pub max_text_size: Option<usize>,
    /// Whether F1 opens the key help overlay.
    pub help_overlay: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_text: String::new(),
            box_size: (20, 80),
            box_location: (0, 0),
            title: None,
            box_border: true,
            password_mode: false,
            mask_glyph: '*',
            single_line: false,
            max_text_size: None,
            help_overlay: true,
        }
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_initial_text(mut self, text: impl Into<String>) -> Self {
        self.initial_text = text.into();
        self
    }

    /// Set the text area size; each dimension is at least 1.
    pub fn with_box_size(mut self, rows: u16, cols: u16) -> Self {
        self.box_size = (rows.max(1), cols.max(1));
        self
    }

    pub fn with_box_location(mut self, row: u16, col: u16) -> Self {
        self.box_location = (row, col);
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_box_border(mut self, border: bool) -> Self {
        self.box_border = border;
        self
    }

    pub fn with_password_mode(mut self, password: bool) -> Self {
        self.password_mode = password;
        self
    }

    pub fn with_mask_glyph(mut self, glyph: char) -> Self {
        self.mask_glyph = glyph;
        self
    }

    pub fn with_single_line(mut self, single_line: bool) -> Self {
        self.single_line = single_line;
        self
    }

    /// Cap the number of lines.  Zero means unlimited.
    pub fn with_max_text_size(mut self, lines: usize) -> Self {
        self.max_text_size = (lines > 0).then_some(lines);
        self
    }

    pub fn with_help_overlay(mut self, help: bool) -> Self {
        self.help_overlay = help;
        self
    }

    /// The effective line cap: single-line mode always caps at one line.
    pub fn line_limit(&self) -> Option<usize> {
        if self.single_line {
            Some(1)
        } else {
            self.max_text_size
        }
    }

    /// The title, if set and non-empty.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref().filter(|t| !t.is_empty())
    }

    /// The text area size (rows, cols) that fits a screen of `rows` x `cols`
    /// cells once border and title are accounted for.  Never larger than
    /// [`box_size`](Self::box_size) and never smaller than one cell.
    pub fn fit_box_size(&self, rows: u16, cols: u16) -> (u16, u16) {
        let border = if self.box_border { 2 } else { 0 };
        let title = u16::from(self.title().is_some());
        let max_rows = rows.saturating_sub(border + title);
        let max_cols = cols.saturating_sub(border);
        let (want_rows, want_cols) = self.box_size;
        (want_rows.min(max_rows).max(1), want_cols.min(max_cols).max(1))
    }
}
