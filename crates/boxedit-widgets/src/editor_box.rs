//! The editor box: border, title line, wrapped text and paragraph markers.
//!
//! Like the status bar in other ratatui apps this is a **stateless** widget.
//! All state lives in the controller; the widget only paints a
//! [`RenderRequest`].

use boxedit_core::RenderRequest;
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};
use ratatui::Frame;

use crate::help::HelpOverlay;

/// Drawn after the last display row of each logical line when the text has
/// more than one line.
pub const PARAGRAPH_MARKER: &str = "\u{2190}"; // "←"

/// Visual style configuration for [`EditorBox`].
#[derive(Debug, Clone)]
pub struct EditorBoxStyle {
    /// Style applied to the border.
    pub border: Style,
    /// Style applied to the title.
    pub title: Style,
    /// Style applied to the quick-help reminder next to the title.
    pub quick_help: Style,
    /// Style applied to the edited text.
    pub text: Style,
    /// Style applied to paragraph markers.
    pub marker: Style,
}

impl Default for EditorBoxStyle {
    fn default() -> Self {
        Self {
            border: Style::default(),
            title: Style::default().add_modifier(Modifier::BOLD),
            quick_help: Style::default().add_modifier(Modifier::REVERSED),
            text: Style::default(),
            marker: Style::default().fg(Color::DarkGray),
        }
    }
}

/// Paints one [`RenderRequest`] into the rect returned by
/// [`placement`](EditorBox::placement).
///
/// # Example
///
/// ```ignore
/// let editor_box = EditorBox::new(&request);
/// let area = editor_box.placement(frame.area());
/// frame.render_widget(&editor_box, area);
/// if let Some(pos) = editor_box.cursor_position(area) {
///     frame.set_cursor_position(pos);
/// }
/// ```
pub struct EditorBox<'a> {
    request: &'a RenderRequest,
    style: EditorBoxStyle,
}

impl<'a> EditorBox<'a> {
    pub fn new(request: &'a RenderRequest) -> Self {
        Self {
            request,
            style: EditorBoxStyle::default(),
        }
    }

    pub fn with_style(mut self, style: EditorBoxStyle) -> Self {
        self.style = style;
        self
    }

    /// The rect of the whole box inside `screen`.  The requested location is
    /// pulled up and left as needed so the box fits, and the size is clamped
    /// to the screen.
    pub fn placement(&self, screen: Rect) -> Rect {
        let (rows, cols) = self.request.outer_size();
        let (row, col) = self.request.box_location;
        let width = cols.min(screen.width);
        let height = rows.min(screen.height);
        let x = col.min(screen.width - width);
        let y = row.min(screen.height - height);
        Rect::new(screen.x + x, screen.y + y, width, height)
    }

    /// The text area within a box painted at `area`.
    pub fn text_area(&self, area: Rect) -> Rect {
        let inner = if self.request.border {
            Block::bordered().inner(area)
        } else {
            area
        };
        if self.request.title.is_some() {
            let height = inner.height.saturating_sub(1);
            Rect::new(inner.x, inner.y + (inner.height - height), inner.width, height)
        } else {
            inner
        }
    }

    /// Absolute screen position of the cursor for a box painted at `area`,
    /// or `None` when it is hidden or clipped.
    pub fn cursor_position(&self, area: Rect) -> Option<Position> {
        let (row, col) = self.request.cursor?;
        let text = self.text_area(area);
        (row < text.height && col < text.width).then(|| Position::new(text.x + col, text.y + row))
    }

    /// The title followed by the quick help, each shortened with `..` to
    /// fit `width` cells.  The quick help is dropped when no room is left.
    fn title_line(&self, width: u16) -> Option<Line<'a>> {
        let width = usize::from(width);
        let title = shorten(self.request.title.as_deref()?, width);
        let room = width.saturating_sub(title.chars().count() + 1);
        let mut spans = vec![Span::styled(title, self.style.title)];
        if !self.request.quick_help.is_empty() && room > 0 {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                shorten(&self.request.quick_help, room),
                self.style.quick_help,
            ));
        }
        Some(Line::from(spans))
    }

    fn text_lines(&self) -> Vec<Line<'a>> {
        self.request
            .lines
            .iter()
            .map(|line| {
                let mut spans = vec![Span::styled(line.text.as_str(), self.style.text)];
                if self.request.multi_line && line.ends_line {
                    spans.push(Span::styled(PARAGRAPH_MARKER, self.style.marker));
                }
                Line::from(spans)
            })
            .collect()
    }
}

impl Widget for &EditorBox<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        let inner = if self.request.border {
            let block = Block::bordered().border_style(self.style.border);
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };
        if let Some(title) = self.title_line(inner.width) {
            let row = Rect::new(inner.x, inner.y, inner.width, inner.height.min(1));
            Paragraph::new(title).render(row, buf);
        }
        Paragraph::new(self.text_lines()).render(self.text_area(area), buf);
    }
}

/// `text` cut to `width` characters, ending in `..` when anything was cut.
fn shorten(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let keep = width.saturating_sub(2);
    text.chars().take(keep).chain("..".chars()).take(width).collect()
}

/// Paint a full frame for `request`: the box at its placement, the help
/// overlay over it when present, and the terminal cursor.
pub fn draw_request(frame: &mut Frame, request: &RenderRequest) {
    let editor_box = EditorBox::new(request);
    let area = editor_box.placement(frame.area());
    frame.render_widget(&editor_box, area);
    if let Some(entries) = &request.help {
        frame.render_widget(&HelpOverlay::new(entries), frame.area());
    }
    if let Some(pos) = editor_box.cursor_position(area) {
        frame.set_cursor_position(pos);
    }
}
