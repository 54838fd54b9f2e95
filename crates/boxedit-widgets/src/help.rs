//! Key binding help overlay.

use boxedit_core::HelpEntry;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};

use crate::overlay::{centered_fixed, render_overlay};

/// Visual style configuration for [`HelpOverlay`].
#[derive(Debug, Clone)]
pub struct HelpStyle {
    /// Style applied to key labels.
    pub key: Style,
    /// Style applied to binding descriptions.
    pub description: Style,
    /// Style applied to the overlay border.
    pub border: Style,
    /// Style applied to the overlay title.
    pub title: Style,
}

impl Default for HelpStyle {
    fn default() -> Self {
        Self {
            key: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            description: Style::default(),
            border: Style::default().fg(Color::DarkGray),
            title: Style::default().add_modifier(Modifier::BOLD),
        }
    }
}

/// A bordered panel listing every binding, centered in the area it is
/// rendered into.  Rows that do not fit are cut off.
pub struct HelpOverlay<'a> {
    entries: &'a [HelpEntry],
    style: HelpStyle,
}

impl<'a> HelpOverlay<'a> {
    pub fn new(entries: &'a [HelpEntry]) -> Self {
        Self {
            entries,
            style: HelpStyle::default(),
        }
    }

    pub fn with_style(mut self, style: HelpStyle) -> Self {
        self.style = style;
        self
    }

    fn key_width(&self) -> usize {
        self.entries
            .iter()
            .map(|e| e.keys.chars().count())
            .max()
            .unwrap_or(0)
            + 2
    }

    /// Size of the panel including its border, before clamping.
    pub fn size(&self) -> (u16, u16) {
        let desc = self
            .entries
            .iter()
            .map(|e| e.description.chars().count())
            .max()
            .unwrap_or(0);
        let width = self.key_width() + desc + 2;
        let height = self.entries.len() + 2;
        (
            u16::try_from(width).unwrap_or(u16::MAX),
            u16::try_from(height).unwrap_or(u16::MAX),
        )
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let key_width = self.key_width();
        self.entries
            .iter()
            .map(|entry| {
                Line::from(vec![
                    Span::styled(format!("{:<key_width$}", entry.keys), self.style.key),
                    Span::styled(entry.description.as_str(), self.style.description),
                ])
            })
            .collect()
    }
}

impl Widget for &HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (width, height) = self.size();
        let panel = centered_fixed(width, height, area);
        let block = Block::bordered()
            .title(" Help ")
            .title_style(self.style.title)
            .border_style(self.style.border);
        let inner = render_overlay(panel, buf, Some(&block));
        Paragraph::new(self.lines()).render(inner, buf);
    }
}
