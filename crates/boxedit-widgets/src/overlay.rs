//! Overlay positioning and rendering utilities.
//!
//! Used by the help overlay to float a bordered panel over the editor box.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Clear, Widget};

/// Compute a centered sub-rect with fixed dimensions, clamped to `area`.
///
/// If `width` or `height` exceed the area dimensions, they are clamped.
pub fn centered_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Clear the overlay area and optionally render a block border.
///
/// Returns the inner area (after block padding, if any).
pub fn render_overlay(area: Rect, buf: &mut Buffer, block: Option<&Block>) -> Rect {
    Clear.render(area, buf);
    match block {
        Some(block) => {
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        }
        None => area,
    }
}
