use crate::keymap::HelpEntry;
use crate::viewport::DisplayLine;

/// Everything a [`Screen`](crate::screen::Screen) needs to paint the box.
///
/// Produced by [`EditorController::render`](crate::EditorController::render)
/// after every change.  Lines are already wrapped and masked, so painting is
/// a matter of copying strings into cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRequest {
    /// Visible display rows, top to bottom.
    pub lines: Vec<DisplayLine>,
    /// Cursor position relative to the text area, hidden while help is up.
    pub cursor: Option<(u16, u16)>,
    /// Text area size (rows, cols).
    pub box_size: (u16, u16),
    /// Requested top-left corner of the whole box (row, col).
    pub box_location: (u16, u16),
    /// Whether to draw a border.
    pub border: bool,
    /// Title line, if any.
    pub title: Option<String>,
    /// Key reminder shown after the title.
    pub quick_help: String,
    /// Help overlay entries, present only while help is shown.
    pub help: Option<Vec<HelpEntry>>,
    /// Whether the buffer has more than one logical line, in which case the
    /// end of each line is marked.
    pub multi_line: bool,
}

impl RenderRequest {
    /// Rows taken by decoration above the text area.
    pub fn top_offset(&self) -> u16 {
        u16::from(self.border) + u16::from(self.title.is_some())
    }

    /// Columns taken by decoration left of the text area.
    pub fn left_offset(&self) -> u16 {
        u16::from(self.border)
    }

    /// Size of the whole box including border and title (rows, cols).
    pub fn outer_size(&self) -> (u16, u16) {
        let (rows, cols) = self.box_size;
        let border = if self.border { 2 } else { 0 };
        (
            rows.saturating_add(border + u16::from(self.title.is_some())),
            cols.saturating_add(border),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(border: bool, title: Option<&str>) -> RenderRequest {
        RenderRequest {
            lines: Vec::new(),
            cursor: None,
            box_size: (3, 10),
            box_location: (0, 0),
            border,
            title: title.map(String::from),
            quick_help: String::new(),
            help: None,
            multi_line: false,
        }
    }

    #[test]
    fn decoration_offsets() {
        let r = request(true, Some("T"));
        assert_eq!((r.top_offset(), r.left_offset()), (2, 1));
        assert_eq!(r.outer_size(), (6, 12));

        let r = request(false, Some("T"));
        assert_eq!((r.top_offset(), r.left_offset()), (1, 0));
        assert_eq!(r.outer_size(), (4, 10));

        let r = request(false, None);
        assert_eq!(r.outer_size(), (3, 10));
    }
}
