//! Wrapping logical lines into display rows and keeping the cursor in view.
//!
//! Lines wrap at word boundaries, keeping the whitespace on the row it
//! follows.  A word longer than a row is broken wherever the row ends.  The
//! wrap width is one less than the box width so a cursor sitting after a
//! full row still has a cell to sit in.

use std::ops::Range;

use crate::buffer::{Cursor, TextBuffer};

/// Painted in place of control characters, which the terminal would not
/// show as a cell.
pub const CONTROL_GLYPH: char = '?';

/// One row of the box as it will be painted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayLine {
    /// The characters to paint, already masked in password mode.
    pub text: String,
    /// Logical line this row belongs to.
    pub row: usize,
    /// Whether this is the last display row of its logical line.
    pub ends_line: bool,
}

/// Scroll state for a box of fixed size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    height: usize,
    wrap_width: usize,
    /// First visible display row, counted across the whole wrapped buffer.
    scroll_top: usize,
}

impl Viewport {
    /// Create a viewport for a text area of `rows` x `cols` cells.
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            height: usize::from(rows).max(1),
            wrap_width: usize::from(cols).saturating_sub(1).max(1),
            scroll_top: 0,
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn wrap_width(&self) -> usize {
        self.wrap_width
    }

    pub fn scroll_top(&self) -> usize {
        self.scroll_top
    }

    /// Character ranges of the display rows `line` wraps into.  An empty
    /// line still takes one row.
    pub fn wrap_ranges(&self, line: &[char]) -> Vec<Range<usize>> {
        let w = self.wrap_width;
        let mut rows = Vec::new();
        let mut start = 0;
        while line.len() - start > w {
            let limit = start + w;
            // Break where a word starts after whitespace, as late as possible.
            let stop = (start + 1..=limit)
                .rev()
                .find(|&i| line[i - 1].is_whitespace() && !line[i].is_whitespace())
                .unwrap_or(limit);
            rows.push(start..stop);
            start = stop;
        }
        rows.push(start..line.len());
        rows
    }

    /// Number of display rows `line` occupies.
    pub fn rows_for(&self, line: &[char]) -> usize {
        self.wrap_ranges(line).len()
    }

    /// Total display rows of the buffer.
    pub fn total_rows(&self, buffer: &TextBuffer) -> usize {
        (0..buffer.line_count())
            .map(|r| self.rows_for(buffer.line_chars(r)))
            .sum()
    }

    /// The logical line shown at the top of the box.
    pub fn scroll_row(&self, buffer: &TextBuffer) -> usize {
        let mut seen = 0;
        for row in 0..buffer.line_count() {
            seen += self.rows_for(buffer.line_chars(row));
            if seen > self.scroll_top {
                return row;
            }
        }
        buffer.line_count() - 1
    }

    /// Display row (across the whole buffer) and column of the cursor.
    pub fn locate(&self, buffer: &TextBuffer, cursor: Cursor) -> (usize, usize) {
        let before: usize = (0..cursor.row)
            .map(|r| self.rows_for(buffer.line_chars(r)))
            .sum();
        let ranges = self.wrap_ranges(buffer.line_chars(cursor.row));
        // The cursor at the end of the line stays on the last row, in the
        // reserved last column if that row is full.
        let sub = ranges
            .iter()
            .position(|r| cursor.col < r.end)
            .unwrap_or(ranges.len() - 1);
        (before + sub, cursor.col - ranges[sub].start)
    }

    /// Scroll the least amount needed to keep the cursor's display row inside
    /// the box.
    pub fn follow(&mut self, buffer: &TextBuffer, cursor: Cursor) {
        let max_top = self.total_rows(buffer).saturating_sub(self.height);
        self.scroll_top = self.scroll_top.min(max_top);
        let (row, _) = self.locate(buffer, cursor);
        if row < self.scroll_top {
            self.scroll_top = row;
        } else if row >= self.scroll_top + self.height {
            self.scroll_top = row + 1 - self.height;
        }
    }

    /// Cursor position relative to the top-left of the text area.
    pub fn cursor_position(&self, buffer: &TextBuffer, cursor: Cursor) -> Option<(u16, u16)> {
        let (row, col) = self.locate(buffer, cursor);
        let row = row.checked_sub(self.scroll_top)?;
        if row >= self.height {
            return None;
        }
        Some((to_u16(row), to_u16(col)))
    }

    /// The display rows currently inside the box, masked with `mask` if set.
    pub fn visible_lines(&self, buffer: &TextBuffer, mask: Option<char>) -> Vec<DisplayLine> {
        let end = self.scroll_top + self.height;
        let mut out = Vec::with_capacity(self.height);
        let mut index = 0;
        for row in 0..buffer.line_count() {
            let chars = buffer.line_chars(row);
            let ranges = self.wrap_ranges(chars);
            let rows = ranges.len();
            if index + rows <= self.scroll_top {
                index += rows;
                continue;
            }
            for (sub, range) in ranges.into_iter().enumerate() {
                if index >= end {
                    return out;
                }
                if index >= self.scroll_top {
                    let text = match mask {
                        Some(glyph) => std::iter::repeat_n(glyph, range.len()).collect(),
                        None => chars[range]
                            .iter()
                            .map(|&c| if c.is_control() { CONTROL_GLYPH } else { c })
                            .collect(),
                    };
                    out.push(DisplayLine {
                        text,
                        row,
                        ends_line: sub + 1 == rows,
                    });
                }
                index += 1;
            }
        }
        out
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(lines: &[DisplayLine]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn wrap_width_reserves_cursor_column() {
        let vp = Viewport::new(3, 5);
        assert_eq!(vp.wrap_width(), 4);
        assert_eq!(Viewport::new(3, 1).wrap_width(), 1);
    }

    #[test]
    fn long_line_wraps_into_rows() {
        let vp = Viewport::new(5, 5);
        let buf = TextBuffer::from_text("abcdefghij\nxy");
        let lines = vp.visible_lines(&buf, None);
        assert_eq!(texts(&lines), ["abcd", "efgh", "ij", "xy"]);
        assert!(!lines[0].ends_line);
        assert!(lines[2].ends_line);
        assert_eq!(lines[3].row, 1);
        assert_eq!(vp.total_rows(&buf), 4);
    }

    #[test]
    fn cursor_after_full_row_stays_on_it() {
        let vp = Viewport::new(5, 5);
        let buf = TextBuffer::from_text("abcd");
        assert_eq!(vp.locate(&buf, Cursor::new(0, 4)), (0, 4));
        let buf = TextBuffer::from_text("abcde");
        assert_eq!(vp.locate(&buf, Cursor::new(0, 4)), (1, 0));
        assert_eq!(vp.locate(&buf, Cursor::new(0, 5)), (1, 1));
    }

    #[test]
    fn follow_scrolls_minimally_down_and_up() {
        let mut vp = Viewport::new(2, 10);
        let buf = TextBuffer::from_text("a\nb\nc\nd");
        vp.follow(&buf, Cursor::new(2, 0));
        assert_eq!(vp.scroll_top(), 1);
        vp.follow(&buf, Cursor::new(3, 0));
        assert_eq!(vp.scroll_top(), 2);
        vp.follow(&buf, Cursor::new(2, 0));
        assert_eq!(vp.scroll_top(), 2);
        vp.follow(&buf, Cursor::new(0, 0));
        assert_eq!(vp.scroll_top(), 0);
    }

    #[test]
    fn follow_pulls_back_when_text_shrinks() {
        let mut vp = Viewport::new(2, 10);
        let big = TextBuffer::from_text("a\nb\nc\nd");
        vp.follow(&big, Cursor::new(3, 0));
        assert_eq!(vp.scroll_top(), 2);
        let small = TextBuffer::from_text("a\nb");
        vp.follow(&small, Cursor::new(1, 0));
        assert_eq!(vp.scroll_top(), 0);
    }

    #[test]
    fn scroll_row_maps_display_row_to_line() {
        let mut vp = Viewport::new(1, 3);
        let buf = TextBuffer::from_text("abcd\nef");
        vp.follow(&buf, Cursor::new(0, 3));
        assert_eq!(vp.scroll_top(), 1);
        assert_eq!(vp.scroll_row(&buf), 0);
        vp.follow(&buf, Cursor::new(1, 0));
        assert_eq!(vp.scroll_row(&buf), 1);
    }

    #[test]
    fn cursor_position_is_relative_to_scroll() {
        let mut vp = Viewport::new(2, 10);
        let buf = TextBuffer::from_text("a\nb\nc");
        vp.follow(&buf, Cursor::new(2, 1));
        assert_eq!(vp.cursor_position(&buf, Cursor::new(2, 1)), Some((1, 1)));
        assert_eq!(vp.cursor_position(&buf, Cursor::new(0, 0)), None);
    }

    #[test]
    fn visible_lines_window() {
        let mut vp = Viewport::new(2, 10);
        let buf = TextBuffer::from_text("one\ntwo\nthree\nfour");
        vp.follow(&buf, Cursor::new(3, 0));
        assert_eq!(texts(&vp.visible_lines(&buf, None)), ["three", "four"]);
    }

    #[test]
    fn wraps_at_word_boundaries() {
        let vp = Viewport::new(3, 6);
        let buf = TextBuffer::from_text("ab cdefg");
        let lines = vp.visible_lines(&buf, None);
        assert_eq!(texts(&lines), ["ab ", "cdefg"]);
        assert_eq!(vp.locate(&buf, Cursor::new(0, 2)), (0, 2));
        assert_eq!(vp.locate(&buf, Cursor::new(0, 3)), (1, 0));
        assert_eq!(vp.locate(&buf, Cursor::new(0, 8)), (1, 5));
    }

    #[test]
    fn wrap_keeps_trailing_space_and_breaks_long_words() {
        let vp = Viewport::new(5, 5);
        let line: Vec<char> = "one two abcdefghij".chars().collect();
        let rows: Vec<String> = vp
            .wrap_ranges(&line)
            .into_iter()
            .map(|r| line[r].iter().collect())
            .collect();
        assert_eq!(rows, ["one ", "two ", "abcd", "efgh", "ij"]);
        assert_eq!(vp.rows_for(&line), 5);
        assert_eq!(vp.wrap_ranges(&[]), [0..0]);
    }

    #[test]
    fn control_characters_paint_as_stand_ins() {
        let vp = Viewport::new(1, 10);
        let buf = TextBuffer::from_text("a\tb\r");
        let lines = vp.visible_lines(&buf, None);
        assert_eq!(texts(&lines), ["a?b?"]);
        assert_eq!(vp.cursor_position(&buf, Cursor::new(0, 4)), Some((0, 4)));
        assert_eq!(buf.line_text(0), "a\tb\r");
    }

    #[test]
    fn masking_preserves_length() {
        let vp = Viewport::new(3, 10);
        let buf = TextBuffer::from_text("secret\n\npw");
        let plain = vp.visible_lines(&buf, None);
        let masked = vp.visible_lines(&buf, Some('*'));
        assert_eq!(texts(&masked), ["******", "", "**"]);
        for (p, m) in plain.iter().zip(&masked) {
            assert_eq!(p.text.chars().count(), m.text.chars().count());
        }
    }
}
