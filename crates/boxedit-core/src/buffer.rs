//! Line-oriented text storage with cursor-relative editing operations.
//!
//! A [`TextBuffer`] knows nothing about keys or rendering.  Every edit takes
//! a [`Cursor`] and returns where the cursor ends up, so the caller owns the
//! cursor and the buffer stays a plain value.

/// A position in a [`TextBuffer`]: logical line and character column.
///
/// `col` may equal the line length (the insertion point after the last
/// character).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Cursor {
    pub row: usize,
    pub col: usize,
}

impl Cursor {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// The logical lines being edited.  Never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBuffer {
    lines: Vec<Vec<char>>,
}

impl TextBuffer {
    /// Create a buffer holding one empty line.
    pub fn new() -> Self {
        Self {
            lines: vec![Vec::new()],
        }
    }

    /// Create a buffer from text, splitting on `'\n'`.
    ///
    /// Unlike [`str::lines`], a trailing newline produces a trailing empty
    /// line, so [`text`](Self::text) gives back exactly the input.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(|l| l.chars().collect()).collect(),
        }
    }

    /// All lines joined with `'\n'`.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|l| l.iter().collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Characters across all lines, not counting line breaks.
    pub fn char_count(&self) -> usize {
        self.lines.iter().map(Vec::len).sum()
    }

    pub fn line_length(&self, row: usize) -> usize {
        self.lines[row].len()
    }

    pub fn line_text(&self, row: usize) -> String {
        self.lines[row].iter().collect()
    }

    /// Raw characters of a line.
    pub fn line_chars(&self, row: usize) -> &[char] {
        &self.lines[row]
    }

    /// Drop every line past the first `max` (keeping at least one).
    pub fn truncate_lines(&mut self, max: usize) {
        self.lines.truncate(max.max(1));
    }

    /// Clamp an arbitrary position into the valid cursor range.
    pub fn clamp(&self, pos: Cursor) -> Cursor {
        let row = pos.row.min(self.lines.len() - 1);
        let col = pos.col.min(self.lines[row].len());
        Cursor { row, col }
    }

    /// Position after the last character of the last line.
    pub fn end(&self) -> Cursor {
        let row = self.lines.len() - 1;
        Cursor {
            row,
            col: self.lines[row].len(),
        }
    }

    pub fn insert_char(&mut self, pos: Cursor, ch: char) -> Cursor {
        self.lines[pos.row].insert(pos.col, ch);
        Cursor::new(pos.row, pos.col + 1)
    }

    /// Insert text that contains no newline.
    pub fn insert_str(&mut self, pos: Cursor, text: &str) -> Cursor {
        let line = &mut self.lines[pos.row];
        let tail = line.split_off(pos.col);
        line.extend(text.chars());
        let col = line.len();
        line.extend(tail);
        Cursor::new(pos.row, col)
    }

    /// Split the line at the cursor; the cursor moves to the start of the new
    /// line below.
    pub fn insert_newline(&mut self, pos: Cursor) -> Cursor {
        let rest = self.lines[pos.row].split_off(pos.col);
        self.lines.insert(pos.row + 1, rest);
        Cursor::new(pos.row + 1, 0)
    }

    /// Delete the character under the cursor, or join the next line when the
    /// cursor is at the end of its line.
    pub fn delete_forward(&mut self, pos: Cursor) -> Cursor {
        if pos.col < self.lines[pos.row].len() {
            self.lines[pos.row].remove(pos.col);
        } else if pos.row + 1 < self.lines.len() {
            let next = self.lines.remove(pos.row + 1);
            self.lines[pos.row].extend(next);
        }
        pos
    }

    /// Delete the character left of the cursor, or join this line onto the
    /// previous one when the cursor is at column 0.
    pub fn delete_backward(&mut self, pos: Cursor) -> Cursor {
        if pos.col > 0 {
            self.lines[pos.row].remove(pos.col - 1);
            Cursor::new(pos.row, pos.col - 1)
        } else if pos.row > 0 {
            let current = self.lines.remove(pos.row);
            let row = pos.row - 1;
            let col = self.lines[row].len();
            self.lines[row].extend(current);
            Cursor::new(row, col)
        } else {
            pos
        }
    }

    pub fn delete_to_line_end(&mut self, pos: Cursor) -> Cursor {
        self.lines[pos.row].truncate(pos.col);
        pos
    }

    pub fn delete_to_line_start(&mut self, pos: Cursor) -> Cursor {
        self.lines[pos.row].drain(..pos.col);
        Cursor::new(pos.row, 0)
    }

    /// Delete back to the previous word boundary.  At column 0 this joins
    /// with the previous line like [`delete_backward`](Self::delete_backward).
    pub fn delete_word_backward(&mut self, pos: Cursor) -> Cursor {
        if pos.col == 0 {
            return self.delete_backward(pos);
        }
        let start = self.prev_word_boundary(pos);
        self.lines[pos.row].drain(start..pos.col);
        Cursor::new(pos.row, start)
    }

    /// Column of the start of the word left of the cursor: skip whitespace
    /// backwards, then non-whitespace.
    pub fn prev_word_boundary(&self, pos: Cursor) -> usize {
        let line = &self.lines[pos.row];
        let mut col = pos.col;
        while col > 0 && line[col - 1].is_whitespace() {
            col -= 1;
        }
        while col > 0 && !line[col - 1].is_whitespace() {
            col -= 1;
        }
        col
    }

    /// Column of the start of the next word: skip non-whitespace forwards,
    /// then whitespace.
    pub fn next_word_boundary(&self, pos: Cursor) -> usize {
        let line = &self.lines[pos.row];
        let len = line.len();
        let mut col = pos.col;
        while col < len && !line[col].is_whitespace() {
            col += 1;
        }
        while col < len && line[col].is_whitespace() {
            col += 1;
        }
        col
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(buf: &TextBuffer) -> Vec<String> {
        (0..buf.line_count()).map(|r| buf.line_text(r)).collect()
    }

    #[test]
    fn empty_text_is_one_empty_line() {
        let buf = TextBuffer::from_text("");
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_length(0), 0);
        assert_eq!(buf, TextBuffer::new());
    }

    #[test]
    fn from_text_round_trips() {
        for text in ["hello", "a\nb", "trailing\n", "\n\n", "x\r\ny"] {
            assert_eq!(TextBuffer::from_text(text).text(), text);
        }
    }

    #[test]
    fn newline_in_middle_of_line() {
        let mut buf = TextBuffer::from_text("abc\nde");
        let cur = buf.insert_newline(Cursor::new(0, 3));
        assert_eq!(lines(&buf), ["abc", "", "de"]);
        assert_eq!(cur, Cursor::new(1, 0));

        let mut buf = TextBuffer::from_text("hello");
        let cur = buf.insert_newline(Cursor::new(0, 2));
        assert_eq!(lines(&buf), ["he", "llo"]);
        assert_eq!(cur, Cursor::new(1, 0));
    }

    #[test]
    fn backspace_within_line() {
        let mut buf = TextBuffer::from_text("abcdef");
        let cur = buf.delete_backward(Cursor::new(0, 6));
        assert_eq!(lines(&buf), ["abcde"]);
        assert_eq!(cur, Cursor::new(0, 5));
    }

    #[test]
    fn backspace_joins_lines() {
        let mut buf = TextBuffer::from_text("ab\ncd");
        let cur = buf.delete_backward(Cursor::new(1, 0));
        assert_eq!(lines(&buf), ["abcd"]);
        assert_eq!(cur, Cursor::new(0, 2));
    }

    #[test]
    fn backspace_at_origin_is_noop() {
        let mut buf = TextBuffer::from_text("ab");
        let cur = buf.delete_backward(Cursor::new(0, 0));
        assert_eq!(lines(&buf), ["ab"]);
        assert_eq!(cur, Cursor::new(0, 0));
    }

    #[test]
    fn delete_forward_joins_and_stops_at_end() {
        let mut buf = TextBuffer::from_text("ab\ncd");
        let cur = buf.delete_forward(Cursor::new(0, 2));
        assert_eq!(lines(&buf), ["abcd"]);
        assert_eq!(cur, Cursor::new(0, 2));

        let cur = buf.delete_forward(Cursor::new(0, 4));
        assert_eq!(lines(&buf), ["abcd"]);
        assert_eq!(cur, Cursor::new(0, 4));

        buf.delete_forward(Cursor::new(0, 0));
        assert_eq!(lines(&buf), ["bcd"]);
    }

    #[test]
    fn kill_to_end_and_start() {
        let mut buf = TextBuffer::from_text("hello world");
        let cur = buf.delete_to_line_end(Cursor::new(0, 5));
        assert_eq!(lines(&buf), ["hello"]);
        assert_eq!(cur, Cursor::new(0, 5));

        let mut buf = TextBuffer::from_text("hello world");
        let cur = buf.delete_to_line_start(Cursor::new(0, 5));
        assert_eq!(lines(&buf), [" world"]);
        assert_eq!(cur, Cursor::new(0, 0));
    }

    #[test]
    fn delete_word_backward() {
        let mut buf = TextBuffer::from_text("hello big world");
        let cur = buf.delete_word_backward(Cursor::new(0, 15));
        assert_eq!(lines(&buf), ["hello big "]);
        assert_eq!(cur, Cursor::new(0, 10));

        let cur = buf.delete_word_backward(cur);
        assert_eq!(lines(&buf), ["hello "]);
        assert_eq!(cur, Cursor::new(0, 6));
    }

    #[test]
    fn delete_word_backward_at_line_start_joins() {
        let mut buf = TextBuffer::from_text("ab\ncd");
        let cur = buf.delete_word_backward(Cursor::new(1, 0));
        assert_eq!(lines(&buf), ["abcd"]);
        assert_eq!(cur, Cursor::new(0, 2));
    }

    #[test]
    fn word_boundaries() {
        let buf = TextBuffer::from_text("one two  three");
        assert_eq!(buf.next_word_boundary(Cursor::new(0, 0)), 4);
        assert_eq!(buf.next_word_boundary(Cursor::new(0, 4)), 9);
        assert_eq!(buf.next_word_boundary(Cursor::new(0, 9)), 14);
        assert_eq!(buf.prev_word_boundary(Cursor::new(0, 14)), 9);
        assert_eq!(buf.prev_word_boundary(Cursor::new(0, 9)), 4);
        assert_eq!(buf.prev_word_boundary(Cursor::new(0, 2)), 0);
    }

    #[test]
    fn insert_str_keeps_tail() {
        let mut buf = TextBuffer::from_text("ad");
        let cur = buf.insert_str(Cursor::new(0, 1), "bc");
        assert_eq!(lines(&buf), ["abcd"]);
        assert_eq!(cur, Cursor::new(0, 3));
    }

    #[test]
    fn clamp_and_truncate() {
        let mut buf = TextBuffer::from_text("abc\nd\nefg");
        assert_eq!(buf.clamp(Cursor::new(9, 9)), Cursor::new(2, 3));
        assert_eq!(buf.clamp(Cursor::new(1, 3)), Cursor::new(1, 1));
        buf.truncate_lines(2);
        assert_eq!(lines(&buf), ["abc", "d"]);
        buf.truncate_lines(0);
        assert_eq!(lines(&buf), ["abc"]);
        assert_eq!(buf.end(), Cursor::new(0, 3));
    }
}
