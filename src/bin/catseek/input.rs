use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Multiline prompt editor backing the input pane.
///
/// The cursor is a byte offset that always sits on a grapheme boundary,
/// so arrow keys and backspace treat emoji and combining marks as one
/// unit.
#[derive(Debug, Default, Clone)]
pub struct InputBuffer {
    text: String,
    cursor: usize,
}

impl InputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn take_text(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    pub fn insert_char(&mut self, ch: char) {
        let at = self.cursor.min(self.text.len());
        self.text.insert(at, ch);
        self.cursor = at + ch.len_utf8();
    }

    pub fn insert_str(&mut self, value: &str) {
        let at = self.cursor.min(self.text.len());
        self.text.insert_str(at, value);
        self.cursor = at + value.len();
    }

    pub fn newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.text.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.text.replace_range(self.cursor..next, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.next_boundary() {
            self.cursor = next;
        }
    }

    /// Jumps to the start of the current logical line.
    pub fn move_home(&mut self) {
        self.cursor = self.text[..self.cursor]
            .rfind('\n')
            .map(|idx| idx + 1)
            .unwrap_or(0);
    }

    /// Jumps to the end of the current logical line.
    pub fn move_end(&mut self) {
        self.cursor = self.text[self.cursor..]
            .find('\n')
            .map(|idx| self.cursor + idx)
            .unwrap_or(self.text.len());
    }

    /// The buffer split into display rows for the given pane width.
    pub fn wrapped_lines(&self, width: u16) -> Vec<String> {
        wrap_ranges(&self.text, width)
            .into_iter()
            .map(|range| self.text[range].to_string())
            .collect()
    }

    /// Row and column of the cursor within the wrapped rows.
    pub fn cursor_position(&self, width: u16) -> (u16, u16) {
        for (row, range) in wrap_ranges(&self.text, width).iter().enumerate() {
            if self.cursor >= range.start && self.cursor <= range.end {
                let col = self.text[range.start..self.cursor].width();
                return (row as u16, col as u16);
            }
        }
        (0, 0)
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.text[..self.cursor]
            .grapheme_indices(true)
            .next_back()
            .map(|(idx, _)| idx)
    }

    fn next_boundary(&self) -> Option<usize> {
        self.text[self.cursor..]
            .graphemes(true)
            .next()
            .map(|grapheme| self.cursor + grapheme.len())
    }
}

/// Byte ranges of the display rows `text` wraps into at `width` cells.
///
/// Newlines end a row without appearing in any range. A grapheme wider
/// than the remaining space starts a new row; the result always holds at
/// least one range so the cursor has somewhere to sit.
fn wrap_ranges(text: &str, width: u16) -> Vec<Range<usize>> {
    let limit = usize::from(width.max(1));
    let mut ranges: Vec<Range<usize>> = Vec::new();
    let mut start = 0;
    let mut used = 0usize;
    for (idx, grapheme) in text.grapheme_indices(true) {
        if matches!(grapheme, "\n" | "\r\n") {
            ranges.push(start..idx);
            start = idx + grapheme.len();
            used = 0;
            continue;
        }
        let cells = grapheme.width();
        if used + cells > limit && idx > start {
            ranges.push(start..idx);
            start = idx;
            used = 0;
        }
        used += cells;
    }
    ranges.push(start..text.len());
    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backspace_removes_a_whole_grapheme() {
        let mut buffer = InputBuffer::new();
        buffer.insert_str("hi 🐱");
        buffer.backspace();
        assert_eq!(buffer.text(), "hi ");
        buffer.backspace();
        assert_eq!(buffer.text(), "hi");
    }

    #[test]
    fn arrows_step_over_multibyte_text() {
        let mut buffer = InputBuffer::new();
        buffer.insert_str("aé");
        buffer.move_left();
        buffer.insert_char('x');
        assert_eq!(buffer.text(), "axé");
        buffer.move_right();
        buffer.insert_char('!');
        assert_eq!(buffer.text(), "axé!");
    }

    #[test]
    fn home_and_end_stay_on_the_current_line() {
        let mut buffer = InputBuffer::new();
        buffer.insert_str("first\nsecond");
        buffer.move_home();
        buffer.insert_char('>');
        assert_eq!(buffer.text(), "first\n>second");
        buffer.move_end();
        buffer.insert_char('<');
        assert_eq!(buffer.text(), "first\n>second<");
    }

    #[test]
    fn take_text_resets_the_buffer() {
        let mut buffer = InputBuffer::new();
        buffer.insert_str("meow");
        assert_eq!(buffer.take_text(), "meow");
        assert!(buffer.is_empty());
        assert_eq!(buffer.cursor_position(10), (0, 0));
    }

    #[test]
    fn delete_at_the_end_is_a_no_op() {
        let mut buffer = InputBuffer::new();
        buffer.insert_str("ok");
        buffer.delete();
        assert_eq!(buffer.text(), "ok");
    }

    #[test]
    fn long_lines_wrap_at_the_pane_width() {
        let mut buffer = InputBuffer::new();
        buffer.insert_str("abcdefgh");
        assert_eq!(buffer.wrapped_lines(3), vec!["abc", "def", "gh"]);
    }

    #[test]
    fn newlines_split_rows_without_leaking_into_them() {
        let mut buffer = InputBuffer::new();
        buffer.insert_str("a\n\nb");
        assert_eq!(buffer.wrapped_lines(10), vec!["a", "", "b"]);
    }

    #[test]
    fn wide_glyphs_count_two_cells_when_wrapping() {
        let mut buffer = InputBuffer::new();
        buffer.insert_str("猫猫猫");
        assert_eq!(buffer.wrapped_lines(4), vec!["猫猫", "猫"]);
    }

    #[test]
    fn cursor_lands_after_the_wrap() {
        let mut buffer = InputBuffer::new();
        buffer.insert_str("abcdef");
        assert_eq!(buffer.cursor_position(4), (1, 2));
        buffer.move_home();
        assert_eq!(buffer.cursor_position(4), (0, 0));
    }

    #[test]
    fn empty_buffer_still_has_one_row() {
        let buffer = InputBuffer::new();
        assert_eq!(buffer.wrapped_lines(8), vec![""]);
    }
}
