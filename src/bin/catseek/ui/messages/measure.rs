use ratatui::text::{Line, Text};
use textwrap::{Options, WordSplitter};

/// Rendered height of a bubble once wrapped to `width` columns.
///
/// Must agree with how `Paragraph { wrap: trim=false }` breaks lines, or
/// segment placement drifts by a row.
pub(super) fn wrapped_height(text: &Text<'_>, width: u16) -> u16 {
    if width == 0 {
        return 0;
    }
    let options = Options::new(width as usize)
        .word_splitter(WordSplitter::NoHyphenation)
        .break_words(false);
    let mut total = 0usize;
    for line in &text.lines {
        total = total.saturating_add(line_height(line, &options));
    }
    total.min(u16::MAX as usize) as u16
}

fn line_height(line: &Line<'_>, options: &Options<'_>) -> usize {
    let content = line.to_string();
    if content.is_empty() {
        return 1;
    }
    textwrap::wrap(&content, options).len().max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_lines_still_take_a_row() {
        let text = Text::from(vec![Line::from("meow"), Line::default(), Line::from("purr")]);
        assert_eq!(wrapped_height(&text, 20), 3);
    }

    #[test]
    fn long_lines_wrap_at_the_given_width() {
        let text = Text::from("a meow a purr a hiss");
        assert_eq!(wrapped_height(&text, 7), 3);
    }

    #[test]
    fn zero_width_measures_zero() {
        let text = Text::from("meow");
        assert_eq!(wrapped_height(&text, 0), 0);
    }
}
