use ratatui::layout::{Position, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::input::InputBuffer;

use super::theme::{indicators, Theme};

/// Rows spent on the input block's top and bottom border.
pub(super) const INPUT_PADDING: u16 = 2;
pub(super) const MIN_INPUT_HEIGHT: u16 = 3;
const BORDER_OFFSET: u16 = 1;
// "❯ " on the first row, matching indent on the rest.
const PROMPT_WIDTH: u16 = 2;

pub fn input_height(buffer: &InputBuffer, width: u16) -> u16 {
    let inner = width.saturating_sub(INPUT_PADDING + PROMPT_WIDTH);
    let rows = buffer.wrapped_lines(inner).len() as u16 + INPUT_PADDING;
    rows.max(MIN_INPUT_HEIGHT)
}

pub struct InputProps<'a> {
    pub area: Rect,
    pub buffer: &'a InputBuffer,
    pub theme: &'a Theme,
    pub placeholder: &'a str,
    pub focused: bool,
    pub show_cursor: bool,
}

pub fn render_input(frame: &mut Frame<'_>, props: InputProps<'_>) {
    let inner_width = props
        .area
        .width
        .saturating_sub(INPUT_PADDING + PROMPT_WIDTH);
    let wrapped = props.buffer.wrapped_lines(inner_width);

    let mut lines: Vec<Line<'static>> = Vec::with_capacity(wrapped.len().max(1));
    if props.buffer.is_empty() {
        lines.push(prompt_line(props.placeholder, props.theme, true, props.focused));
    } else {
        if let Some(first) = wrapped.first() {
            lines.push(prompt_line(first, props.theme, false, props.focused));
        }
        for row in wrapped.iter().skip(1) {
            lines.push(continuation_line(row));
        }
    }

    let border_style = if props.focused {
        props.theme.border_focused
    } else {
        props.theme.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let paragraph = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });
    frame.render_widget(paragraph.block(block), props.area);

    if props.show_cursor {
        let (row, col) = if props.buffer.is_empty() {
            (0, 0)
        } else {
            props.buffer.cursor_position(inner_width)
        };
        frame.set_cursor_position(Position::new(
            props.area.x + BORDER_OFFSET + PROMPT_WIDTH + col,
            props.area.y + BORDER_OFFSET + row,
        ));
    }
}

fn prompt_line(content: &str, theme: &Theme, placeholder: bool, focused: bool) -> Line<'static> {
    let prompt_style = if focused { theme.prompt } else { theme.muted };
    let content_style = if placeholder {
        theme.muted
    } else {
        Style::default()
    };
    Line::from(vec![
        Span::styled(format!("{} ", indicators::PROMPT), prompt_style),
        Span::styled(content.to_string(), content_style),
    ])
}

fn continuation_line(content: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw("  ".to_string()),
        Span::raw(content.to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_buffers_get_the_minimum_height() {
        let buffer = InputBuffer::default();
        assert_eq!(input_height(&buffer, 80), MIN_INPUT_HEIGHT);
    }

    #[test]
    fn each_newline_adds_a_row() {
        let mut buffer = InputBuffer::default();
        buffer.insert_str("first");
        buffer.newline();
        buffer.insert_str("second");
        assert_eq!(input_height(&buffer, 80), 2 + INPUT_PADDING);
    }

    #[test]
    fn narrow_terminals_wrap_into_extra_rows() {
        let mut buffer = InputBuffer::default();
        buffer.insert_str("a meow a purr a hiss");
        // Inner width 7 after borders and prompt.
        assert_eq!(input_height(&buffer, 11), 3 + INPUT_PADDING);
    }
}
