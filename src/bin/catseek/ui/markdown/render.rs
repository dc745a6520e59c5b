use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};

use super::styles::MarkdownStyles;
use super::syntax::highlight_code;

/// Code box drawing characters. Only the left edge is drawn on content
/// lines, so the top and bottom edges stay open on the right as well.
mod chrome {
    pub const TOP_LEFT: &str = "╭";
    pub const BOTTOM_LEFT: &str = "╰";
    pub const HORIZONTAL: &str = "─";
    pub const VERTICAL: &str = "│";
}

/// Minimum inner width of a code box so one-liners still read as a block.
const MIN_CODE_WIDTH: usize = 16;

pub fn render_markdown(input: &str, styles: &MarkdownStyles) -> Text<'static> {
    let mut renderer = Renderer::new(styles.clone());
    renderer.run(input);
    while renderer.lines.last().is_some_and(|line| line.spans.is_empty()) {
        renderer.lines.pop();
    }
    Text::from(renderer.lines)
}

struct Renderer {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    styles: MarkdownStyles,
    style_stack: Vec<Style>,
    lists: Vec<Option<u64>>,
    pending_marker: Option<Span<'static>>,
    code_buf: Option<String>,
    code_lang: Option<String>,
}

impl Renderer {
    fn new(styles: MarkdownStyles) -> Self {
        Self {
            lines: Vec::new(),
            current: Vec::new(),
            styles,
            style_stack: Vec::new(),
            lists: Vec::new(),
            pending_marker: None,
            code_buf: None,
            code_lang: None,
        }
    }

    fn run(&mut self, input: &str) {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_STRIKETHROUGH);
        for event in Parser::new_ext(input, options) {
            self.handle(event);
        }
        self.flush_line();
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::SoftBreak => self.text(" "),
            Event::HardBreak => self.flush_line(),
            Event::Rule => self.rule(),
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { level, .. } => self.style_stack.push(self.heading_style(level)),
            Tag::Emphasis => self.style_stack.push(self.styles.emphasis),
            Tag::Strong => self.style_stack.push(self.styles.strong),
            Tag::Strikethrough => self.style_stack.push(self.styles.strikethrough),
            Tag::BlockQuote(_) => self.style_stack.push(self.styles.blockquote),
            Tag::Link { .. } => self.style_stack.push(self.styles.link),
            Tag::List(start) => self.lists.push(start),
            Tag::Item => self.set_list_marker(),
            Tag::CodeBlock(kind) => self.start_code(kind),
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                self.flush_line();
                self.lines.push(Line::default());
            }
            TagEnd::Heading(_) => {
                self.style_stack.pop();
                self.flush_line();
            }
            TagEnd::Emphasis
            | TagEnd::Strong
            | TagEnd::Strikethrough
            | TagEnd::BlockQuote(_)
            | TagEnd::Link => {
                self.style_stack.pop();
            }
            TagEnd::List(_) => {
                self.lists.pop();
                self.flush_line();
            }
            TagEnd::Item => self.flush_line(),
            TagEnd::CodeBlock => self.end_code(),
            _ => {}
        }
    }

    fn text(&mut self, text: &str) {
        if let Some(buf) = self.code_buf.as_mut() {
            buf.push_str(text);
            return;
        }
        let span = self.styled_span(text);
        self.current.push(span);
    }

    fn inline_code(&mut self, code: &str) {
        let padded = format!(" {code} ");
        self.current
            .push(Span::styled(padded, self.styles.inline_code));
    }

    // Ordered markers count up from the list's start number.
    fn set_list_marker(&mut self) {
        let indent = "  ".repeat(self.lists.len().saturating_sub(1));
        let marker = match self.lists.last_mut() {
            Some(Some(number)) => {
                let label = format!("{indent}{number}. ");
                *number += 1;
                label
            }
            _ => format!("{indent}• "),
        };
        self.pending_marker = Some(Span::styled(marker, self.styles.list_marker));
    }

    fn start_code(&mut self, kind: CodeBlockKind<'_>) {
        self.flush_line();
        self.code_buf = Some(String::new());
        self.code_lang = match kind {
            CodeBlockKind::Fenced(lang) if !lang.is_empty() => Some(lang.to_string()),
            _ => None,
        };
    }

    fn end_code(&mut self) {
        let code = self.code_buf.take().unwrap_or_default();
        let lang = self.code_lang.take();
        let highlighted = highlight_code(&code, lang.as_deref());
        self.push_code_box(highlighted, lang.as_deref());
    }

    fn push_code_box(&mut self, code_lines: Vec<Line<'static>>, lang: Option<&str>) {
        let inner_width = code_lines
            .iter()
            .map(line_width)
            .max()
            .unwrap_or(0)
            .max(MIN_CODE_WIDTH);
        let box_width = inner_width + 2;

        let header = header_line(lang.unwrap_or("code"), box_width, &self.styles);
        self.lines.push(header);
        for line in code_lines {
            let gutter = gutter_line(line, &self.styles);
            self.lines.push(gutter);
        }
        self.lines.push(footer_line(box_width, &self.styles));
        self.lines.push(Line::default());
    }

    fn rule(&mut self) {
        self.flush_line();
        self.lines.push(Line::from(Span::styled(
            chrome::HORIZONTAL.repeat(24),
            self.styles.code_border,
        )));
    }

    fn flush_line(&mut self) {
        if self.current.is_empty() && self.pending_marker.is_none() {
            return;
        }
        let mut spans = Vec::new();
        if let Some(marker) = self.pending_marker.take() {
            spans.push(marker);
        }
        spans.append(&mut self.current);
        self.lines.push(Line::from(spans));
    }

    fn styled_span(&self, text: &str) -> Span<'static> {
        let style = self.style_stack.last().copied().unwrap_or_default();
        Span::styled(text.to_string(), style)
    }

    fn heading_style(&self, level: HeadingLevel) -> Style {
        match level {
            HeadingLevel::H1 => self.styles.h1,
            HeadingLevel::H2 => self.styles.h2,
            _ => self.styles.h3,
        }
    }
}

/// Top edge of a code box: `╭─ python ───`
fn header_line(lang: &str, width: usize, styles: &MarkdownStyles) -> Line<'static> {
    let label = format!(" {lang} ");
    let used = 2 + label.chars().count();
    let fill = chrome::HORIZONTAL.repeat(width.saturating_sub(used));
    Line::from(vec![
        Span::styled(
            format!("{}{}", chrome::TOP_LEFT, chrome::HORIZONTAL),
            styles.code_border,
        ),
        Span::styled(label, styles.code_header),
        Span::styled(fill, styles.code_border),
    ])
}

/// A gutter plus the highlighted source, tinted with the code background.
/// No right edge; the background stops where the line does.
fn gutter_line(line: Line<'static>, styles: &MarkdownStyles) -> Line<'static> {
    let mut spans = Vec::with_capacity(line.spans.len() + 1);
    spans.push(Span::styled(
        format!("{} ", chrome::VERTICAL),
        styles.code_border,
    ));
    for mut span in line.spans {
        span.style = styles.code_bg.patch(span.style);
        spans.push(span);
    }
    Line::from(spans)
}

/// Bottom edge: `╰────`
fn footer_line(width: usize, styles: &MarkdownStyles) -> Line<'static> {
    let bar = chrome::HORIZONTAL.repeat(width.saturating_sub(1));
    Line::from(Span::styled(
        format!("{}{bar}", chrome::BOTTOM_LEFT),
        styles.code_border,
    ))
}

fn line_width(line: &Line<'_>) -> usize {
    line.spans
        .iter()
        .map(|span| span.content.chars().count())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::{ColorLevel, TerminalPalette};
    use crate::ui::theme::Theme;

    fn styles() -> MarkdownStyles {
        let palette = TerminalPalette::new(ColorLevel::TrueColor);
        MarkdownStyles::from_theme(&Theme::from_name("deepsea", &palette))
    }

    fn plain(text: &Text<'_>) -> Vec<String> {
        text.lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn plain_prose_is_one_line() {
        let text = render_markdown("mrrp, hello", &styles());
        assert_eq!(plain(&text), vec!["mrrp, hello"]);
    }

    #[test]
    fn paragraphs_are_separated_by_a_blank_line() {
        let text = render_markdown("first\n\nsecond", &styles());
        assert_eq!(plain(&text), vec!["first", "", "second"]);
    }

    #[test]
    fn heading_style_does_not_leak_into_following_text() {
        let text = render_markdown("# Meow\n\nbody", &styles());
        let body_line = text
            .lines
            .iter()
            .find(|line| line.to_string() == "body")
            .expect("body line");
        assert_eq!(body_line.spans[0].style, Style::default());
    }

    #[test]
    fn code_boxes_carry_a_language_header_and_closed_bottom() {
        let text = render_markdown("```python\nprint(9)\n```", &styles());
        let lines = plain(&text);
        assert!(lines[0].starts_with("╭─ python "));
        assert!(lines[1].starts_with("│ print(9)"));
        assert!(lines.last().unwrap().starts_with("╰─"));
    }

    #[test]
    fn untagged_fences_are_labelled_code() {
        let text = render_markdown("```\nmeow\n```", &styles());
        assert!(plain(&text)[0].contains(" code "));
    }

    #[test]
    fn ordered_lists_count_upward() {
        let text = render_markdown("1. one\n2. two\n3. three", &styles());
        let lines = plain(&text);
        assert_eq!(lines[0], "1. one");
        assert_eq!(lines[1], "2. two");
        assert_eq!(lines[2], "3. three");
    }

    #[test]
    fn unordered_lists_use_bullets() {
        let text = render_markdown("- tuna\n- salmon", &styles());
        let lines = plain(&text);
        assert!(lines[0].starts_with("• tuna"));
        assert!(lines[1].starts_with("• salmon"));
    }

    #[test]
    fn inline_code_is_padded_for_its_background() {
        let text = render_markdown("run `print` now", &styles());
        let line = plain(&text).remove(0);
        assert!(line.contains(" print "));
    }

    #[test]
    fn trailing_blank_lines_are_trimmed() {
        let text = render_markdown("only one paragraph", &styles());
        assert!(!text.lines.last().unwrap().spans.is_empty());
    }
}
