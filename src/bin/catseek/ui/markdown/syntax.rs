use std::sync::OnceLock;

use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Style as SyntectStyle, Theme, ThemeSet};
use syntect::parsing::SyntaxSet;

static SYNTAX_SET: OnceLock<SyntaxSet> = OnceLock::new();
static THEME: OnceLock<Theme> = OnceLock::new();

/// Highlights a fenced block, one styled line per source line.
///
/// Unknown language tags fall back to plain text; a highlighter error on a
/// single line keeps that line unstyled rather than dropping it.
pub fn highlight_code(code: &str, language: Option<&str>) -> Vec<Line<'static>> {
    let set = syntax_set();
    let syntax = language
        .and_then(|lang| set.find_syntax_by_token(lang))
        .unwrap_or_else(|| set.find_syntax_plain_text());
    let mut highlighter = HighlightLines::new(syntax, theme());
    code.lines()
        .map(|line| match highlighter.highlight_line(line, set) {
            Ok(regions) => regions_to_line(regions),
            Err(_) => Line::from(line.to_string()),
        })
        .collect()
}

fn regions_to_line(regions: Vec<(SyntectStyle, &str)>) -> Line<'static> {
    let spans = regions
        .into_iter()
        .map(|(style, text)| {
            let fg = Color::Rgb(style.foreground.r, style.foreground.g, style.foreground.b);
            Span::styled(text.to_string(), Style::default().fg(fg))
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

fn syntax_set() -> &'static SyntaxSet {
    SYNTAX_SET.get_or_init(SyntaxSet::load_defaults_newlines)
}

fn theme() -> &'static Theme {
    THEME.get_or_init(|| {
        let themes = ThemeSet::load_defaults();
        themes
            .themes
            .get("base16-ocean.dark")
            .cloned()
            .unwrap_or_else(|| themes.themes.values().next().cloned().unwrap_or_default())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(lines: &[Line<'_>]) -> String {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|span| span.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn python_source_survives_highlighting_verbatim() {
        let lines = highlight_code("def meow():\n    return 9", Some("python"));
        assert_eq!(plain(&lines), "def meow():\n    return 9");
    }

    #[test]
    fn keywords_get_their_own_span() {
        let lines = highlight_code("def meow(): pass", Some("python"));
        assert!(lines[0].spans.len() > 1);
    }

    #[test]
    fn unknown_languages_fall_back_to_plain_text() {
        let lines = highlight_code("meow meow", Some("felinescript"));
        assert_eq!(plain(&lines), "meow meow");
    }
}
