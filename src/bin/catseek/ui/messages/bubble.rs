use chrono::Local;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

use catseek::{Message, Role};

use super::super::markdown::{render_markdown, MarkdownStyles};
use super::super::theme::{borders, Theme};

const BORDER: &str = borders::LEFT_BORDER;

/// Renders one message as a bubble: a sender line, the markdown body behind
/// a role-tinted background, and a closing border row as separation.
pub(super) fn render_bubble(
    message: &Message,
    theme: &Theme,
    selected: bool,
    assistant_name: &str,
    show_timestamp: bool,
) -> Text<'static> {
    let (role_border, bg) = role_styles(message.role, theme);
    let border = if selected {
        theme.selected_border
    } else {
        role_border
    };

    let styles = MarkdownStyles::from_theme(theme);
    let body = render_markdown(&message.text, &styles);

    let mut lines = Vec::with_capacity(body.lines.len() + 2);
    lines.push(sender_line(
        message,
        theme,
        border,
        assistant_name,
        show_timestamp,
    ));
    for line in body.lines {
        lines.push(bordered(line, border, bg));
    }
    lines.push(Line::from(Span::styled(BORDER.to_string(), border)));
    Text::from(lines)
}

fn role_styles(role: Role, theme: &Theme) -> (Style, Style) {
    match role {
        Role::User => (theme.user_border, theme.user_bg),
        Role::Assistant => (theme.assistant_border, theme.assistant_bg),
        Role::System => (theme.system_border, theme.system_bg),
    }
}

fn sender_line(
    message: &Message,
    theme: &Theme,
    border: Style,
    assistant_name: &str,
    show_timestamp: bool,
) -> Line<'static> {
    let name = match message.role {
        Role::User => "you",
        Role::Assistant => assistant_name,
        Role::System => "system",
    };
    let mut spans = vec![
        Span::styled(format!("{BORDER} "), border),
        Span::styled(name.to_string(), border.add_modifier(Modifier::BOLD)),
    ];
    if show_timestamp {
        let stamp = message.timestamp.with_timezone(&Local).format("%H:%M");
        spans.push(Span::styled(format!("  {stamp}"), theme.muted));
    }
    Line::from(spans)
}

/// Role background underneath, span styling on top, so code blocks keep
/// their own background.
fn bordered(line: Line<'static>, border: Style, bg: Style) -> Line<'static> {
    let mut spans = Vec::with_capacity(line.spans.len() + 1);
    spans.push(Span::styled(format!("{BORDER} "), border));
    for mut span in line.spans {
        span.style = bg.patch(span.style);
        spans.push(span);
    }
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::{ColorLevel, TerminalPalette};

    fn theme() -> Theme {
        let palette = TerminalPalette::new(ColorLevel::TrueColor);
        Theme::from_name("deepsea", &palette)
    }

    fn plain(text: &Text<'_>) -> String {
        text.lines
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn user_bubbles_carry_the_sender_and_body() {
        let message = Message::new(Role::User, "feed me");
        let rendered = render_bubble(&message, &theme(), false, "catgpt", false);
        let text = plain(&rendered);
        assert!(text.starts_with(&format!("{BORDER} you")));
        assert!(text.contains("feed me"));
    }

    #[test]
    fn assistant_bubbles_are_labelled_with_the_engine_name() {
        let message = Message::new(Role::Assistant, "meow");
        let rendered = render_bubble(&message, &theme(), false, "copycat", false);
        assert!(plain(&rendered).contains("copycat"));
    }

    #[test]
    fn selection_swaps_the_border_style() {
        let theme = theme();
        let message = Message::new(Role::User, "hi");
        let normal = render_bubble(&message, &theme, false, "catgpt", false);
        let selected = render_bubble(&message, &theme, true, "catgpt", false);
        assert_eq!(normal.lines[0].spans[0].style, theme.user_border);
        assert_eq!(selected.lines[0].spans[0].style, theme.selected_border);
    }

    #[test]
    fn timestamps_show_only_when_asked() {
        let message = Message::new(Role::User, "hi");
        let with = render_bubble(&message, &theme(), false, "catgpt", true);
        let without = render_bubble(&message, &theme(), false, "catgpt", false);
        assert!(with.lines[0].to_string().contains(':'));
        assert!(!without.lines[0].to_string().contains(':'));
    }

    #[test]
    fn bubbles_end_with_a_bare_border_row() {
        let message = Message::new(Role::System, "runner offline");
        let rendered = render_bubble(&message, &theme(), false, "catgpt", false);
        assert_eq!(rendered.lines.last().unwrap().to_string(), BORDER);
    }
}
