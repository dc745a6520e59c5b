use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use super::super::theme::Theme;

pub fn render_help(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    frame.render_widget(Clear, area);

    let lines = vec![
        help_line("Send", "Enter · Shift+Enter for a newline", theme),
        help_line("Chats", "Ctrl+n new · Ctrl+o pick · Alt+↑/↓ switch", theme),
        help_line("Engines", "Ctrl+p pick a preset (opens a new chat)", theme),
        help_line("Scroll", "↑/↓ · Ctrl+u/d page · Ctrl+l bottom", theme),
        help_line("Messages", "Tab focus · j/k move · Enter view · y copy", theme),
        help_line("Run code", "Ctrl+r latest block · r selected message", theme),
        help_line("Cancel", "Esc stops a pending reply", theme),
        help_line("Quit", "Ctrl+c", theme),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_focused)
                .style(theme.code_bg)
                .title(" Help "),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn help_line<'a>(key: &'a str, desc: &'a str, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            format!("{key}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc, theme.muted),
    ])
}
