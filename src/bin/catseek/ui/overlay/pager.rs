use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::runtime::PagerState;

use super::super::theme::Theme;

const HELP_HEIGHT: u16 = 1;

pub fn render_pager(frame: &mut Frame<'_>, area: Rect, state: &PagerState, theme: &Theme) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused)
        .style(theme.code_bg)
        .title(format!(" {} ", state.title));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height <= HELP_HEIGHT {
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(HELP_HEIGHT)])
        .split(inner);
    let text = Text::from(
        state
            .lines
            .iter()
            .map(|line| Line::from(line.clone()))
            .collect::<Vec<_>>(),
    );
    let scroll = state.scroll.min(usize::from(u16::MAX)) as u16;
    let content = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    frame.render_widget(content, rows[0]);

    let help = Paragraph::new("Esc close · j/k scroll · g/G top/bottom").style(theme.muted);
    frame.render_widget(help, rows[1]);
}
