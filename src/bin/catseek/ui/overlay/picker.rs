use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph};
use ratatui::Frame;

use crate::runtime::{PickerItem, PickerState};

use super::super::theme::Theme;

const QUERY_HEIGHT: u16 = 1;

pub fn render_picker(frame: &mut Frame<'_>, area: Rect, state: &PickerState, theme: &Theme) {
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_focused)
        .style(theme.code_bg)
        .title(format!(" {} ", state.title));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height <= QUERY_HEIGHT {
        return;
    }

    let query_line = Line::from(vec![
        Span::styled("Search: ", theme.muted),
        Span::raw(state.query.clone()),
    ]);
    frame.render_widget(
        Paragraph::new(query_line),
        Rect::new(inner.x, inner.y, inner.width, QUERY_HEIGHT),
    );

    let list_area = Rect::new(
        inner.x,
        inner.y + QUERY_HEIGHT,
        inner.width,
        inner.height - QUERY_HEIGHT,
    );
    let items: Vec<ListItem> = state
        .filtered
        .iter()
        .enumerate()
        .map(|(position, &index)| picker_row(&state.items[index], position == state.selected, theme))
        .collect();
    frame.render_widget(List::new(items), list_area);
}

fn picker_row(item: &PickerItem, selected: bool, theme: &Theme) -> ListItem<'static> {
    let mut spans = vec![Span::raw(item.label.clone())];
    if !item.description.is_empty() {
        spans.push(Span::styled(format!("  {}", item.description), theme.muted));
    }
    let mut style = Style::default();
    if selected {
        style = style.add_modifier(Modifier::REVERSED);
    }
    ListItem::new(Text::from(Line::from(spans))).style(style)
}
