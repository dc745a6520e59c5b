use ratatui::layout::Rect;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;

use catseek::Conversation;

use crate::runtime::AppState;

use super::theme::Theme;

/// The chat list only appears when the terminal is wide enough to leave a
/// comfortable transcript next to it.
pub(super) const SIDEBAR_MIN_TERMINAL_WIDTH: u16 = 70;
pub(super) const SIDEBAR_WIDTH: u16 = 24;

const HEADER_HEIGHT: u16 = 1;

pub fn render_sidebar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(theme.border);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height <= HEADER_HEIGHT {
        return;
    }

    let header = Paragraph::new(Line::from(Span::styled("chats", theme.muted)));
    frame.render_widget(header, Rect::new(inner.x, inner.y, inner.width, HEADER_HEIGHT));

    let list_area = Rect::new(
        inner.x,
        inner.y + HEADER_HEIGHT,
        inner.width,
        inner.height - HEADER_HEIGHT,
    );
    let active = state.session.current_index();
    let items: Vec<ListItem> = state
        .session
        .conversations()
        .iter()
        .enumerate()
        .map(|(index, conversation)| chat_item(conversation, index, index == active, theme))
        .collect();
    frame.render_widget(List::new(items), list_area);
}

fn chat_item(
    conversation: &Conversation,
    index: usize,
    active: bool,
    theme: &Theme,
) -> ListItem<'static> {
    let marker = if active { "▸ " } else { "  " };
    let style = if active { theme.accent } else { theme.muted };
    let line = Line::from(vec![
        Span::styled(marker.to_string(), style),
        Span::styled(chat_label(conversation, index), style),
    ]);
    ListItem::new(Text::from(line))
}

/// Display label for a conversation, falling back to its 1-based position
/// while it has no messages to derive a title from.
pub fn chat_label(conversation: &Conversation, index: usize) -> String {
    conversation
        .title()
        .unwrap_or_else(|| format!("Chat {}", index + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use catseek::{Engine, EnginePreset, Role, Session};

    #[test]
    fn empty_chats_are_numbered_from_one() {
        let session = Session::new(Engine::new(EnginePreset::Catgpt));
        assert_eq!(chat_label(session.active(), 0), "Chat 1");
        assert_eq!(chat_label(session.active(), 2), "Chat 3");
    }

    #[test]
    fn titled_chats_use_their_first_message() {
        let mut session = Session::new(Engine::new(EnginePreset::Catgpt));
        session.append(Role::User, "where is my food");
        assert_eq!(chat_label(session.active(), 0), "where is my food");
    }
}
