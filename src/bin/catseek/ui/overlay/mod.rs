mod help;
mod pager;
mod picker;

use ratatui::layout::{Constraint, Direction, Layout, Margin, Rect};
use ratatui::Frame;

use crate::runtime::OverlayState;

use super::theme::Theme;

const PICKER_WIDTH_PCT: u16 = 60;
const PICKER_HEIGHT_PCT: u16 = 50;
const HELP_WIDTH_PCT: u16 = 70;
const HELP_HEIGHT_PCT: u16 = 60;

pub fn render_overlay(frame: &mut Frame<'_>, area: Rect, overlay: &OverlayState, theme: &Theme) {
    match overlay {
        OverlayState::None => {}
        OverlayState::Help => {
            help::render_help(frame, centered_rect(HELP_WIDTH_PCT, HELP_HEIGHT_PCT, area), theme)
        }
        OverlayState::EnginePicker(state) | OverlayState::ChatPicker(state) => picker::render_picker(
            frame,
            centered_rect(PICKER_WIDTH_PCT, PICKER_HEIGHT_PCT, area),
            state,
            theme,
        ),
        // One row in from every edge; keep in step with the controller's
        // pager viewport math.
        OverlayState::Pager(state) => pager::render_pager(
            frame,
            area.inner(Margin {
                horizontal: 1,
                vertical: 1,
            }),
            state,
            theme,
        ),
    }
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(rows[1])[1]
}
