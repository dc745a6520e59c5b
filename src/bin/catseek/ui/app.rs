use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::Text;
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::runtime::{AppState, AppStatus, Focus};
use crate::terminal::TerminalPalette;

use super::input::{input_height, render_input, InputProps, MIN_INPUT_HEIGHT};
use super::messages::{render_transcript, MessageRenderer, TranscriptProps};
use super::overlay::render_overlay;
use super::sidebar::{render_sidebar, SIDEBAR_MIN_TERMINAL_WIDTH, SIDEBAR_WIDTH};
use super::status::{build_status_line, render_status};
use super::theme::Theme;

const MIN_WIDTH: u16 = 40;
const MIN_HEIGHT: u16 = 10;
const COMPACT_WIDTH: u16 = 60;
const STATUS_HEIGHT: u16 = 1;

pub fn render_app(frame: &mut Frame<'_>, state: &AppState, renderer: &mut MessageRenderer) {
    let palette = TerminalPalette::new(state.profile.color_level);
    let theme = Theme::from_name(&state.config.ui.theme, &palette);
    let size = frame.area();
    if size.width < MIN_WIDTH || size.height < MIN_HEIGHT {
        render_too_small(frame, size, &theme);
        return;
    }
    let (sidebar, main) = split_columns(size);
    if let Some(sidebar_area) = sidebar {
        render_sidebar(frame, sidebar_area, state, &theme);
    }
    let areas = split_rows(main, state);
    render_transcript_area(frame, state, renderer, &theme, areas.transcript);
    render_status(frame, areas.status, build_status_line(state, &theme), &theme);
    render_input_area(frame, state, &theme, areas.input);
    render_overlay(frame, size, &state.overlay, &theme);
}

fn split_columns(area: Rect) -> (Option<Rect>, Rect) {
    if area.width < SIDEBAR_MIN_TERMINAL_WIDTH {
        return (None, area);
    }
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(1)])
        .split(area);
    (Some(columns[0]), columns[1])
}

struct MainAreas {
    transcript: Rect,
    status: Rect,
    input: Rect,
}

fn split_rows(area: Rect, state: &AppState) -> MainAreas {
    // The input bar grows with its content but never past half the screen.
    let input_h = input_height(&state.input, area.width)
        .min(area.height / 2)
        .max(MIN_INPUT_HEIGHT);
    let transcript_h = area.height.saturating_sub(input_h + STATUS_HEIGHT);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(transcript_h),
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Length(input_h),
        ])
        .split(area);
    MainAreas {
        transcript: rows[0],
        status: rows[1],
        input: rows[2],
    }
}

fn render_transcript_area(
    frame: &mut Frame<'_>,
    state: &AppState,
    renderer: &mut MessageRenderer,
    theme: &Theme,
    area: Rect,
) {
    let conversation = state.session.active();
    render_transcript(
        frame,
        renderer,
        TranscriptProps {
            area,
            messages: conversation.messages(),
            theme,
            scroll: state.scroll,
            selected: state.selected_message,
            assistant_name: conversation.engine().preset().name(),
            show_timestamps: state.config.ui.timestamps,
        },
    );
}

fn render_input_area(frame: &mut Frame<'_>, state: &AppState, theme: &Theme, area: Rect) {
    let focused = state.focus == Focus::Input && !state.overlay.is_open();
    render_input(
        frame,
        InputProps {
            area,
            buffer: &state.input,
            theme,
            placeholder: placeholder_for(state, area.width),
            focused,
            show_cursor: focused && !state.status.input_blocked(),
        },
    );
}

fn placeholder_for(state: &AppState, width: u16) -> &'static str {
    match &state.status {
        AppStatus::Booting => "waking up...",
        AppStatus::Disabled(_) => "input disabled",
        _ if width < COMPACT_WIDTH => "Message...",
        _ => "Message the cat...",
    }
}

fn render_too_small(frame: &mut Frame<'_>, area: Rect, theme: &Theme) {
    let message = format!("Terminal too small (min {MIN_WIDTH}x{MIN_HEIGHT}). Resize to continue.");
    let paragraph = Paragraph::new(Text::from(message))
        .block(Block::default().borders(Borders::ALL).title(" catseek "))
        .style(theme.status_warn);
    frame.render_widget(paragraph, area);
}
