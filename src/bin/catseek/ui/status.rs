use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::runtime::{AppState, AppStatus, SandboxHealth};

use super::theme::{indicators, Theme};

const CHAT_COUNT_MIN_WIDTH: u16 = 60;
const RUNNER_MIN_WIDTH: u16 = 80;
/// Ticks per half blink while thinking; one tick is 50ms.
const BLINK_TICKS: usize = 5;

/// The resident cat, drawn in four moods.
mod faces {
    pub const AWAKE: &str = "=^.^=";
    pub const BLINK: &str = "=-.-=";
    pub const SLEEPY: &str = "=z.z=";
    pub const FOCUSED: &str = "=~.~=";
}

pub struct StatusLine {
    pub left: Vec<Span<'static>>,
    pub right: Vec<Span<'static>>,
}

pub fn render_status(frame: &mut Frame<'_>, area: Rect, line: StatusLine, theme: &Theme) {
    let left_width = spans_width(&line.left);
    let right_width = spans_width(&line.right);
    let filler_width = area.width.saturating_sub(left_width + right_width);
    let filler = Span::styled(" ".repeat(filler_width as usize), theme.status);
    let mut spans = Vec::with_capacity(line.left.len() + line.right.len() + 1);
    spans.extend(line.left);
    spans.push(filler);
    spans.extend(line.right);
    let paragraph = Paragraph::new(Line::from(spans)).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

fn spans_width(spans: &[Span<'static>]) -> u16 {
    spans.iter().map(|span| span.content.width() as u16).sum()
}

pub fn build_status_line(state: &AppState, theme: &Theme) -> StatusLine {
    StatusLine {
        left: left_spans(state, theme),
        right: right_spans(state, theme),
    }
}

fn left_spans(state: &AppState, theme: &Theme) -> Vec<Span<'static>> {
    let preset = state.session.active().engine().preset().name();
    let label = if state.terminal_size.0 < CHAT_COUNT_MIN_WIDTH {
        preset.to_string()
    } else {
        format!(
            "{preset} · chat {}/{}",
            state.session.current_index() + 1,
            state.session.len()
        )
    };
    vec![Span::styled(label, theme.status)]
}

fn right_spans(state: &AppState, theme: &Theme) -> Vec<Span<'static>> {
    let mut spans = Vec::new();
    if let Some(notice) = &state.notice {
        spans.push(Span::styled(notice.text.clone(), theme.status_warn));
    }
    if state.terminal_size.0 >= RUNNER_MIN_WIDTH {
        let runner = runner_spans(&state.sandbox, theme);
        if !runner.is_empty() {
            join(&mut spans, theme);
            spans.extend(runner);
        }
    }
    let status = status_spans(state, theme);
    if !status.is_empty() {
        join(&mut spans, theme);
        spans.extend(status);
    }
    spans
}

fn join(spans: &mut Vec<Span<'static>>, theme: &Theme) {
    if !spans.is_empty() {
        spans.push(Span::styled(" · ", theme.status));
    }
}

fn runner_spans(health: &SandboxHealth, theme: &Theme) -> Vec<Span<'static>> {
    match health {
        SandboxHealth::Ready(_) => vec![
            Span::styled(format!("{} ", indicators::CHECK), theme.status_ok),
            Span::styled("runner".to_string(), theme.status),
        ],
        SandboxHealth::Unavailable(_) => vec![
            Span::styled(format!("{} ", indicators::CROSS), theme.status_warn),
            Span::styled("runner".to_string(), theme.status),
        ],
        SandboxHealth::Disabled => vec![Span::styled("runner off".to_string(), theme.status)],
        SandboxHealth::Unknown => Vec::new(),
    }
}

fn status_spans(state: &AppState, theme: &Theme) -> Vec<Span<'static>> {
    match &state.status {
        AppStatus::Booting => face_spans(faces::SLEEPY, "waking up...", theme),
        AppStatus::Idle => face_spans(faces::AWAKE, "idle", theme),
        AppStatus::Thinking => face_spans(thinking_face(state), "thinking...", theme),
        AppStatus::Running => face_spans(faces::FOCUSED, "running code...", theme),
        AppStatus::Disabled(reason) => vec![
            Span::styled(format!("{} ", indicators::CROSS), theme.status_error),
            Span::styled(format!("disabled: {reason}"), theme.status_error),
        ],
    }
}

fn face_spans(face: &'static str, label: &str, theme: &Theme) -> Vec<Span<'static>> {
    vec![
        Span::styled(format!("{face} "), theme.status_indicator),
        Span::styled(label.to_string(), theme.status),
    ]
}

fn thinking_face(state: &AppState) -> &'static str {
    if !state.animation.is_enabled() {
        return faces::AWAKE;
    }
    if (state.animation.frame() / BLINK_TICKS) % 2 == 1 {
        faces::BLINK
    } else {
        faces::AWAKE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::terminal::{ColorLevel, TerminalProfile};

    fn state(animate: bool) -> AppState {
        let profile = TerminalProfile {
            color_level: ColorLevel::TrueColor,
            animate,
        };
        AppState::new(AppConfig::default(), profile, (80, 24))
    }

    fn theme() -> Theme {
        let palette =
            crate::terminal::TerminalPalette::new(ColorLevel::TrueColor);
        Theme::from_name("deepsea", &palette)
    }

    fn flatten(spans: &[Span<'_>]) -> String {
        spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn the_cat_blinks_while_thinking() {
        let mut state = state(true);
        state.status = AppStatus::Thinking;
        assert_eq!(thinking_face(&state), faces::AWAKE);
        for _ in 0..BLINK_TICKS {
            state.animation.tick();
        }
        assert_eq!(thinking_face(&state), faces::BLINK);
    }

    #[test]
    fn disabled_animation_keeps_the_eyes_open() {
        let mut state = state(false);
        state.status = AppStatus::Thinking;
        for _ in 0..BLINK_TICKS {
            state.animation.tick();
        }
        assert_eq!(thinking_face(&state), faces::AWAKE);
    }

    #[test]
    fn a_disabled_app_reports_its_reason() {
        let mut state = state(true);
        state.status = AppStatus::Disabled("engine failed".to_string());
        let text = flatten(&status_spans(&state, &theme()));
        assert!(text.contains("engine failed"));
    }

    #[test]
    fn the_left_side_names_the_engine_and_chat() {
        let state = state(true);
        let text = flatten(&left_spans(&state, &theme()));
        assert_eq!(text, "catgpt · chat 1/1");
    }

    #[test]
    fn narrow_terminals_drop_the_chat_counter() {
        let mut state = state(true);
        state.terminal_size = (50, 24);
        let text = flatten(&left_spans(&state, &theme()));
        assert_eq!(text, "catgpt");
    }

    #[test]
    fn span_width_counts_display_cells() {
        let spans = vec![Span::raw("=^.^= "), Span::raw("idle")];
        assert_eq!(spans_width(&spans), 10);
    }
}
