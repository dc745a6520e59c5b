use catseek::EnginePreset;
use crossterm::event::{KeyCode, KeyEvent};

use crate::runtime::overlay::{OverlayState, PagerState, PickerState};

use super::AppController;

const SCROLL_STEP: usize = 1;

/// Rows of the pager box that show content, given the terminal height:
/// the box sits one row in from each edge and spends two rows on borders
/// plus one on the key hints.
pub fn pager_height(terminal_height: u16) -> usize {
    usize::from(terminal_height.saturating_sub(5)).max(1)
}

pub fn handle_overlay_key(controller: &mut AppController, key: KeyEvent) -> bool {
    let height = controller.state.terminal_size.1;
    let result = match &mut controller.state.overlay {
        OverlayState::None => OverlayResult::pass(),
        OverlayState::Help => handle_help(key),
        OverlayState::EnginePicker(state) => handle_picker(state, key, PickerKind::Engine),
        OverlayState::ChatPicker(state) => handle_picker(state, key, PickerKind::Chat),
        OverlayState::Pager(state) => handle_pager(state, key, height),
    };
    if result.close {
        controller.state.overlay = OverlayState::None;
    }
    match result.action {
        OverlayAction::None => false,
        OverlayAction::Handled => true,
        OverlayAction::EngineChosen(id) => match id.parse::<EnginePreset>() {
            Ok(preset) => controller.switch_engine(preset),
            Err(_) => false,
        },
        OverlayAction::ChatChosen(id) => match id.parse::<usize>() {
            Ok(index) => controller.switch_chat(index),
            Err(_) => false,
        },
    }
}

#[derive(Clone, Copy)]
enum PickerKind {
    Engine,
    Chat,
}

enum OverlayAction {
    None,
    Handled,
    EngineChosen(String),
    ChatChosen(String),
}

struct OverlayResult {
    action: OverlayAction,
    close: bool,
}

impl OverlayResult {
    fn pass() -> Self {
        Self {
            action: OverlayAction::None,
            close: false,
        }
    }

    fn handled() -> Self {
        Self {
            action: OverlayAction::Handled,
            close: false,
        }
    }

    fn close() -> Self {
        Self {
            action: OverlayAction::Handled,
            close: true,
        }
    }

    fn chosen(kind: PickerKind, id: String) -> Self {
        let action = match kind {
            PickerKind::Engine => OverlayAction::EngineChosen(id),
            PickerKind::Chat => OverlayAction::ChatChosen(id),
        };
        Self {
            action,
            close: true,
        }
    }
}

fn handle_help(key: KeyEvent) -> OverlayResult {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::F(1) => {
            OverlayResult::close()
        }
        _ => OverlayResult::handled(),
    }
}

fn handle_picker(state: &mut PickerState, key: KeyEvent, kind: PickerKind) -> OverlayResult {
    match key.code {
        KeyCode::Esc => OverlayResult::close(),
        KeyCode::Up => {
            state.move_up();
            OverlayResult::handled()
        }
        KeyCode::Down => {
            state.move_down();
            OverlayResult::handled()
        }
        KeyCode::Enter => match state.selected_item() {
            Some(item) => OverlayResult::chosen(kind, item.id.clone()),
            None => OverlayResult::handled(),
        },
        KeyCode::Backspace => {
            state.pop_char();
            OverlayResult::handled()
        }
        KeyCode::Char(ch) => {
            state.push_char(ch);
            OverlayResult::handled()
        }
        _ => OverlayResult::handled(),
    }
}

fn handle_pager(state: &mut PagerState, key: KeyEvent, terminal_height: u16) -> OverlayResult {
    let viewport = pager_height(terminal_height);
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => OverlayResult::close(),
        KeyCode::Up | KeyCode::Char('k') => {
            state.scroll_up(SCROLL_STEP);
            OverlayResult::handled()
        }
        KeyCode::Down | KeyCode::Char('j') => {
            state.scroll_down(SCROLL_STEP, viewport);
            OverlayResult::handled()
        }
        KeyCode::PageUp => {
            state.scroll_up(viewport);
            OverlayResult::handled()
        }
        KeyCode::PageDown => {
            state.scroll_down(viewport, viewport);
            OverlayResult::handled()
        }
        KeyCode::Home | KeyCode::Char('g') => {
            state.scroll_to_top();
            OverlayResult::handled()
        }
        KeyCode::End | KeyCode::Char('G') => {
            state.scroll_to_bottom(viewport);
            OverlayResult::handled()
        }
        _ => OverlayResult::handled(),
    }
}
