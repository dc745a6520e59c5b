use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::runtime::state::Focus;

use super::overlay_keys;
use super::AppController;

const PAGE_SCROLL_LINES: u16 = 10;

pub fn dispatch_key(controller: &mut AppController, key: KeyEvent) -> bool {
    if controller.state.overlay.is_open() {
        return overlay_keys::handle_overlay_key(controller, key);
    }
    handle_main_key(controller, key)
}

fn handle_main_key(controller: &mut AppController, key: KeyEvent) -> bool {
    if controller.state.status.input_blocked() {
        return handle_blocked_key(controller, key);
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return handle_ctrl_key(controller, key);
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        return handle_alt_key(controller, key);
    }
    match key.code {
        KeyCode::Esc => return handle_escape(controller),
        KeyCode::Tab => return controller.toggle_focus(),
        KeyCode::F(1) => return controller.open_help(),
        _ => {}
    }
    match controller.state.focus {
        Focus::Messages => handle_messages_key(controller, key),
        Focus::Input => handle_input_key(controller, key),
    }
}

/// Before boot completes, and forever after a boot failure, only
/// reading and leaving are allowed.
fn handle_blocked_key(controller: &mut AppController, key: KeyEvent) -> bool {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => quit(controller),
            KeyCode::Char('u') => scroll_page_up(controller),
            KeyCode::Char('d') => scroll_page_down(controller),
            _ => false,
        };
    }
    match key.code {
        KeyCode::Up => {
            controller.state.scroll.scroll_up(1);
            true
        }
        KeyCode::Down => {
            controller.state.scroll.scroll_down(1);
            true
        }
        KeyCode::PageUp => scroll_page_up(controller),
        KeyCode::PageDown => scroll_page_down(controller),
        KeyCode::F(1) => controller.open_help(),
        _ => false,
    }
}

fn handle_ctrl_key(controller: &mut AppController, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('c') => quit(controller),
        KeyCode::Char('n') => controller.start_new_chat(),
        KeyCode::Char('p') => controller.open_engine_picker(),
        KeyCode::Char('o') => controller.open_chat_picker(),
        KeyCode::Char('r') => controller.run_latest_code(),
        KeyCode::Char('l') => {
            controller.state.scroll.reset();
            true
        }
        KeyCode::Char('u') => scroll_page_up(controller),
        KeyCode::Char('d') => scroll_page_down(controller),
        KeyCode::Enter => controller.submit_prompt(),
        _ => false,
    }
}

fn handle_alt_key(controller: &mut AppController, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up => controller.switch_prev_chat(),
        KeyCode::Down => controller.switch_next_chat(),
        _ => false,
    }
}

fn handle_escape(controller: &mut AppController) -> bool {
    if controller.state.focus == Focus::Messages {
        controller.state.focus = Focus::Input;
        controller.state.selected_message = None;
        return true;
    }
    controller.cancel_pending_reply()
}

fn handle_messages_key(controller: &mut AppController, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => controller.select_prev_message(),
        KeyCode::Down | KeyCode::Char('j') => controller.select_next_message(),
        KeyCode::Home | KeyCode::Char('g') => controller.select_first_message(),
        KeyCode::End | KeyCode::Char('G') => controller.select_last_message(),
        KeyCode::PageUp => scroll_page_up(controller),
        KeyCode::PageDown => scroll_page_down(controller),
        KeyCode::Enter | KeyCode::Char('p') => controller.open_pager_for_selected(),
        KeyCode::Char('y') => controller.copy_selected(),
        KeyCode::Char('r') => controller.run_selected_code(),
        KeyCode::Char('?') => controller.open_help(),
        _ => true,
    }
}

fn handle_input_key(controller: &mut AppController, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter if key.modifiers.contains(KeyModifiers::SHIFT) => {
            controller.state.input.newline();
            true
        }
        KeyCode::Enter => controller.submit_prompt(),
        KeyCode::Backspace => {
            controller.state.input.backspace();
            true
        }
        KeyCode::Delete => {
            controller.state.input.delete();
            true
        }
        KeyCode::Left => {
            controller.state.input.move_left();
            true
        }
        KeyCode::Right => {
            controller.state.input.move_right();
            true
        }
        KeyCode::Home => {
            controller.state.input.move_home();
            true
        }
        KeyCode::End => {
            controller.state.input.move_end();
            true
        }
        KeyCode::Up => {
            controller.state.scroll.scroll_up(1);
            true
        }
        KeyCode::Down => {
            controller.state.scroll.scroll_down(1);
            true
        }
        KeyCode::PageUp => scroll_page_up(controller),
        KeyCode::PageDown => scroll_page_down(controller),
        KeyCode::Char(ch) => {
            controller.state.input.insert_char(ch);
            true
        }
        _ => false,
    }
}

fn quit(controller: &mut AppController) -> bool {
    controller.state.should_quit = true;
    true
}

fn scroll_page_up(controller: &mut AppController) -> bool {
    controller.state.scroll.scroll_up(PAGE_SCROLL_LINES);
    true
}

fn scroll_page_down(controller: &mut AppController) -> bool {
    controller.state.scroll.scroll_down(PAGE_SCROLL_LINES);
    true
}
