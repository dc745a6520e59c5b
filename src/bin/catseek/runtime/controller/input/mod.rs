mod main_keys;
mod overlay_keys;

use crossterm::event::KeyEventKind;

use crate::runtime::events::InputEvent;
use crate::runtime::state::Focus;

use super::AppController;

pub fn handle_input(controller: &mut AppController, event: InputEvent) -> bool {
    match event {
        InputEvent::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return false;
            }
            main_keys::dispatch_key(controller, key)
        }
        InputEvent::Paste(text) => handle_paste(controller, text),
        InputEvent::Resize(width, height) => {
            controller.state.terminal_size = (width.max(1), height.max(1));
            true
        }
    }
}

fn handle_paste(controller: &mut AppController, text: String) -> bool {
    if controller.state.overlay.is_open()
        || controller.state.focus != Focus::Input
        || controller.state.status.input_blocked()
    {
        return false;
    }
    // Terminal paste can carry CRLF line endings.
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    controller.state.input.insert_str(&text);
    true
}
