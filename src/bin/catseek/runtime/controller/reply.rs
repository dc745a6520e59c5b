use catseek::Role;

use crate::runtime::events::{ReplyEvent, RunEvent};
use crate::runtime::overlay::{OverlayState, PagerState};

use super::AppController;

/// Lands a finished reply in the conversation that asked for it, which
/// is not necessarily the one on screen.
pub fn handle_reply(controller: &mut AppController, event: ReplyEvent) -> bool {
    controller.scheduler.finish(event.conversation);
    let delivered =
        controller
            .state
            .session
            .append_to(event.conversation, Role::Assistant, event.text);
    if !delivered {
        log::warn!("dropped reply for unknown conversation {}", event.conversation);
    }
    if delivered && event.conversation == controller.state.session.current_index() {
        controller.state.scroll.reset();
    }
    controller.refresh_status();
    true
}

pub fn handle_run(controller: &mut AppController, event: RunEvent) -> bool {
    controller.state.run_in_flight = false;
    controller.state.overlay = OverlayState::Pager(PagerState::from_text("Run output", &event.output));
    controller.refresh_status();
    true
}
