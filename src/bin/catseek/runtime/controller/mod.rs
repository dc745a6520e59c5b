mod actions;
mod boot;
mod input;
mod notice;
mod reply;

use std::time::Instant;

use tokio::sync::mpsc;

use crate::runtime::events::AppEvent;
use crate::runtime::state::AppState;
use crate::runtime::status::AppStatus;
use crate::runtime::tasks::ReplyScheduler;

pub struct AppController {
    pub state: AppState,
    pub scheduler: ReplyScheduler,
    pub event_sender: mpsc::Sender<AppEvent>,
}

impl AppController {
    pub fn new(state: AppState, event_sender: mpsc::Sender<AppEvent>) -> Self {
        Self {
            state,
            scheduler: ReplyScheduler::new(event_sender.clone()),
            event_sender,
        }
    }

    /// Applies one event to the state. Returns whether the screen
    /// changed and needs a redraw.
    pub fn handle_event(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::Input(input) => input::handle_input(self, input),
            AppEvent::Tick => handle_tick(self),
            AppEvent::Boot(event) => boot::handle_boot(self, event),
            AppEvent::Reply(event) => reply::handle_reply(self, event),
            AppEvent::Run(event) => reply::handle_run(self, event),
        }
    }

    pub fn cancel_all_tasks(&mut self) {
        self.scheduler.cancel_all();
    }

    /// Recomputes the transient status from what is actually in flight.
    /// Booting and Disabled are sticky; events never downgrade them.
    pub fn refresh_status(&mut self) {
        if self.state.status.input_blocked() {
            return;
        }
        self.state.status = if self.state.run_in_flight {
            AppStatus::Running
        } else if self.scheduler.is_pending(self.state.session.current_index()) {
            AppStatus::Thinking
        } else {
            AppStatus::Idle
        };
    }
}

fn handle_tick(controller: &mut AppController) -> bool {
    let mut dirty = controller.state.drop_expired_notice(Instant::now());
    let waiting = controller.state.status.is_busy()
        || matches!(controller.state.status, AppStatus::Booting);
    if waiting && controller.state.animation.is_enabled() {
        controller.state.animation.tick();
        dirty = true;
    }
    dirty
}
