use catseek::Role;

use crate::runtime::events::{BootEvent, SandboxHealth};
use crate::runtime::status::AppStatus;

use super::AppController;

pub fn handle_boot(controller: &mut AppController, event: BootEvent) -> bool {
    match event {
        BootEvent::Notice(text) => {
            controller.push_notice(text);
            true
        }
        BootEvent::Ready { sandbox } => {
            if let SandboxHealth::Unavailable(reason) = &sandbox {
                log::warn!("code runner probe failed: {reason}");
                controller.state.session.append(
                    Role::System,
                    format!("Code runner unavailable: {reason}. Run actions are off."),
                );
                controller.state.scroll.reset();
            }
            controller.state.sandbox = sandbox;
            controller.state.status = AppStatus::Idle;
            log::info!("boot complete");
            true
        }
        BootEvent::Failed(reason) => {
            log::error!("boot failed: {reason}");
            controller.state.session.append(
                Role::System,
                format!("Startup failed: {reason}. Input stays disabled."),
            );
            controller.state.status = AppStatus::Disabled(reason);
            controller.state.scroll.reset();
            true
        }
    }
}
