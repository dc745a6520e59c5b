use catseek::Role;
use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::runtime::controller::AppController;
use crate::runtime::{init_terminal, restore_terminal, run_app, spawn_boot, AppState, Tui};
use crate::terminal::TerminalProfile;

pub(super) async fn run_tui(config: AppConfig) -> anyhow::Result<()> {
    let profile = TerminalProfile::detect();
    let mut terminal = init_terminal()?;
    let result = run_inner(config, profile, &mut terminal).await;
    restore_terminal()?;
    result
}

async fn run_inner(
    config: AppConfig,
    profile: TerminalProfile,
    terminal: &mut Tui,
) -> anyhow::Result<()> {
    let size = terminal.size()?;
    let mut state = AppState::new(config, profile, (size.width, size.height));
    greet(&mut state);
    let (tx, rx) = mpsc::channel(128);
    spawn_boot(tx.clone(), state.config.sandbox.build_runner());
    let controller = AppController::new(state, tx.clone());
    run_app(controller, terminal, rx, tx).await
}

/// The first chat opens with the engine's hello so the window is never
/// empty. Later chats greet from the controller instead.
fn greet(state: &mut AppState) {
    if let Some(opening) = state.session.active().engine().opening(true) {
        state.session.append(Role::Assistant, opening);
    }
}
