mod animation;
pub mod controller;
mod events;
mod overlay;
mod runner;
mod state;
mod status;
mod tasks;
mod terminal;

pub use events::{AppEvent, SandboxHealth};
pub use overlay::{OverlayState, PagerState, PickerItem, PickerState};
pub use runner::run_app;
pub use state::{AppState, Focus, ScrollState};
pub use status::AppStatus;
pub use tasks::spawn_boot;
pub use terminal::{init_terminal, restore_terminal, Tui};
