mod app;
mod input;
mod markdown;
mod messages;
mod overlay;
mod sidebar;
mod status;
mod theme;

pub use app::render_app;
pub use messages::MessageRenderer;
