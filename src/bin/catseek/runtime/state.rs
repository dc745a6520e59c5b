use std::time::{Duration, Instant};

use catseek::{Engine, EnginePreset, Session};

use crate::config::AppConfig;
use crate::input::InputBuffer;
use crate::runtime::animation::AnimationState;
use crate::runtime::events::SandboxHealth;
use crate::runtime::overlay::OverlayState;
use crate::runtime::status::AppStatus;
use crate::terminal::TerminalProfile;

const NOTICE_TTL: Duration = Duration::from_secs(4);

/// Which pane key input goes to.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Focus {
    Input,
    Messages,
}

/// A short-lived hint shown in the status line.
#[derive(Debug)]
pub struct Notice {
    pub text: String,
    expires_at: Instant,
}

impl Notice {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            expires_at: Instant::now() + NOTICE_TTL,
        }
    }

    pub fn expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Distance from the bottom of the transcript, in wrapped lines.
/// Zero means pinned to the newest message. The renderer clamps the
/// offset against the actual transcript height, so overshoot here is
/// harmless.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScrollState {
    offset: u16,
}

impl ScrollState {
    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.offset = self.offset.saturating_sub(lines);
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

/// Everything the renderer and controller share.
pub struct AppState {
    pub config: AppConfig,
    pub session: Session,
    pub input: InputBuffer,
    pub status: AppStatus,
    pub sandbox: SandboxHealth,
    pub overlay: OverlayState,
    pub scroll: ScrollState,
    pub selected_message: Option<usize>,
    pub focus: Focus,
    pub notice: Option<Notice>,
    pub terminal_size: (u16, u16),
    pub profile: TerminalProfile,
    pub animation: AnimationState,
    pub run_in_flight: bool,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(config: AppConfig, profile: TerminalProfile, terminal_size: (u16, u16)) -> Self {
        let engine = build_engine(&config, config.engine.preset);
        Self {
            config,
            session: Session::new(engine),
            input: InputBuffer::new(),
            status: AppStatus::Booting,
            sandbox: SandboxHealth::Unknown,
            overlay: OverlayState::None,
            scroll: ScrollState::default(),
            selected_message: None,
            focus: Focus::Input,
            notice: None,
            terminal_size: (terminal_size.0.max(1), terminal_size.1.max(1)),
            profile,
            animation: AnimationState::new(profile.animate),
            run_in_flight: false,
            should_quit: false,
        }
    }

    /// Builds an engine for a new or switched conversation, keeping the
    /// configured seed so scripted sessions stay reproducible.
    pub fn build_engine(&self, preset: EnginePreset) -> Engine {
        build_engine(&self.config, preset)
    }

    pub fn drop_expired_notice(&mut self, now: Instant) -> bool {
        match &self.notice {
            Some(notice) if notice.expired(now) => {
                self.notice = None;
                true
            }
            _ => false,
        }
    }
}

fn build_engine(config: &AppConfig, preset: EnginePreset) -> Engine {
    match config.engine.seed {
        Some(seed) => Engine::with_seed(preset, seed),
        None => Engine::new(preset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_saturates_instead_of_wrapping() {
        let mut scroll = ScrollState::default();
        scroll.scroll_down(5);
        assert_eq!(scroll.offset(), 0);
        scroll.scroll_up(u16::MAX);
        scroll.scroll_up(10);
        assert_eq!(scroll.offset(), u16::MAX);
    }

    #[test]
    fn reset_pins_to_the_bottom() {
        let mut scroll = ScrollState::default();
        scroll.scroll_up(3);
        scroll.reset();
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn notices_expire_after_their_ttl() {
        let notice = Notice::new("copied");
        assert!(!notice.expired(Instant::now()));
        assert!(notice.expired(Instant::now() + NOTICE_TTL + Duration::from_millis(1)));
    }

    #[test]
    fn seeded_config_builds_deterministic_engines() {
        let mut config = AppConfig::default();
        config.engine.seed = Some(7);
        let profile = TerminalProfile {
            color_level: crate::terminal::ColorLevel::None,
            animate: false,
        };
        let state = AppState::new(config, profile, (80, 24));
        let mut a = state.build_engine(EnginePreset::Catgpt);
        let mut b = state.build_engine(EnginePreset::Catgpt);
        assert_eq!(a.generate("tell me a joke"), b.generate("tell me a joke"));
    }
}
