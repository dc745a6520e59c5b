use std::time::Duration;

use catseek::{extract_code_blocks, EnginePreset, Role};

use crate::runtime::events::SandboxHealth;
use crate::runtime::overlay::{OverlayState, PagerState, PickerItem, PickerState};
use crate::runtime::state::Focus;
use crate::runtime::tasks;

use super::AppController;

impl AppController {
    /// Sends the prompt in the input buffer, if the rules allow it.
    ///
    /// Whitespace-only text is ignored without clearing the buffer, and
    /// a conversation only ever has one reply pending; a second send
    /// gets a hint instead.
    pub fn submit_prompt(&mut self) -> bool {
        if self.state.status.input_blocked() {
            return false;
        }
        if self.state.input.text().trim().is_empty() {
            return false;
        }
        let current = self.state.session.current_index();
        if self.scheduler.is_pending(current) {
            self.push_notice("Still thinking about the last one...");
            return true;
        }
        let raw = self.state.input.take_text();
        let prompt = raw.trim();
        self.state.session.append(Role::User, prompt);
        let reply = self.state.session.active_mut().engine_mut().generate(prompt);
        let delay = Duration::from_millis(self.state.config.engine.reply_delay_ms);
        self.scheduler.schedule(current, reply, delay);
        self.state.scroll.reset();
        self.refresh_status();
        true
    }

    pub fn cancel_pending_reply(&mut self) -> bool {
        let current = self.state.session.current_index();
        if !self.scheduler.is_pending(current) {
            return false;
        }
        self.scheduler.cancel(current);
        self.push_notice("Reply cancelled");
        self.refresh_status();
        true
    }

    pub fn start_new_chat(&mut self) -> bool {
        let preset = self.state.session.active().engine().preset();
        self.open_chat_with(preset)
    }

    /// Opens a fresh conversation driven by the chosen preset. Existing
    /// conversations keep the engine they were born with.
    pub fn switch_engine(&mut self, preset: EnginePreset) -> bool {
        self.open_chat_with(preset)
    }

    fn open_chat_with(&mut self, preset: EnginePreset) -> bool {
        let engine = self.state.build_engine(preset);
        self.state.session.new_chat(engine);
        if let Some(greeting) = self.state.session.active().engine().opening(false) {
            self.state.session.append(Role::Assistant, greeting);
        }
        self.state.scroll.reset();
        self.state.selected_message = None;
        self.refresh_status();
        true
    }

    pub fn switch_chat(&mut self, index: usize) -> bool {
        if !self.state.session.select(index) {
            return false;
        }
        self.state.scroll.reset();
        self.state.selected_message = None;
        self.refresh_status();
        true
    }

    pub fn switch_prev_chat(&mut self) -> bool {
        let current = self.state.session.current_index();
        if current == 0 {
            return false;
        }
        self.switch_chat(current - 1)
    }

    pub fn switch_next_chat(&mut self) -> bool {
        self.switch_chat(self.state.session.current_index() + 1)
    }

    pub fn open_engine_picker(&mut self) -> bool {
        let items = EnginePreset::ALL
            .iter()
            .map(|preset| PickerItem::new(preset.name(), preset.name(), preset.describe()))
            .collect();
        self.state.overlay = OverlayState::EnginePicker(PickerState::new("Engines", items));
        true
    }

    pub fn open_chat_picker(&mut self) -> bool {
        let items = self
            .state
            .session
            .conversations()
            .iter()
            .enumerate()
            .map(|(index, conversation)| {
                let label = conversation
                    .title()
                    .unwrap_or_else(|| format!("Chat {}", index + 1));
                let description = format!(
                    "{} · {} messages",
                    conversation.engine().preset().name(),
                    conversation.messages().len()
                );
                PickerItem::new(index.to_string(), label, description)
            })
            .collect();
        self.state.overlay = OverlayState::ChatPicker(PickerState::new("Chats", items));
        true
    }

    pub fn open_help(&mut self) -> bool {
        self.state.overlay = OverlayState::Help;
        true
    }

    pub fn toggle_focus(&mut self) -> bool {
        match self.state.focus {
            Focus::Input => {
                self.state.focus = Focus::Messages;
                if self.state.selected_message.is_none() {
                    self.select_last_message();
                }
            }
            Focus::Messages => {
                self.state.focus = Focus::Input;
                self.state.selected_message = None;
            }
        }
        true
    }

    pub fn select_prev_message(&mut self) -> bool {
        let len = self.state.session.active().messages().len();
        if len == 0 {
            return false;
        }
        self.state.selected_message = Some(match self.state.selected_message {
            None => len - 1,
            Some(index) => index.saturating_sub(1),
        });
        true
    }

    pub fn select_next_message(&mut self) -> bool {
        let len = self.state.session.active().messages().len();
        if len == 0 {
            return false;
        }
        self.state.selected_message = Some(match self.state.selected_message {
            None => len - 1,
            Some(index) => (index + 1).min(len - 1),
        });
        true
    }

    pub fn select_first_message(&mut self) -> bool {
        if self.state.session.active().messages().is_empty() {
            return false;
        }
        self.state.selected_message = Some(0);
        self.state.scroll.scroll_up(u16::MAX);
        true
    }

    pub fn select_last_message(&mut self) -> bool {
        let len = self.state.session.active().messages().len();
        if len == 0 {
            return false;
        }
        self.state.selected_message = Some(len - 1);
        self.state.scroll.reset();
        true
    }

    pub fn open_pager_for_selected(&mut self) -> bool {
        let Some(text) = self.selected_text() else {
            return false;
        };
        self.state.overlay = OverlayState::Pager(PagerState::from_text("Message", &text));
        true
    }

    pub fn copy_selected(&mut self) -> bool {
        let Some(text) = self.selected_text() else {
            return false;
        };
        if let Ok(mut clipboard) = arboard::Clipboard::new() {
            let _ = clipboard.set_text(text);
            self.push_notice("Copied message");
        } else {
            self.push_notice("Clipboard unavailable");
        }
        true
    }

    /// Runs the first fenced block of the selected message.
    pub fn run_selected_code(&mut self) -> bool {
        let code = self
            .state
            .selected_message
            .and_then(|index| self.state.session.active().messages().get(index))
            .map(|message| first_code_block(&message.text));
        match code {
            None => false,
            Some(None) => {
                self.push_notice("No code block in this message");
                true
            }
            Some(Some(code)) => self.run_code(code),
        }
    }

    /// Runs the first fenced block of the newest reply that has one.
    pub fn run_latest_code(&mut self) -> bool {
        let code = self
            .state
            .session
            .active()
            .messages()
            .iter()
            .rev()
            .filter(|message| message.role == Role::Assistant)
            .find_map(|message| first_code_block(&message.text));
        match code {
            Some(code) => self.run_code(code),
            None => {
                self.push_notice("No code block to run");
                true
            }
        }
    }

    fn run_code(&mut self, code: String) -> bool {
        if self.state.run_in_flight {
            self.push_notice("A run is already in progress");
            return true;
        }
        match &self.state.sandbox {
            SandboxHealth::Ready(_) => {}
            SandboxHealth::Disabled => {
                self.push_notice("Code runs are disabled");
                return true;
            }
            SandboxHealth::Unavailable(_) => {
                self.push_notice("Code runner unavailable");
                return true;
            }
            SandboxHealth::Unknown => {
                self.push_notice("Still starting up...");
                return true;
            }
        }
        let Some(runner) = self.state.config.sandbox.build_runner() else {
            return true;
        };
        self.state.run_in_flight = true;
        tasks::spawn_run(self.event_sender.clone(), runner, code);
        self.refresh_status();
        log::debug!("sandbox run started");
        true
    }

    fn selected_text(&self) -> Option<String> {
        let index = self.state.selected_message?;
        self.state
            .session
            .active()
            .messages()
            .get(index)
            .map(|message| message.text.clone())
    }
}

fn first_code_block(text: &str) -> Option<String> {
    extract_code_blocks(text)
        .into_iter()
        .next()
        .map(|block| block.code)
}
