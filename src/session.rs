use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::engine::Engine;

/// Longest derived conversation title, in characters.
pub const TITLE_MAX_CHARS: usize = 32;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct MessageId(Uuid);

impl MessageId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::new()
    }
}

/// Who authored a message.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum Role {
    User,
    Assistant,
    System,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub role: Role,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn new(role: Role, text: impl Into<String>) -> Self {
        Self {
            id: MessageId::new(),
            role,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// A single chat thread with its own engine state.
#[derive(Debug)]
pub struct Conversation {
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    messages: Vec<Message>,
    engine: Engine,
}

impl Conversation {
    pub fn new(engine: Engine) -> Self {
        let now = Utc::now();
        Self {
            created_at: now,
            updated_at: now,
            messages: Vec::new(),
            engine,
        }
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
        self.updated_at = Utc::now();
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    /// Title derived from the first message, or `None` while the
    /// conversation is empty.
    pub fn title(&self) -> Option<String> {
        let first = self.messages.first()?;
        let trimmed = first.text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(truncate_title(trimmed))
    }
}

fn truncate_title(text: &str) -> String {
    let mut chars = text.chars();
    let mut title = chars.by_ref().take(TITLE_MAX_CHARS).collect::<String>();
    if chars.next().is_some() {
        title.push('…');
    }
    title
}

/// All conversations in one program run.
///
/// Never empty: a session starts with one conversation and conversations are
/// never removed, so `current` always points at a live entry.
#[derive(Debug)]
pub struct Session {
    conversations: Vec<Conversation>,
    current: usize,
}

impl Session {
    pub fn new(engine: Engine) -> Self {
        Self {
            conversations: vec![Conversation::new(engine)],
            current: 0,
        }
    }

    /// Opens a fresh conversation and makes it active.
    pub fn new_chat(&mut self, engine: Engine) -> usize {
        self.conversations.push(Conversation::new(engine));
        self.current = self.conversations.len() - 1;
        self.current
    }

    /// Switches the active conversation. Out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.conversations.len() {
            return false;
        }
        self.current = index;
        true
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    pub fn active(&self) -> &Conversation {
        &self.conversations[self.current]
    }

    pub fn active_mut(&mut self) -> &mut Conversation {
        &mut self.conversations[self.current]
    }

    pub fn get(&self, index: usize) -> Option<&Conversation> {
        self.conversations.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut Conversation> {
        self.conversations.get_mut(index)
    }

    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    /// Appends to the active conversation.
    pub fn append(&mut self, role: Role, text: impl Into<String>) {
        self.active_mut().push(Message::new(role, text));
    }

    /// Appends to the conversation at `index`, which may not be the active
    /// one. Returns false when no such conversation exists.
    pub fn append_to(&mut self, index: usize, role: Role, text: impl Into<String>) -> bool {
        match self.conversations.get_mut(index) {
            Some(conversation) => {
                conversation.push(Message::new(role, text));
                true
            }
            None => false,
        }
    }
}
