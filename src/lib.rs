//! catseek: a local cat-themed chat assistant.
//!
//! The library half holds everything the terminal client builds on:
//!
//! - [`engine`]: keyword-dispatch reply engines with seedable randomness
//! - [`session`]: in-memory conversations and active-selection rules
//! - [`markdown`]: fenced code block extraction from reply text
//! - [`sandbox`]: child-process execution for extracted blocks
//!
//! Nothing here touches a terminal. The `catseek` binary (behind the `cli`
//! feature) owns all presentation.

pub mod engine;
pub mod error;
pub mod markdown;
pub mod sandbox;
pub mod session;

pub use engine::{Engine, EnginePreset, Exchange};
pub use error::CatseekError;
pub use markdown::{extract_code_blocks, CodeBlock};
pub use sandbox::SandboxRunner;
pub use session::{Conversation, Message, MessageId, Role, Session};
