//! Markdown rendering for the transcript. Replies are plain prose most of
//! the time, but engine output and pasted text may carry fenced code blocks,
//! emphasis, or lists, and those should read properly in the bubble.

mod render;
mod styles;
mod syntax;

pub use render::render_markdown;
pub use styles::MarkdownStyles;
