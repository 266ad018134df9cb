//! Stdio tool adapters for text-generation and headline APIs.
//!
//! Each adapter is a small MCP server (built on `rmcp`) exposing a few tools
//! over stdio. One process serves one adapter.

use clap::ValueEnum;

pub mod api;
pub mod core;
pub mod inference;
pub mod server;

#[cfg(test)]
pub mod test_support;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Adapter {
    /// Local text transforms: echo, reverse, uppercase, lowercase
    Echo,
    /// OpenAI chat completions: chatgpt, chatgpt_conversation
    Chatgpt,
    /// Anthropic messages: claude, claude_conversation
    Claude,
    /// NewsAPI top headlines: get_news
    News,
}

impl Adapter {
    /// Name reported to the client during `initialize`.
    pub fn server_name(self) -> &'static str {
        match self {
            Adapter::Echo => "echo_server",
            Adapter::Chatgpt => "chatgpt_server",
            Adapter::Claude => "claude_server",
            Adapter::News => "news_server",
        }
    }
}
