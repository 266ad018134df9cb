//! # stdio Server
//!
//! Builds the adapter's MCP server from the startup config and serves it on
//! the process's stdin/stdout until the client disconnects. Framing, the
//! handshake and method dispatch are `rmcp`'s.
//!
//! ```text
//! stdin ──▶ rmcp (JSON-RPC) ──tools/call──▶ #[tool] method ──▶ tool_result()
//! stdout ◀──────────────── CallToolResult ◀─────────────────────────┘
//! ```

use log::info;
use rmcp::{ServerHandler, ServiceExt, transport::stdio};
use thiserror::Error;

use crate::Adapter;
use crate::api::NewsClient;
use crate::core::config::ResolvedConfig;
use crate::core::tools::{ChatGptServer, ClaudeServer, EchoServer, NewsServer};
use crate::inference::{Anthropic, ChatClient, OpenAi};

#[derive(Debug, Error)]
pub enum ServerError {
    /// The client never completed the `initialize` handshake.
    #[error("MCP handshake failed: {0}")]
    Handshake(String),
    /// The service task ended abnormally.
    #[error("MCP service stopped: {0}")]
    Service(String),
}

/// Serves `adapter` on stdin/stdout.
pub async fn run_stdio(adapter: Adapter, config: &ResolvedConfig) -> Result<(), ServerError> {
    match adapter {
        Adapter::Echo => serve(adapter, EchoServer::new()).await,
        Adapter::Chatgpt => {
            let client = ChatClient::new(OpenAi, config.openai.clone());
            serve(adapter, ChatGptServer::new(client)).await
        }
        Adapter::Claude => {
            let client = ChatClient::new(Anthropic, config.anthropic.clone());
            serve(adapter, ClaudeServer::new(client)).await
        }
        Adapter::News => {
            let client = NewsClient::new(config.news.clone());
            serve(adapter, NewsServer::new(client)).await
        }
    }
}

async fn serve<S: ServerHandler>(adapter: Adapter, server: S) -> Result<(), ServerError> {
    info!(
        "{} v{} starting on stdio",
        adapter.server_name(),
        env!("CARGO_PKG_VERSION")
    );

    let running = server
        .serve(stdio())
        .await
        .map_err(|e| ServerError::Handshake(e.to_string()))?;
    let reason = running
        .waiting()
        .await
        .map_err(|e| ServerError::Service(e.to_string()))?;

    info!("{} shutting down: {:?}", adapter.server_name(), reason);
    Ok(())
}
