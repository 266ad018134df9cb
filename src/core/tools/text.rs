//! # Text Tools
//!
//! Local string transforms. None of these can fail.

use rmcp::{
    ErrorData, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerInfo},
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::{server_info, text_result};
use crate::Adapter;

#[derive(Debug, Deserialize, JsonSchema)]
pub struct TextArgs {
    /// Input text
    pub text: String,
}

/// Reverses by Unicode scalar value, not by byte.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

#[derive(Clone)]
pub struct EchoServer {
    tool_router: ToolRouter<EchoServer>,
}

#[tool_router]
impl EchoServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Echo back the input text")]
    async fn echo(
        &self,
        Parameters(TextArgs { text }): Parameters<TextArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(text_result(format!("Echo: {text}")))
    }

    #[tool(description = "Reverse the input text")]
    async fn reverse(
        &self,
        Parameters(TextArgs { text }): Parameters<TextArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(text_result(format!("Reversed: {}", reverse(&text))))
    }

    #[tool(description = "Convert text to uppercase")]
    async fn uppercase(
        &self,
        Parameters(TextArgs { text }): Parameters<TextArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(text_result(format!("Uppercase: {}", text.to_uppercase())))
    }

    #[tool(description = "Convert text to lowercase")]
    async fn lowercase(
        &self,
        Parameters(TextArgs { text }): Parameters<TextArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(text_result(format!("Lowercase: {}", text.to_lowercase())))
    }
}

impl Default for EchoServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_handler]
impl ServerHandler for EchoServer {
    fn get_info(&self) -> ServerInfo {
        server_info(
            Adapter::Echo,
            "Local text transforms: echo, reverse, uppercase, lowercase.",
        )
    }
}
