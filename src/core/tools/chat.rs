//! # Chat Tools
//!
//! A single-prompt tool and a multi-turn tool per chat provider. The two
//! servers differ only in tool names; the request flow is the generic
//! [`ChatClient`] and the failure wording is [`describe_failure`].

use std::sync::Arc;

use rmcp::{
    ErrorData, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, ServerInfo},
    tool, tool_handler, tool_router,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::{server_info, tool_result};
use crate::Adapter;
use crate::inference::{
    Anthropic, ChatClient, ChatDialect, OpenAi, Overrides, ProviderError, Turn,
};

/// Missing credentials read as a plain error; everything else names the provider.
pub fn describe_failure<D: ChatDialect>(error: &ProviderError) -> String {
    match error {
        ProviderError::MissingCredential { .. } => format!("Error: {error}"),
        _ => format!("Error calling {}: {error}", D::DISPLAY_NAME),
    }
}

// ── Arguments ───────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, JsonSchema)]
pub struct PromptArgs {
    /// The text prompt to send
    pub prompt: String,
    /// The model to use (defaults to the configured model)
    #[serde(default)]
    pub model: Option<String>,
    /// Maximum tokens in the response
    #[serde(default)]
    pub max_tokens: Option<u32>,
    /// Response creativity (0.0-1.0)
    #[serde(default)]
    pub temperature: Option<f32>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ConversationArgs {
    /// Ordered conversation turns, each with a role and content
    pub messages: Vec<Turn>,
    /// The model to use (defaults to the configured model)
    #[serde(default)]
    pub model: Option<String>,
    /// Maximum tokens in the response
    #[serde(default)]
    pub max_tokens: Option<u32>,
    /// Response creativity (0.0-1.0)
    #[serde(default)]
    pub temperature: Option<f32>,
}

impl PromptArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

impl ConversationArgs {
    fn overrides(&self) -> Overrides {
        Overrides {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }
}

async fn prompt<D: ChatDialect>(client: &ChatClient<D>, args: PromptArgs) -> CallToolResult {
    let overrides = args.overrides();
    let outcome = client
        .complete(vec![Turn::user(args.prompt)], &overrides)
        .await;
    tool_result(D::DISPLAY_NAME, outcome, describe_failure::<D>)
}

async fn conversation<D: ChatDialect>(
    client: &ChatClient<D>,
    args: ConversationArgs,
) -> CallToolResult {
    let overrides = args.overrides();
    let outcome = client.complete(args.messages, &overrides).await;
    tool_result(D::DISPLAY_NAME, outcome, describe_failure::<D>)
}

// ── OpenAI ──────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct ChatGptServer {
    client: Arc<ChatClient<OpenAi>>,
    tool_router: ToolRouter<ChatGptServer>,
}

#[tool_router]
impl ChatGptServer {
    pub fn new(client: ChatClient<OpenAi>) -> Self {
        Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Send a prompt to ChatGPT and get a response")]
    async fn chatgpt(
        &self,
        Parameters(args): Parameters<PromptArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(prompt(&self.client, args).await)
    }

    #[tool(description = "Send a conversation to ChatGPT with multiple messages")]
    async fn chatgpt_conversation(
        &self,
        Parameters(args): Parameters<ConversationArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(conversation(&self.client, args).await)
    }
}

#[tool_handler]
impl ServerHandler for ChatGptServer {
    fn get_info(&self) -> ServerInfo {
        server_info(Adapter::Chatgpt, "OpenAI chat completions.")
    }
}

// ── Anthropic ───────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct ClaudeServer {
    client: Arc<ChatClient<Anthropic>>,
    tool_router: ToolRouter<ClaudeServer>,
}

#[tool_router]
impl ClaudeServer {
    pub fn new(client: ChatClient<Anthropic>) -> Self {
        Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Send a prompt to Claude and get a response")]
    async fn claude(
        &self,
        Parameters(args): Parameters<PromptArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(prompt(&self.client, args).await)
    }

    #[tool(
        description = "Send a conversation to Claude with multiple messages. System messages are dropped."
    )]
    async fn claude_conversation(
        &self,
        Parameters(args): Parameters<ConversationArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        Ok(conversation(&self.client, args).await)
    }
}

#[tool_handler]
impl ServerHandler for ClaudeServer {
    fn get_info(&self) -> ServerInfo {
        server_info(Adapter::Claude, "Anthropic messages.")
    }
}
