//! Anthropic messages dialect.
//!
//! The messages endpoint does not accept `system` turns inline with the
//! conversation, so they are dropped before the request is built. The reply
//! text is the first content block.

use serde::{Deserialize, Serialize};

use crate::inference::{ChatDialect, CompletionParams, ProviderError, Role, Turn};

pub const DEFAULT_ANTHROPIC_BASE_URL: &str = "https://api.anthropic.com/v1";
pub const DEFAULT_ANTHROPIC_MODEL: &str = "claude-3-5-sonnet-20241022";
pub const ANTHROPIC_VERSION: &str = "2023-06-01";

// ============================================================================
// Messages API Types
// ============================================================================

#[derive(Serialize, Debug)]
pub struct MessagesRequest {
    model: String,
    max_tokens: u32,
    temperature: f32,
    messages: Vec<Turn>,
}

#[derive(Deserialize, Debug)]
pub struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

/// Non-text blocks (e.g. `tool_use`) decode with `text: None`.
#[derive(Deserialize, Debug)]
struct ContentBlock {
    #[serde(default)]
    text: Option<String>,
}

// ============================================================================
// Translation Layer
// ============================================================================

/// Drops system turns; everything else keeps its order.
fn conversation_turns(turns: Vec<Turn>) -> Vec<Turn> {
    turns
        .into_iter()
        .filter(|turn| turn.role != Role::System)
        .collect()
}

// ============================================================================
// Dialect
// ============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct Anthropic;

impl ChatDialect for Anthropic {
    type Request = MessagesRequest;
    type Response = MessagesResponse;

    const DISPLAY_NAME: &'static str = "Claude";
    const VENDOR: &'static str = "Anthropic";
    const API_KEY_VAR: &'static str = "ANTHROPIC_API_KEY";

    fn endpoint(&self, base_url: &str) -> String {
        format!("{base_url}/messages")
    }

    fn authorize(
        &self,
        builder: reqwest::RequestBuilder,
        api_key: &str,
    ) -> reqwest::RequestBuilder {
        builder
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
    }

    fn build_request(&self, params: CompletionParams, turns: Vec<Turn>) -> MessagesRequest {
        MessagesRequest {
            model: params.model,
            max_tokens: params.max_tokens,
            temperature: params.temperature,
            messages: conversation_turns(turns),
        }
    }

    fn extract_text(&self, response: MessagesResponse) -> Result<String, ProviderError> {
        response
            .content
            .into_iter()
            .next()
            .and_then(|block| block.text)
            .ok_or(ProviderError::EmptyResponse)
    }
}
