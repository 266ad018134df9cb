//! OpenAI chat-completions dialect.
//!
//! `POST {base}/chat/completions` with a bearer token. Turns are forwarded
//! verbatim; the reply text is `choices[0].message.content`.

use serde::{Deserialize, Serialize};

use crate::inference::{ChatDialect, CompletionParams, ProviderError, Turn};

pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";

// ============================================================================
// Chat Completions API Types
// ============================================================================

#[derive(Serialize, Debug)]
pub struct ChatCompletionRequest {
    model: String,
    messages: Vec<Turn>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize, Debug)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize, Debug)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

// ============================================================================
// Dialect
// ============================================================================

#[derive(Debug, Default, Clone, Copy)]
pub struct OpenAi;

impl ChatDialect for OpenAi {
    type Request = ChatCompletionRequest;
    type Response = ChatCompletionResponse;

    const DISPLAY_NAME: &'static str = "ChatGPT";
    const VENDOR: &'static str = "OpenAI";
    const API_KEY_VAR: &'static str = "OPENAI_API_KEY";

    fn endpoint(&self, base_url: &str) -> String {
        format!("{base_url}/chat/completions")
    }

    fn authorize(
        &self,
        builder: reqwest::RequestBuilder,
        api_key: &str,
    ) -> reqwest::RequestBuilder {
        builder.header("Authorization", format!("Bearer {api_key}"))
    }

    fn build_request(&self, params: CompletionParams, turns: Vec<Turn>) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: params.model,
            messages: turns,
            max_tokens: params.max_tokens,
            temperature: params.temperature,
        }
    }

    fn extract_text(&self, response: ChatCompletionResponse) -> Result<String, ProviderError> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(ProviderError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::Role;

    fn params() -> CompletionParams {
        CompletionParams {
            model: "gpt-test".to_string(),
            max_tokens: 42,
            temperature: 0.5,
        }
    }

    #[test]
    fn test_request_keeps_every_turn_in_order() {
        let turns = vec![
            Turn {
                role: Role::System,
                content: "be brief".to_string(),
            },
            Turn::user("hi"),
        ];
        let request = OpenAi.build_request(params(), turns);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["model"], "gpt-test");
        assert_eq!(json["max_tokens"], 42);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "hi");
    }

    #[test]
    fn test_extract_first_choice() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"first"}},{"message":{"content":"second"}}]}"#,
        )
        .unwrap();
        assert_eq!(OpenAi.extract_text(response).unwrap(), "first");
    }

    #[test]
    fn test_extract_without_choices_is_empty_response() {
        let response: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert_eq!(
            OpenAi.extract_text(response),
            Err(ProviderError::EmptyResponse)
        );
    }

    #[test]
    fn test_endpoint() {
        assert_eq!(
            OpenAi.endpoint(DEFAULT_OPENAI_BASE_URL),
            "https://api.openai.com/v1/chat/completions"
        );
    }
}
