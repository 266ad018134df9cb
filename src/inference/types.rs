use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Speaker of a conversation turn.
#[derive(Serialize, Deserialize, JsonSchema, Debug, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One message in a multi-turn exchange.
#[derive(Serialize, Deserialize, JsonSchema, Debug, Clone, PartialEq)]
pub struct Turn {
    /// Who said it: "system", "user" or "assistant"
    pub role: Role,
    /// Message text
    pub content: String,
}

impl Turn {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Per-call overrides for the configured generation defaults.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Overrides {
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

/// Connection and generation defaults for one chat provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSettings {
    /// `None` means the provider is unconfigured; calls short-circuit.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

/// Concrete parameters for a single completion call.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionParams {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: f32,
}

impl CompletionParams {
    /// Collapses per-call overrides onto the provider defaults.
    pub fn resolve(settings: &ProviderSettings, overrides: &Overrides) -> Self {
        Self {
            model: overrides
                .model
                .clone()
                .unwrap_or_else(|| settings.model.clone()),
            max_tokens: overrides.max_tokens.unwrap_or(settings.max_tokens),
            temperature: overrides.temperature.unwrap_or(settings.temperature),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> ProviderSettings {
        ProviderSettings {
            api_key: Some("key".to_string()),
            base_url: "http://localhost".to_string(),
            model: "default-model".to_string(),
            max_tokens: 1000,
            temperature: 0.7,
        }
    }

    #[test]
    fn test_resolve_without_overrides_uses_settings() {
        let params = CompletionParams::resolve(&settings(), &Overrides::default());
        assert_eq!(params.model, "default-model");
        assert_eq!(params.max_tokens, 1000);
        assert_eq!(params.temperature, 0.7);
    }

    #[test]
    fn test_resolve_overrides_win() {
        let overrides = Overrides {
            model: Some("other".to_string()),
            max_tokens: Some(50),
            temperature: Some(0.0),
        };
        let params = CompletionParams::resolve(&settings(), &overrides);
        assert_eq!(params.model, "other");
        assert_eq!(params.max_tokens, 50);
        // Zero is a real temperature, not "unset".
        assert_eq!(params.temperature, 0.0);
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::System).unwrap(), "\"system\"");
        assert_eq!(serde_json::to_string(&Role::User).unwrap(), "\"user\"");
        assert_eq!(
            serde_json::to_string(&Role::Assistant).unwrap(),
            "\"assistant\""
        );
    }

    #[test]
    fn test_turn_rejects_unknown_role() {
        let result = serde_json::from_str::<Turn>(r#"{"role":"tool","content":"x"}"#);
        assert!(result.is_err());
    }
}
