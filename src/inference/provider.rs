use log::{debug, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use super::types::{CompletionParams, Overrides, ProviderSettings, Turn};

/// Errors that can occur while talking to a remote provider.
/// Tools flatten these into text at the protocol edge; callers inside the
/// crate match on the variant.
#[derive(Debug, Error, PartialEq)]
pub enum ProviderError {
    /// No credential configured. Detected before any network traffic.
    #[error("{provider} API key not configured. Please set {env_var} in your .env file.")]
    MissingCredential {
        provider: &'static str,
        env_var: &'static str,
    },
    /// Network-level failure (timeout, DNS, connection refused).
    #[error("network error: {0}")]
    Network(String),
    /// API returned a non-success HTTP status.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },
    /// Failed to parse the provider's response.
    #[error("parse error: {0}")]
    Parse(String),
    /// Response decoded fine but carried no text to return.
    #[error("provider returned no completion text")]
    EmptyResponse,
    /// Provider answered with its own error payload.
    #[error("{0}")]
    Upstream(String),
}

/// Provider-specific wire shape for a chat completion call.
///
/// Everything that is the same across providers (credential check, default
/// resolution, HTTP status handling, decoding) lives in [`ChatClient`]; a
/// dialect only says where to send, how to authenticate, and how to build
/// and unwrap the payloads.
pub trait ChatDialect: Send + Sync {
    type Request: Serialize + Send;
    type Response: DeserializeOwned + Send;

    /// Label used in error text, e.g. "ChatGPT".
    const DISPLAY_NAME: &'static str;
    /// Vendor name used in the missing-credential message, e.g. "OpenAI".
    const VENDOR: &'static str;
    /// Environment variable holding the credential.
    const API_KEY_VAR: &'static str;

    fn endpoint(&self, base_url: &str) -> String;

    fn authorize(&self, builder: reqwest::RequestBuilder, api_key: &str)
    -> reqwest::RequestBuilder;

    fn build_request(&self, params: CompletionParams, turns: Vec<Turn>) -> Self::Request;

    fn extract_text(&self, response: Self::Response) -> Result<String, ProviderError>;
}

/// A chat client for one provider: one HTTP client, one settings snapshot.
pub struct ChatClient<D: ChatDialect> {
    dialect: D,
    settings: ProviderSettings,
    client: reqwest::Client,
}

impl<D: ChatDialect> ChatClient<D> {
    pub fn new(dialect: D, settings: ProviderSettings) -> Self {
        Self {
            dialect,
            settings,
            client: reqwest::Client::new(),
        }
    }

    /// Runs one completion and returns the provider's reply text.
    ///
    /// Returns [`ProviderError::MissingCredential`] without touching the
    /// network when no API key is configured.
    pub async fn complete(
        &self,
        turns: Vec<Turn>,
        overrides: &Overrides,
    ) -> Result<String, ProviderError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential {
                provider: D::VENDOR,
                env_var: D::API_KEY_VAR,
            })?;

        let params = CompletionParams::resolve(&self.settings, overrides);
        info!(
            "{} request: model={}, turns={}, max_tokens={}, temperature={}",
            D::DISPLAY_NAME,
            params.model,
            turns.len(),
            params.max_tokens,
            params.temperature
        );

        let request = self.dialect.build_request(params, turns);
        let json_body = serde_json::to_string(&request)
            .map_err(|e| ProviderError::Parse(format!("Request serialization failed: {e}")))?;

        let builder = self
            .client
            .post(self.dialect.endpoint(self.settings.base_url.trim_end_matches('/')))
            .header("Content-Type", "application/json")
            .body(json_body);

        let response = self
            .dialect
            .authorize(builder, api_key)
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;

        debug!("{} response status: {}", D::DISPLAY_NAME, response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("{} API error: {} - {}", D::DISPLAY_NAME, status, err_body);
            return Err(ProviderError::Api {
                status,
                message: err_body,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;
        let decoded: D::Response =
            serde_json::from_str(&body).map_err(|e| ProviderError::Parse(e.to_string()))?;

        self.dialect.extract_text(decoded)
    }
}
