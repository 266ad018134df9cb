//! # News Tool

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
use crate::api::NewsClient;
use crate::api::news::format_headlines;
use crate::inference::ProviderError;

pub const DEFAULT_CATEGORY: &str = "general";
pub const DEFAULT_LIMIT: u32 = 5;

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct GetNewsArgs {
    /// News category (general, business, technology, sports, etc.)
    #[serde(default = "default_category")]
    pub category: String,
    /// Number of articles to return
    #[serde(default = "default_limit")]
    pub limit: u32,
}

pub fn describe_failure(error: &ProviderError) -> String {
    match error {
        ProviderError::Upstream(message) => format!("Error fetching news: {message}"),
        other => format!("Error: {other}"),
    }
}

#[derive(Clone)]
pub struct NewsServer {
    client: Arc<NewsClient>,
    tool_router: ToolRouter<NewsServer>,
}

#[tool_router]
impl NewsServer {
    pub fn new(client: NewsClient) -> Self {
        Self {
            client: Arc::new(client),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(description = "Get today's news headlines")]
    async fn get_news(
        &self,
        Parameters(GetNewsArgs { category, limit }): Parameters<GetNewsArgs>,
    ) -> Result<CallToolResult, ErrorData> {
        let outcome = self
            .client
            .top_headlines(&category, limit)
            .await
            .map(|headlines| format_headlines(&category, &headlines));
        Ok(tool_result("get_news", outcome, describe_failure))
    }
}

#[tool_handler]
impl ServerHandler for NewsServer {
    fn get_info(&self) -> ServerInfo {
        server_info(Adapter::News, "NewsAPI top headlines for the US.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::NewsSettings;

    fn unconfigured() -> NewsServer {
        NewsServer::new(NewsClient::new(NewsSettings {
            api_key: None,
            base_url: "http://127.0.0.1:9".to_string(),
        }))
    }

    #[test]
    fn test_args_defaults() {
        let args: GetNewsArgs = serde_json::from_value(serde_json::json!({})).unwrap();
        assert_eq!(args.category, "general");
        assert_eq!(args.limit, 5);
    }

    #[tokio::test]
    async fn test_missing_key_skips_network() {
        let args: GetNewsArgs = serde_json::from_value(serde_json::json!({})).unwrap();
        let result = unconfigured().get_news(Parameters(args)).await.unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(
            json["content"][0]["text"],
            "Error: News API key not configured. Please set NEWS_API_KEY in your .env file."
        );
    }

    #[test]
    fn test_failure_text() {
        assert_eq!(
            describe_failure(&ProviderError::Upstream("rateLimited".to_string())),
            "Error fetching news: rateLimited"
        );
        assert_eq!(
            describe_failure(&ProviderError::Parse("expected value".to_string())),
            "Error: parse error: expected value"
        );
    }
}
