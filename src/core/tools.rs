//! # Adapter Tools
//!
//! Each adapter is an MCP server: a struct whose `#[tool]` methods are
//! collected by `#[tool_router]` and served by `rmcp`. Argument decoding,
//! schema listing and unknown-tool errors all come from the router.
//!
//! Tool bodies return a typed [`ProviderError`]. [`tool_result`] is the
//! boundary where that becomes the text the client sees; a provider failure
//! is never a protocol error.

pub mod chat;
pub mod news;
pub mod text;

use log::warn;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};

use crate::Adapter;
use crate::inference::ProviderError;

pub use chat::{ChatGptServer, ClaudeServer};
pub use news::NewsServer;
pub use text::EchoServer;

/// A successful call carrying one text block.
pub fn text_result(text: impl Into<String>) -> CallToolResult {
    CallToolResult::success(vec![Content::text(text.into())])
}

/// Flattens a tool outcome into its result text.
///
/// `describe_failure` words the error for the client; the typed error is
/// logged before it is discarded.
pub fn tool_result<F>(
    tool: &str,
    outcome: Result<String, ProviderError>,
    describe_failure: F,
) -> CallToolResult
where
    F: FnOnce(&ProviderError) -> String,
{
    match outcome {
        Ok(text) => text_result(text),
        Err(error) => {
            warn!("Tool {} failed: {}", tool, error);
            text_result(describe_failure(&error))
        }
    }
}

/// `initialize` reply shared by every adapter.
pub fn server_info(adapter: Adapter, instructions: &str) -> ServerInfo {
    ServerInfo {
        protocol_version: ProtocolVersion::V_2024_11_05,
        capabilities: ServerCapabilities::builder().enable_tools().build(),
        server_info: Implementation {
            name: adapter.server_name().to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..Default::default()
        },
        instructions: Some(instructions.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text_of(result: &CallToolResult) -> String {
        let json = serde_json::to_value(result).unwrap();
        json["content"][0]["text"].as_str().unwrap().to_string()
    }

    #[test]
    fn test_success_passes_text_through() {
        let result = tool_result("echo", Ok("Echo: hi".to_string()), |_| unreachable!());
        assert_eq!(text_of(&result), "Echo: hi");
        assert_ne!(result.is_error, Some(true));
    }

    #[test]
    fn test_failure_is_described_not_raised() {
        let result = tool_result("get_news", Err(ProviderError::EmptyResponse), |e| {
            format!("Error: {e}")
        });
        assert_eq!(
            text_of(&result),
            "Error: provider returned no completion text"
        );
        assert_ne!(result.is_error, Some(true));
    }

    #[test]
    fn test_server_info_names_adapter() {
        let info = server_info(Adapter::News, "headlines");
        assert_eq!(info.server_info.name, "news_server");
        assert!(info.capabilities.tools.is_some());
    }
}
