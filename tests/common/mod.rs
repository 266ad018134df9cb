//! In-process MCP client wired to a server over an in-memory pipe.

#![allow(dead_code)]

use mcp_adapters::api::NewsSettings;
use mcp_adapters::inference::ProviderSettings;
use rmcp::{
    RoleClient, ServerHandler, ServiceExt,
    model::{CallToolRequestParam, ClientCapabilities, ClientInfo, Implementation},
    service::{RunningService, ServiceError},
};
use serde_json::Value;
use tokio_test::assert_ok;

pub type Client = RunningService<RoleClient, ClientInfo>;

pub fn settings(base_url: &str, api_key: Option<&str>, model: &str) -> ProviderSettings {
    ProviderSettings {
        api_key: api_key.map(str::to_string),
        base_url: base_url.to_string(),
        model: model.to_string(),
        max_tokens: 1000,
        temperature: 0.7,
    }
}

pub fn news_settings(base_url: &str, api_key: Option<&str>) -> NewsSettings {
    NewsSettings {
        api_key: api_key.map(str::to_string),
        base_url: base_url.to_string(),
    }
}

/// Starts `server` on one end of a duplex pipe and handshakes a client on the other.
pub async fn connect<S: ServerHandler>(server: S) -> Client {
    let (server_io, client_io) = tokio::io::duplex(64 * 1024);
    tokio::spawn(async move {
        if let Ok(running) = server.serve(server_io).await {
            let _ = running.waiting().await;
        }
    });

    let info = ClientInfo {
        protocol_version: Default::default(),
        capabilities: ClientCapabilities::default(),
        client_info: Implementation {
            name: "adapter-tests".to_string(),
            version: "0.0.0".to_string(),
            ..Default::default()
        },
    };
    info.serve(client_io).await.unwrap()
}

/// Calls `tool` and returns the raw outcome.
pub async fn try_call(client: &Client, tool: &str, arguments: Value) -> Result<Value, ServiceError> {
    let result = client
        .call_tool(CallToolRequestParam {
            name: tool.to_string().into(),
            arguments: arguments.as_object().cloned(),
        })
        .await?;
    Ok(serde_json::to_value(&result).unwrap())
}

/// Calls `tool` and returns the text of its single content block.
pub async fn call(client: &Client, tool: &str, arguments: Value) -> String {
    let result = assert_ok!(try_call(client, tool, arguments).await);
    assert_ne!(result["isError"], Value::Bool(true), "tool reported isError");
    result["content"][0]["text"].as_str().unwrap().to_string()
}
