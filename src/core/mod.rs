//! # Core Adapter Logic
//!
//! Configuration and the tools each adapter exposes. Nothing in here knows
//! about the stdio transport; that lives in [`crate::server`].
//!
//! ```text
//!   env + config.toml ──▶ config::resolve() ──▶ ResolvedConfig
//!                                                   │
//!                                                   ▼
//!                                   server::run_stdio(adapter, &config)
//!                                                   │
//!                     ┌──────────────┬──────────────┼──────────────┐
//!                     ▼              ▼              ▼              ▼
//!                 EchoServer   ChatGptServer   ClaudeServer    NewsServer
//! ```
//!
//! ## Modules
//!
//! - [`config`]: layered settings, resolved once at startup
//! - [`tools`]: one MCP server per adapter, and the failure-to-text boundary

pub mod config;
pub mod tools;
