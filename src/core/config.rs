//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → per-call arguments.
//!
//! The config file is optional. It is read from `--config <path>` or, when
//! present, `~/.mcp-adapters/config.toml`. Everything is resolved once at
//! startup into a [`ResolvedConfig`] that handlers only ever read.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

use crate::api::NewsSettings;
use crate::api::news::{DEFAULT_NEWS_BASE_URL, NEWS_API_KEY_VAR};
use crate::inference::ProviderSettings;
use crate::inference::providers::anthropic::{
    DEFAULT_ANTHROPIC_BASE_URL, DEFAULT_ANTHROPIC_MODEL,
};
use crate::inference::providers::openai::{DEFAULT_OPENAI_BASE_URL, DEFAULT_OPENAI_MODEL};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct AdapterConfig {
    #[serde(default)]
    pub openai: ChatProviderConfig,
    #[serde(default)]
    pub anthropic: ChatProviderConfig,
    #[serde(default)]
    pub news: NewsConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ChatProviderConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub model: Option<String>,
    pub max_tokens: Option<u32>,
    pub temperature: Option<f32>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct NewsConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_MAX_TOKENS: u32 = 1000;
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Environment variable names for one chat provider.
struct ChatEnv {
    api_key: &'static str,
    base_url: &'static str,
    model: &'static str,
    max_tokens: &'static str,
    temperature: &'static str,
}

const OPENAI_ENV: ChatEnv = ChatEnv {
    api_key: "OPENAI_API_KEY",
    base_url: "OPENAI_BASE_URL",
    model: "OPENAI_MODEL",
    max_tokens: "OPENAI_MAX_TOKENS",
    temperature: "OPENAI_TEMPERATURE",
};

const ANTHROPIC_ENV: ChatEnv = ChatEnv {
    api_key: "ANTHROPIC_API_KEY",
    base_url: "ANTHROPIC_BASE_URL",
    model: "ANTHROPIC_MODEL",
    max_tokens: "ANTHROPIC_MAX_TOKENS",
    temperature: "ANTHROPIC_TEMPERATURE",
};

const NEWS_BASE_URL_ENV: &str = "NEWS_API_BASE_URL";

// ============================================================================
// Resolved Config (concrete values, no Options except credentials)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub openai: ProviderSettings,
    pub anthropic: ProviderSettings,
    pub news: NewsSettings,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error ({}): {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.mcp-adapters/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".mcp-adapters").join("config.toml"))
}

/// Loads the config file.
///
/// An explicit path must exist. Without one, the default location is tried
/// and silently skipped when absent.
pub fn load_config(explicit: Option<&Path>) -> Result<AdapterConfig, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Some(p) if p.exists() => p,
            _ => {
                debug!("No config file found, using defaults and environment");
                return Ok(AdapterConfig::default());
            }
        },
    };

    let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    let config = parse_config(&contents)?;
    info!("Loaded config from {}", path.display());
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<AdapterConfig, ConfigError> {
    Ok(toml::from_str(contents)?)
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve against the process environment.
pub fn resolve(config: &AdapterConfig) -> ResolvedConfig {
    resolve_with(config, |name| std::env::var(name).ok())
}

/// Resolve the final config by collapsing: defaults → config file → env vars.
///
/// `env` looks up a variable by name. Empty values count as unset.
pub fn resolve_with<F>(config: &AdapterConfig, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    let env = |name: &str| env(name).filter(|v| !v.trim().is_empty());

    let openai = resolve_chat(
        &config.openai,
        &OPENAI_ENV,
        DEFAULT_OPENAI_BASE_URL,
        DEFAULT_OPENAI_MODEL,
        &env,
    );
    let anthropic = resolve_chat(
        &config.anthropic,
        &ANTHROPIC_ENV,
        DEFAULT_ANTHROPIC_BASE_URL,
        DEFAULT_ANTHROPIC_MODEL,
        &env,
    );

    let news = NewsSettings {
        api_key: env(NEWS_API_KEY_VAR).or_else(|| non_empty(&config.news.api_key)),
        base_url: env(NEWS_BASE_URL_ENV)
            .or_else(|| config.news.base_url.clone())
            .unwrap_or_else(|| DEFAULT_NEWS_BASE_URL.to_string()),
    };

    ResolvedConfig {
        openai,
        anthropic,
        news,
    }
}

fn resolve_chat<F>(
    file: &ChatProviderConfig,
    vars: &ChatEnv,
    default_base_url: &str,
    default_model: &str,
    env: &F,
) -> ProviderSettings
where
    F: Fn(&str) -> Option<String>,
{
    // API key: env → config
    let api_key = env(vars.api_key).or_else(|| non_empty(&file.api_key));

    // Base URL / model: env → config → default
    let base_url = env(vars.base_url)
        .or_else(|| file.base_url.clone())
        .unwrap_or_else(|| default_base_url.to_string());
    let model = env(vars.model)
        .or_else(|| file.model.clone())
        .unwrap_or_else(|| default_model.to_string());

    // Numeric knobs: env (if it parses) → config → default
    let max_tokens = parse_env(env, vars.max_tokens)
        .or(file.max_tokens)
        .unwrap_or(DEFAULT_MAX_TOKENS);
    let temperature = parse_env(env, vars.temperature)
        .or(file.temperature)
        .unwrap_or(DEFAULT_TEMPERATURE);

    ProviderSettings {
        api_key,
        base_url,
        model,
        max_tokens,
        temperature,
    }
}

/// Reads and parses a numeric env var, warning and ignoring it if malformed.
fn parse_env<T, F>(env: &F, name: &str) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = env(name)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {name}={raw:?}: not a valid number");
            None
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.clone().filter(|v| !v.trim().is_empty())
}
