//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use crate::inference::ProviderSettings;

/// Chat provider settings pointing at `base_url`.
pub fn provider_settings(base_url: &str, api_key: Option<&str>) -> ProviderSettings {
    ProviderSettings {
        api_key: api_key.map(str::to_string),
        base_url: base_url.to_string(),
        model: "test-model".to_string(),
        max_tokens: 1000,
        temperature: 0.7,
    }
}
