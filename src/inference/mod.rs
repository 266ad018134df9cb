pub mod provider;
pub mod providers;
pub mod types;

pub use provider::{ChatClient, ChatDialect, ProviderError};
pub use providers::{Anthropic, OpenAi};
pub use types::{CompletionParams, Overrides, ProviderSettings, Role, Turn};
