mod open_ai;

pub use open_ai::OpenAIProvider;

use crate::error::Result;
use crate::model::Message;
use async_trait::async_trait;

/// Chat completion backend used by every pipeline stage
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "openai")
    fn provider_name(&self) -> &str;

    /// Send one chat request and return the first choice's text
    async fn complete(&self, model: &str, messages: &[Message], max_tokens: u32)
        -> Result<String>;
}
