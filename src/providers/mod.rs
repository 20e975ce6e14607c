//! Provider adapters
//!
//! One module per hosted completion API. Each adapter knows its endpoint,
//! builds the provider-specific request, performs a single HTTP call, and
//! extracts the completion text from the response.

pub mod deepseek;
pub mod gemini;
pub mod openai;

use crate::error::Result;
use async_trait::async_trait;

/// Trait for completion providers
///
/// A provider takes one prompt and returns one completion. Anything
/// stateful (conversation history, retries, streaming) lives outside
/// this crate.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send a prompt and return the extracted completion text
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Get the provider name
    fn provider_name(&self) -> &str;
}
