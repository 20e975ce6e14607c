//! DeepSeek API provider
//!
//! This module implements the CompletionProvider trait for DeepSeek's
//! chat completions API. The wire format follows the OpenAI chat
//! completions shape with DeepSeek's own endpoint and model names.

use crate::error::{PromptwireError, Result};
use crate::http::HttpClient;
use crate::providers::CompletionProvider;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// DeepSeek API base URL
const DEEPSEEK_API_BASE: &str = "https://api.deepseek.com/v1/chat/completions";

/// Default model when none is configured
const DEEPSEEK_DEFAULT_MODEL: &str = "deepseek-chat";

/// DeepSeek chat completions provider
pub struct DeepSeekProvider {
    /// API key for authentication
    api_key: String,
    /// Model to use
    model: String,
    /// Endpoint override
    base_url: Option<String>,
    /// HTTP client for making requests
    client: HttpClient,
}

impl DeepSeekProvider {
    /// Create a new DeepSeek provider
    pub fn new(api_key: impl Into<String>, client: HttpClient) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEEPSEEK_DEFAULT_MODEL.to_string(),
            base_url: None,
            client,
        }
    }

    /// Override the default model
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Override the default endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Endpoint the request is sent to
    fn endpoint(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEEPSEEK_API_BASE)
    }

    /// Pull the completion text out of the first choice
    fn extract_content(response: ChatResponse) -> Result<String> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| PromptwireError::MalformedResponse {
                provider: "deepseek".to_string(),
                detail: "missing choices[0].message.content".to_string(),
            })
    }
}

#[async_trait]
impl CompletionProvider for DeepSeekProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let headers = HttpClient::bearer_headers(&self.api_key)?;

        tracing::debug!(url = self.endpoint(), model = %self.model, "sending deepseek request");
        let response_text = self
            .client
            .post_json(self.endpoint(), headers, None, &request)
            .await?;

        let response: ChatResponse = serde_json::from_str(&response_text).map_err(|e| {
            PromptwireError::MalformedResponse {
                provider: "deepseek".to_string(),
                detail: format!("failed to parse response: {}", e),
            }
        })?;

        Self::extract_content(response)
    }

    fn provider_name(&self) -> &str {
        "deepseek"
    }
}

/// DeepSeek API request format
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

/// DeepSeek API message format
#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// DeepSeek API response format
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

/// Choice in DeepSeek response
#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

/// Message in DeepSeek response
#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}
