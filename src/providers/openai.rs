//! OpenAI API provider
//!
//! This module implements the CompletionProvider trait for OpenAI's
//! chat completions API.

use crate::error::{PromptwireError, Result};
use crate::http::HttpClient;
use crate::providers::CompletionProvider;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// OpenAI API base URL
const OPENAI_API_BASE: &str = "https://api.openai.com/v1/chat/completions";

/// Default model when none is configured
const OPENAI_DEFAULT_MODEL: &str = "gpt-3.5-turbo";

/// OpenAI chat completions provider
pub struct OpenAiProvider {
    /// API key for authentication
    api_key: String,
    /// Model to use
    model: String,
    /// Endpoint override
    base_url: Option<String>,
    /// HTTP client for making requests
    client: HttpClient,
}

impl OpenAiProvider {
    /// Create a new OpenAI provider
    pub fn new(api_key: impl Into<String>, client: HttpClient) -> Self {
        Self {
            api_key: api_key.into(),
            model: OPENAI_DEFAULT_MODEL.to_string(),
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
        self.base_url.as_deref().unwrap_or(OPENAI_API_BASE)
    }

    /// Pull the completion text out of the first choice
    fn extract_content(response: ChatResponse) -> Result<String> {
        response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| PromptwireError::MalformedResponse {
                provider: "openai".to_string(),
                detail: "missing choices[0].message.content".to_string(),
            })
    }
}

#[async_trait]
impl CompletionProvider for OpenAiProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        };

        let headers = HttpClient::bearer_headers(&self.api_key)?;

        tracing::debug!(url = self.endpoint(), model = %self.model, "sending openai request");
        let response_text = self
            .client
            .post_json(self.endpoint(), headers, None, &request)
            .await?;

        let response: ChatResponse = serde_json::from_str(&response_text).map_err(|e| {
            PromptwireError::MalformedResponse {
                provider: "openai".to_string(),
                detail: format!("failed to parse response: {}", e),
            }
        })?;

        Self::extract_content(response)
    }

    fn provider_name(&self) -> &str {
        "openai"
    }
}

/// OpenAI API request format
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

/// OpenAI API message format
#[derive(Debug, Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// OpenAI API response format
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

/// Choice in OpenAI response
#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

/// Message in OpenAI response
#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}
