//! Google Gemini API provider
//!
//! This module implements the CompletionProvider trait for the Gemini
//! generateContent API. Gemini authenticates with a `key` query parameter
//! instead of a bearer header, and the model name is part of the URL.

use crate::error::{PromptwireError, Result};
use crate::http::HttpClient;
use crate::providers::CompletionProvider;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Gemini API base URL
const GEMINI_API_BASE: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-pro:generateContent";

/// Gemini generateContent provider
pub struct GeminiProvider {
    /// API key, sent as a query parameter
    api_key: String,
    /// Endpoint override
    base_url: Option<String>,
    /// HTTP client for making requests
    client: HttpClient,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    pub fn new(api_key: impl Into<String>, client: HttpClient) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: None,
            client,
        }
    }

    /// Override the default endpoint
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Endpoint the request is sent to
    fn endpoint(&self) -> &str {
        self.base_url.as_deref().unwrap_or(GEMINI_API_BASE)
    }

    /// Pull the completion text out of the first candidate
    fn extract_content(response: GenerateContentResponse) -> Result<String> {
        response
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| PromptwireError::MalformedResponse {
                provider: "gemini".to_string(),
                detail: "missing candidates[0].content.parts[0].text".to_string(),
            })
    }
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let query = [("key", self.api_key.as_str())];

        tracing::debug!(url = self.endpoint(), "sending gemini request");
        let response_text = self
            .client
            .post_json(
                self.endpoint(),
                HttpClient::json_headers(),
                Some(&query),
                &request,
            )
            .await?;

        let response: GenerateContentResponse =
            serde_json::from_str(&response_text).map_err(|e| {
                PromptwireError::MalformedResponse {
                    provider: "gemini".to_string(),
                    detail: format!("failed to parse response: {}", e),
                }
            })?;

        Self::extract_content(response)
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }
}

/// Gemini API request format
#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

/// Content block in Gemini request
#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

/// Text part in Gemini request
#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

/// Gemini API response format
#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Vec<Candidate>,
}

/// Candidate in Gemini response
#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

/// Content block in Gemini response
#[derive(Debug, Deserialize)]
struct CandidateContent {
    parts: Vec<ResponsePart>,
}

/// Text part in Gemini response
#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: String,
}
