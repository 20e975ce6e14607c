//! Client configuration
//!
//! This module defines the provider enum and the immutable configuration
//! owned by the dispatcher for its whole lifetime.

use crate::error::PromptwireError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A hosted LLM API the client can talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Provider {
    /// OpenAI chat completions API
    OpenAi,
    /// Google Gemini generateContent API
    Gemini,
    /// DeepSeek chat completions API
    DeepSeek,
}

impl Provider {
    /// Provider name as used in configuration and error messages
    pub fn name(&self) -> &'static str {
        match self {
            Provider::OpenAi => "openai",
            Provider::Gemini => "gemini",
            Provider::DeepSeek => "deepseek",
        }
    }
}

impl FromStr for Provider {
    type Err = PromptwireError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "openai" => Ok(Provider::OpenAi),
            "gemini" => Ok(Provider::Gemini),
            "deepseek" => Ok(Provider::DeepSeek),
            other => Err(PromptwireError::UnknownProvider(other.to_string())),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable client configuration
///
/// The provider is stored as the raw configured string so that an
/// unrecognized name surfaces when `ask` is called, not at construction.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Configured provider name
    provider: String,
    /// API key for the provider
    api_key: Option<String>,
    /// Base URL override for the provider endpoint
    base_url: Option<String>,
    /// Model override (ignored by providers that encode the model in the URL)
    model: Option<String>,
}

impl ClientConfig {
    /// Create a new configuration for the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            api_key: None,
            base_url: None,
            model: None,
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL, replacing the provider's default endpoint verbatim
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set the model, replacing the provider's default
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Get the configured provider name
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Get the API key
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// Get the base URL override
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Get the model override
    pub fn model(&self) -> Option<&str> {
        self.model.as_deref()
    }
}
