//! Provider dispatch
//!
//! The dispatcher owns the client configuration and routes each `ask`
//! call to the matching provider adapter. Every operation is a single
//! stateless request/response cycle; the dispatcher holds no mutable
//! state, so it can be shared freely across tasks.

use crate::config::{ClientConfig, Provider};
use crate::error::{PromptwireError, Result};
use crate::http::HttpClient;
use crate::providers::deepseek::DeepSeekProvider;
use crate::providers::gemini::GeminiProvider;
use crate::providers::openai::OpenAiProvider;
use crate::providers::CompletionProvider;

/// Client facade over the hosted completion APIs
pub struct Dispatcher {
    /// Immutable configuration, fixed for the dispatcher's lifetime
    config: ClientConfig,
    /// Shared HTTP client
    client: HttpClient,
}

impl Dispatcher {
    /// Create a new dispatcher from the given configuration
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Self {
            client: HttpClient::new()?,
            config,
        })
    }

    /// Send a prompt to the configured provider and return the completion text
    ///
    /// Fails with `UnknownProvider` for an unrecognized provider name and
    /// with `MissingApiKey` when the provider's credential is absent; both
    /// checks happen before any HTTP call.
    pub async fn ask(&self, prompt: &str) -> Result<String> {
        let provider: Provider = self.config.provider().parse()?;
        let api_key = self.require_api_key(provider)?;

        tracing::debug!(provider = provider.name(), "dispatching prompt");

        let adapter: Box<dyn CompletionProvider> = match provider {
            Provider::OpenAi => {
                let mut openai = OpenAiProvider::new(api_key, self.client.clone());
                if let Some(model) = self.config.model() {
                    openai = openai.with_model(model);
                }
                if let Some(base_url) = self.config.base_url() {
                    openai = openai.with_base_url(base_url);
                }
                Box::new(openai)
            }
            Provider::Gemini => {
                let mut gemini = GeminiProvider::new(api_key, self.client.clone());
                if let Some(base_url) = self.config.base_url() {
                    gemini = gemini.with_base_url(base_url);
                }
                Box::new(gemini)
            }
            Provider::DeepSeek => {
                let mut deepseek = DeepSeekProvider::new(api_key, self.client.clone());
                if let Some(model) = self.config.model() {
                    deepseek = deepseek.with_model(model);
                }
                if let Some(base_url) = self.config.base_url() {
                    deepseek = deepseek.with_base_url(base_url);
                }
                Box::new(deepseek)
            }
        };

        adapter.complete(prompt).await
    }

    /// Fetch plain text from a URL
    pub async fn fetch_url(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "fetching url");
        self.client.get_text(url).await
    }

    /// Placeholder training operation
    ///
    /// Returns a fixed message; nothing is trained and no state is kept.
    pub fn train(&self, data: &[String]) -> String {
        format!("Training with {} records is not implemented yet.", data.len())
    }

    /// The credential for the selected provider, or `MissingApiKey`
    ///
    /// An empty key counts as missing, matching the per-provider checks.
    fn require_api_key(&self, provider: Provider) -> Result<&str> {
        self.config
            .api_key()
            .filter(|key| !key.is_empty())
            .ok_or_else(|| PromptwireError::MissingApiKey(provider.name().to_string()))
    }
}
