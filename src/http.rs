//! HTTP transport
//!
//! This module provides a small wrapper over reqwest for talking to
//! provider APIs: a fixed per-request timeout, JSON POSTs, plain GETs,
//! and header building. Non-success statuses are turned into errors here
//! so the provider adapters only ever see response bodies.

use crate::error::{PromptwireError, Result};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Response};
use serde::Serialize;
use std::time::Duration;

/// Fixed timeout for every request (in seconds)
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// HTTP client for provider API requests
#[derive(Clone)]
pub struct HttpClient {
    /// Reqwest HTTP client
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with the fixed timeout
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(PromptwireError::Http)?;

        Ok(Self { client })
    }

    /// Make a POST request with a JSON body
    ///
    /// # Arguments
    /// * `url` - Request URL
    /// * `headers` - Request headers
    /// * `query` - Optional query parameters (used for query-string auth)
    /// * `body` - Request body (serializable)
    ///
    /// # Returns
    /// Response body as string
    pub async fn post_json<T: Serialize>(
        &self,
        url: &str,
        headers: HeaderMap,
        query: Option<&[(&str, &str)]>,
        body: &T,
    ) -> Result<String> {
        let mut request = self.client.post(url).headers(headers).json(body);
        if let Some(query) = query {
            request = request.query(query);
        }

        let response = request.send().await.map_err(PromptwireError::Http)?;
        Self::read_success(response).await
    }

    /// Make a GET request and return the raw body text
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(PromptwireError::Http)?;
        Self::read_success(response).await
    }

    /// Read the body of a successful response, or fail with the status code
    async fn read_success(response: Response) -> Result<String> {
        let status = response.status();

        if status.is_success() {
            let text = response.text().await.map_err(PromptwireError::Http)?;
            return Ok(text);
        }

        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read response body".to_string());

        Err(PromptwireError::HttpStatus {
            status: status.as_u16(),
            message,
        })
    }

    /// Build standard JSON headers with bearer authorization
    pub fn bearer_headers(api_key: &str) -> Result<HeaderMap> {
        let mut headers = Self::json_headers();
        let value = HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(|_| {
            PromptwireError::InvalidHeader("API key is not a valid header value".to_string())
        })?;
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }

    /// Build plain JSON headers for providers that authenticate elsewhere
    pub fn json_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }
}
