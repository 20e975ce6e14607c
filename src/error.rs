//! Error types for promptwire
//!
//! This module defines the error types used throughout the crate.

use thiserror::Error;

/// Result type alias for promptwire
pub type Result<T> = std::result::Result<T, PromptwireError>;

/// Main error type for promptwire
#[derive(Error, Debug)]
pub enum PromptwireError {
    /// A provider was selected without the credential it requires
    #[error("{0} API key is required")]
    MissingApiKey(String),

    /// The configured provider name is not recognized
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// The server answered with a non-success status
    #[error("HTTP status {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// The response body did not contain the expected fields
    #[error("Malformed {provider} response: {detail}")]
    MalformedResponse { provider: String, detail: String },

    /// Transport-level errors (connection, TLS, timeout)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A configured value cannot be encoded as an HTTP header
    #[error("Invalid header value: {0}")]
    InvalidHeader(String),
}
