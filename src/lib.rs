//! promptwire library
//!
//! A minimal client facade over hosted LLM completion APIs: configure a
//! provider, send it a prompt, get the completion text back. The main
//! binary is in src/main.rs.

pub mod config;
pub mod dispatcher;
pub mod error;
pub mod http;
pub mod providers;

// Re-exports
pub use config::{ClientConfig, Provider};
pub use dispatcher::Dispatcher;
pub use error::{PromptwireError, Result};
pub use providers::CompletionProvider;
