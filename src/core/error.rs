//! Error types and handling for the FMP MCP server.
//!
//! This module defines a unified error type for failures that must abort an
//! operation (or startup). Upstream API failures are deliberately NOT part of
//! this taxonomy: the FMP client converts them into soft error values that
//! travel back to the caller as normal data.

use thiserror::Error;

/// A specialized Result type for FMP MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the FMP MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors, including a missing API key at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure constructing the shared HTTP client.
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// I/O errors from transport setup.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors that should not occur under normal operation.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
