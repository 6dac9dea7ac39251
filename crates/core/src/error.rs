//! Unified error types for mdn-mcp.
//!
//! Upstream failures never reach this type from a tool call; they are
//! turned into text results at the tool boundary. What remains here is
//! input validation and startup failures.

use rmcp::model::{ErrorCode, ErrorData as McpError};

use crate::config::ConfigError;

/// Unified error types for the mdn-mcp server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid input parameters (e.g., empty query).
    #[error("INVALID_INPUT: {0}")]
    InvalidInput(String),

    /// Invalid URL.
    #[error("INVALID_URL: {0}")]
    InvalidUrl(String),

    /// HTTP client could not be built or a request failed.
    #[error("HTTP_ERROR: {0}")]
    HttpError(String),

    /// Configuration could not be loaded or failed validation.
    #[error("CONFIG_ERROR: {0}")]
    Config(#[from] ConfigError),
}

impl From<Error> for McpError {
    fn from(err: Error) -> Self {
        let (code, message) = match &err {
            Error::InvalidInput(msg) => (-32602, msg.clone()),
            Error::InvalidUrl(msg) => (-32003, msg.clone()),
            Error::HttpError(msg) => (-32008, msg.clone()),
            Error::Config(e) => (-32013, e.to_string()),
        };

        McpError { code: ErrorCode(code), message: message.into(), data: None }
    }
}
