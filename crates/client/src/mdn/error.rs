//! MDN client error types.

use std::sync::Arc;

/// Errors from the MDN client.
///
/// Tool code logs these and returns fixed text, so the variants only need
/// to carry enough detail for the diagnostic line.
#[derive(Debug, Clone, thiserror::Error)]
pub enum MdnError {
    /// Path or base URL could not be turned into a request URL.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Non-2xx HTTP response.
    #[error("HTTP error: {status}")]
    HttpStatus { status: reqwest::StatusCode },

    /// Request timeout.
    #[error("request timeout")]
    Timeout,

    /// Network error.
    #[error("network error: {0}")]
    Network(Arc<reqwest::Error>),

    /// Response parse error.
    #[error("parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for MdnError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() { MdnError::Timeout } else { MdnError::Network(Arc::new(err)) }
    }
}

impl From<url::ParseError> for MdnError {
    fn from(err: url::ParseError) -> Self {
        MdnError::InvalidUrl(err.to_string())
    }
}

impl From<MdnError> for mdn_core::Error {
    fn from(err: MdnError) -> Self {
        match err {
            MdnError::InvalidUrl(msg) => mdn_core::Error::InvalidUrl(msg),
            other => mdn_core::Error::HttpError(other.to_string()),
        }
    }
}
