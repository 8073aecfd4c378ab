//! # Client Errors
//!
//! Errors raised while reaching the service ([`ClientError`]) and while
//! decoding what it sent back ([`ParseError`]). Keeping the two apart lets
//! callers tell a network problem from a payload problem without string
//! matching.

/// Errors that can occur while performing a request.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(Box<dyn std::error::Error + Send + Sync>),
    #[error("invalid url: {0}")]
    InvalidUrl(String),
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),
}

impl ClientError {
    /// Builds a transport error from anything that describes the failure.
    pub fn transport(source: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        ClientError::Transport(source.into())
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            ClientError::InvalidUrl(e.to_string())
        } else {
            ClientError::Transport(Box::new(e))
        }
    }
}

/// The response body could not be decoded into the expected record shape.
#[derive(Debug, thiserror::Error)]
#[error("parse error: {0}")]
pub struct ParseError(#[from] pub serde_json::Error);
