//! Client error types

use thiserror::Error;

/// Errors produced by API calls
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network / transport level failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with `success: false` or a non-2xx status
    #[error("{message} ({code})")]
    Api { code: String, message: String },

    /// Success envelope without a data payload
    #[error("empty response data")]
    EmptyData,
}

impl ClientError {
    pub fn api(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Api {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
