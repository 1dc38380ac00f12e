//! Standardized error codes

use http::StatusCode;
use serde::{Deserialize, Serialize};

/// Error code carried in every failed API response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Success (never carried by an error)
    Success,
    /// Malformed request (bad path/query parameter, unparsable body)
    InvalidRequest,
    /// Payload failed field validation
    ValidationFailed,
    /// Mutation or read targeting an id with no match
    NotFound,
    /// Bill print attempted on an empty (or unknown) table
    OrderEmpty,
    /// Persistence adapter failure (local write)
    StorageError,
    /// Persistence adapter failure (remote API)
    RemoteSyncFailed,
    /// Anything unexpected
    InternalError,
}

impl ErrorCode {
    /// Wire representation, stable across releases
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "E0000",
            Self::InvalidRequest => "E0001",
            Self::ValidationFailed => "E0002",
            Self::NotFound => "E0003",
            Self::OrderEmpty => "E4001",
            Self::StorageError => "E9001",
            Self::RemoteSyncFailed => "E9002",
            Self::InternalError => "E9000",
        }
    }

    /// Default human-readable message
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::InvalidRequest => "Invalid request",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::OrderEmpty => "Order is empty",
            Self::StorageError => "Storage error",
            Self::RemoteSyncFailed => "Remote sync failed",
            Self::InternalError => "Internal server error",
        }
    }

    /// HTTP status this code maps to
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::InvalidRequest => StatusCode::BAD_REQUEST,
            Self::ValidationFailed => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::OrderEmpty => StatusCode::UNPROCESSABLE_ENTITY,
            Self::StorageError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::RemoteSyncFailed => StatusCode::BAD_GATEWAY,
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_unique() {
        let all = [
            ErrorCode::Success,
            ErrorCode::InvalidRequest,
            ErrorCode::ValidationFailed,
            ErrorCode::NotFound,
            ErrorCode::OrderEmpty,
            ErrorCode::StorageError,
            ErrorCode::RemoteSyncFailed,
            ErrorCode::InternalError,
        ];
        let set: std::collections::HashSet<&str> = all.iter().map(|c| c.as_str()).collect();
        assert_eq!(set.len(), all.len());
    }
}
