//! API Response types
//!
//! Every `/v1` response is wrapped in the same envelope:
//!
//! ```json
//! {
//!     "success": true,
//!     "data": { ... },
//!     "message": "...",
//!     "error": { "code": "E0003", "message": "...", "details": { ... } }
//! }
//! ```
//!
//! A response counts as failed when `success` is false or the transport
//! status is non-2xx.

use crate::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Error payload carried by failed responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Stable error code (see [`crate::error::ErrorCode`])
    pub code: String,
    /// Human-readable message
    pub message: String,
    /// Optional structured details
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

/// Unified API response envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the operation succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(default = "none", skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Optional human-readable message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Error payload (present on failure)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

fn none<T>() -> Option<T> {
    None
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    /// Create a successful response with a message
    pub fn ok_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: Some(message.into()),
            error: None,
        }
    }

    /// Create a failed response from an application error
    pub fn failure(err: &AppError) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(err.message.clone()),
            error: Some(ErrorBody {
                code: err.code.as_str().to_string(),
                message: err.message.clone(),
                details: err.details.clone(),
            }),
        }
    }
}

impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_envelope_omits_error() {
        let json = serde_json::to_value(ApiResponse::ok(vec![1, 2, 3])).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], serde_json::json!([1, 2, 3]));
        assert!(json.get("error").is_none());
    }

    #[test]
    fn failure_envelope_carries_code_and_message() {
        let err = AppError::not_found("Product 9");
        let json = serde_json::to_value(ApiResponse::<()>::failure(&err)).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["code"], "E0003");
        assert_eq!(json["error"]["message"], "Product 9 not found");
    }

    #[test]
    fn envelope_round_trips() {
        let wire = r#"{"success":true,"data":{"id":"1"},"message":"ok"}"#;
        let parsed: ApiResponse<serde_json::Value> = serde_json::from_str(wire).unwrap();
        assert!(parsed.success);
        assert_eq!(parsed.data.unwrap()["id"], "1");
        assert!(parsed.error.is_none());
    }
}
