//! Unified error system
//!
//! - [`ErrorCode`]: standardized error codes for all error kinds
//! - [`AppError`]: rich error type with codes, messages, and details
//!
//! # Error Code Ranges
//!
//! - 0xxx: general errors (validation, not found, bad request)
//! - 4xxx: order/billing errors
//! - 9xxx: storage and system errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! let err = AppError::not_found("Product 42");
//! assert_eq!(err.code, ErrorCode::NotFound);
//!
//! let err = AppError::validation("price must be non-negative")
//!     .with_detail("field", "price");
//! ```

mod codes;
mod types;

pub use codes::ErrorCode;
pub use types::{AppError, AppResult};
