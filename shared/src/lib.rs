//! Shared types for the Aruvi POS admin backend
//!
//! Common types used by both the server and the client crates:
//! data models, the unified error system, the API response wrapper,
//! and id/time utilities.

pub mod error;
pub mod models;
pub mod response;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCode};
pub use response::{ApiResponse, ErrorBody};
