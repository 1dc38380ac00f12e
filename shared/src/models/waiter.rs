//! Waiter Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Waiter availability status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WaiterStatus {
    #[default]
    Active,
    Inactive,
}

/// Login credentials for the waiter-facing app.
///
/// Stored as plain data; there is no authentication model here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaiterCredentials {
    pub username: String,
    pub password: String,
}

/// Timestamped free-text note attached to a waiter's record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaiterIssue {
    pub id: String,
    /// UTC milliseconds when the issue was logged
    pub date: i64,
    pub description: String,
}

/// Waiter entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Waiter {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<WaiterCredentials>,
    pub name: String,
    pub phone: String,
    pub email: String,
    /// UTC milliseconds
    pub join_date: i64,
    pub status: WaiterStatus,
    /// Lifetime completed-order counter; only ever incremented, and only
    /// by a successful bill print naming this waiter
    pub orders_completed: u64,
    #[serde(default)]
    pub issues: Vec<WaiterIssue>,
}

/// Create waiter payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WaiterCreate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "phone is required"))]
    pub phone: String,
    #[validate(email(message = "email is invalid"))]
    pub email: String,
    #[serde(default)]
    pub status: Option<WaiterStatus>,
}

/// Update waiter payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WaiterUpdate {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub phone: Option<String>,
    #[validate(email(message = "email is invalid"))]
    pub email: Option<String>,
    pub status: Option<WaiterStatus>,
}

/// Add-issue payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct IssueCreate {
    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,
}

/// Per-day completed-order count, derived from the bill history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaiterStats {
    pub waiter_id: String,
    /// Local calendar date, `YYYY-MM-DD`
    pub date: String,
    pub orders_completed: u64,
}
