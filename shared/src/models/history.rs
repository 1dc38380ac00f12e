//! Bill History Model

use super::order::OrderItem;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// A printed bill: immutable snapshot of a completed table order.
///
/// Entries are append-only and kept newest first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub table_id: String,
    /// Snapshot of the order items at print time
    pub items: Vec<OrderItem>,
    pub total: f64,
    /// UTC milliseconds at print time
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waiter_id: Option<String>,
}

/// Print-bill payload for `POST /bills/print`.
///
/// Clients may echo the items and total they rendered, but the server
/// bills from the live order; the echoed values are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BillPrint {
    #[validate(length(min = 1, message = "tableId is required"))]
    pub table_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waiter_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<OrderItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
}
