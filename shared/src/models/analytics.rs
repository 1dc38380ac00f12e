//! Analytics read models
//!
//! Aggregates derived from the bill history for one local calendar date.
//! Nothing here is stored; the server recomputes on every request.

use serde::{Deserialize, Serialize};

/// Per-product sales for one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    pub product_id: String,
    pub product_name: String,
    pub quantity: u64,
    pub revenue: f64,
}

/// Per-category sales for one date
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySales {
    pub category_id: String,
    pub category_name: String,
    pub quantity: u64,
    pub revenue: f64,
}

/// Whole-day totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesSummary {
    /// Local calendar date, `YYYY-MM-DD`
    pub date: String,
    pub total_revenue: f64,
    pub total_orders: u64,
    pub total_items: u64,
}
