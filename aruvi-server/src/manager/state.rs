//! Whole application state

use serde::{Deserialize, Serialize};
use shared::models::{Category, HistoryEntry, Hotel, OrderItem, Product, TableOrder, Waiter};
use std::collections::HashMap;

/// Every persisted collection, one field per entity kind.
///
/// This is what the persistence adapters load and (for the local adapter)
/// write per collection. Serializing and reloading it reproduces the exact
/// same state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosState {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Live order items keyed by table id
    #[serde(default)]
    pub orders: HashMap<String, Vec<OrderItem>>,
    /// Printed bills, newest first
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(default)]
    pub waiters: Vec<Waiter>,
    /// Manual staff completion flag per table
    #[serde(default)]
    pub completions: HashMap<String, bool>,
    #[serde(default)]
    pub hotels: Vec<Hotel>,
}

impl PosState {
    /// True when nothing has ever been stored (drives first-run seeding)
    pub fn is_unseeded(&self) -> bool {
        self.products.is_empty()
            && self.categories.is_empty()
            && self.waiters.is_empty()
            && self.history.is_empty()
            && self.orders.is_empty()
    }

    /// Read view of one table: live items plus completion flag
    pub fn table_order(&self, table_id: &str) -> TableOrder {
        TableOrder {
            table_id: table_id.to_string(),
            items: self.orders.get(table_id).cloned().unwrap_or_default(),
            completed: self.completions.get(table_id).copied().unwrap_or(false),
        }
    }

    /// Σ quantity over a table's live order
    pub fn order_count(&self, table_id: &str) -> u64 {
        self.orders
            .get(table_id)
            .map(|items| items.iter().map(|i| i.quantity as u64).sum())
            .unwrap_or(0)
    }

    /// Σ price × quantity over a table's live order
    pub fn order_total(&self, table_id: &str) -> f64 {
        self.orders
            .get(table_id)
            .map(|items| items.iter().map(OrderItem::line_total).sum())
            .unwrap_or(0.0)
    }
}
