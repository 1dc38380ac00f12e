//! Order Models
//!
//! Orders are keyed by table id ("table1".."tableN", derived from the
//! configured table count, not a stored entity). Item name and unit price
//! are denormalized at add time, so later catalog edits never change an
//! open order.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// One line of a live table order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    /// Denormalized product name at add time
    pub product_name: String,
    pub quantity: u32,
    /// Denormalized unit price at add time
    pub price: f64,
}

impl OrderItem {
    /// price x quantity for this line
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

/// Add-item payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemAdd {
    #[validate(length(min = 1, message = "productId is required"))]
    pub product_id: String,
    #[validate(length(min = 1, message = "productName is required"))]
    pub product_name: String,
    #[validate(range(min = 1, message = "quantity must be positive"))]
    pub quantity: u32,
    #[validate(range(min = 0.0, message = "price must be non-negative"))]
    pub price: f64,
}

impl From<OrderItemAdd> for OrderItem {
    fn from(add: OrderItemAdd) -> Self {
        Self {
            product_id: add.product_id,
            product_name: add.product_name,
            quantity: add.quantity,
            price: add.price,
        }
    }
}

/// Set-quantity payload; zero or negative removes the line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuantityUpdate {
    pub quantity: i64,
}

/// Completion flag payload for `POST /orders/{table}/complete`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionUpdate {
    pub completed: bool,
}

/// Read view of one table: live items plus the staff completion flag
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TableOrder {
    pub table_id: String,
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub completed: bool,
}
