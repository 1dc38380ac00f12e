//! Data models
//!
//! Entities and their create/update payloads. Wire format is camelCase
//! JSON; all ids are strings and all timestamps are UTC milliseconds.

mod analytics;
mod category;
mod history;
mod hotel;
mod order;
mod product;
mod waiter;

pub use analytics::{CategorySales, ProductSales, SalesSummary};
pub use category::{Category, CategoryCreate, CategoryUpdate};
pub use history::{BillPrint, HistoryEntry};
pub use hotel::{Hotel, HotelCreate, HotelUpdate};
pub use order::{CompletionUpdate, OrderItem, OrderItemAdd, QuantityUpdate, TableOrder};
pub use product::{Product, ProductCreate, ProductUpdate};
pub use waiter::{
    IssueCreate, Waiter, WaiterCreate, WaiterCredentials, WaiterIssue, WaiterStats, WaiterStatus,
    WaiterUpdate,
};
