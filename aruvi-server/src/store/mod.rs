//! Persistence port
//!
//! The manager speaks to storage through [`StateStore`]: a wholesale
//! [`StateStore::load`] at startup/refresh, and one [`StateStore::apply`]
//! per logical mutation. Two implementations exist and are selected at
//! startup, never mixed:
//!
//! - [`LocalStore`]: one JSON file per collection, rewritten wholesale on
//!   every mutation;
//! - [`RemoteStore`]: a REST client issuing one request per mutation.

mod local;
mod remote;

pub use local::LocalStore;
pub use remote::RemoteStore;

use crate::manager::PosState;
use async_trait::async_trait;
use shared::AppError;
use shared::models::{Category, HistoryEntry, Hotel, OrderItem, Product, Waiter, WaiterCredentials, WaiterIssue};
use thiserror::Error;

/// Storage-level errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("remote api error: {0}")]
    Remote(#[from] aruvi_client::ClientError),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Remote(e) => AppError::remote_sync(e.to_string()),
            other => AppError::storage(other.to_string()),
        }
    }
}

/// One logical state change, as the adapters need to see it.
///
/// The local adapter uses it to pick which collection files to rewrite;
/// the remote adapter maps each variant to a single API request.
#[derive(Debug, Clone, Copy)]
pub enum Mutation<'a> {
    ItemAdded { table_id: &'a str, item: &'a OrderItem },
    QuantitySet { table_id: &'a str, product_id: &'a str, quantity: i64 },
    ItemRemoved { table_id: &'a str, product_id: &'a str },
    OrderCleared { table_id: &'a str },
    CompletionSet { table_id: &'a str, completed: bool },
    BillPrinted { entry: &'a HistoryEntry },
    ProductCreated { product: &'a Product },
    ProductUpdated { product: &'a Product },
    ProductDeleted { id: &'a str },
    CategoryCreated { category: &'a Category },
    CategoryUpdated { category: &'a Category },
    CategoryDeleted { id: &'a str },
    WaiterCreated { waiter: &'a Waiter },
    WaiterUpdated { waiter: &'a Waiter },
    WaiterDeleted { id: &'a str },
    IssueAdded { waiter_id: &'a str, issue: &'a WaiterIssue },
    CredentialsUpdated { waiter_id: &'a str, credentials: &'a WaiterCredentials },
    HotelCreated { hotel: &'a Hotel },
    HotelUpdated { hotel: &'a Hotel },
    HotelDeleted { id: &'a str },
    /// Persist everything (first-run seeding)
    Snapshot,
}

/// Storage port: identical manager contract over either backend
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Read the whole state wholesale
    async fn load(&self) -> StoreResult<PosState>;

    /// Persist one mutation; `state` is the post-mutation state
    async fn apply(&self, state: &PosState, change: Mutation<'_>) -> StoreResult<()>;

    /// `"local"` or `"remote"`, for logging and seeding decisions
    fn kind(&self) -> &'static str;
}
