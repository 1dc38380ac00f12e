//! Aruvi POS admin backend
//!
//! Restaurant admin console backend: per-table orders, product/category
//! catalog, waiter roster, bill history, and sales analytics, persisted
//! either to local JSON storage or to a remote REST backend.
//!
//! # Module structure
//!
//! ```text
//! aruvi-server/src/
//! ├── core/        # config, state, server, background tasks
//! ├── manager/     # order/billing state manager (the mutation surface)
//! ├── store/       # persistence port: local JSON / remote REST
//! ├── analytics/   # stateless read-side aggregation
//! ├── printing/    # text receipt rendering
//! ├── api/         # /v1 HTTP routes and handlers
//! └── utils/       # logging, time helpers
//! ```

pub mod analytics;
pub mod api;
pub mod core;
pub mod manager;
pub mod printing;
pub mod seed;
pub mod store;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState, StoreBackend};
pub use manager::{PosState, StateManager};
pub use store::{LocalStore, RemoteStore, StateStore};

// Re-export unified error types from shared
pub use shared::{ApiResponse, AppError, AppResult, ErrorCode};

pub use utils::logger::init_logger;

/// Load `.env` and initialize logging; call once at process start
pub fn setup_environment() {
    dotenv::dotenv().ok();
    init_logger();
}

pub fn print_banner() {
    println!(
        r#"
    ___                  _
   /   |  _______  ___  (_)
  / /| | / ___/ / / / | / /
 / ___ |/ /  / /_/ /| |/ /
/_/  |_/_/   \__,_/ |___/   POS
    "#
    );
}
