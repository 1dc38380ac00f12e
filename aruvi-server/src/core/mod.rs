//! Core server plumbing: configuration, state, HTTP server, background tasks

mod config;
mod error;
mod server;
mod state;
mod tasks;

pub use config::{Config, StoreBackend};
pub use error::{Result, ServerError};
pub use server::Server;
pub use state::ServerState;
pub use tasks::{BackgroundTasks, TaskKind};
