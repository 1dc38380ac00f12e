//! Plain-text receipt rendering

mod receipt;

pub use receipt::{render_receipt, TicketBuilder};
