//! Billing API

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/v1/bills", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/print", post(handler::print))
}
