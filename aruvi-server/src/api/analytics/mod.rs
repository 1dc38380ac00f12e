//! Sales analytics API

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/v1/analytics", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/sales", get(handler::sales))
        .route("/products/top", get(handler::top_products))
        .route("/products/non-selling", get(handler::non_selling))
        .route("/categories", get(handler::categories))
}
