//! Live table order API

mod handler;

use axum::{
    Router,
    routing::{get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/v1/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route(
            "/{table_id}",
            get(handler::get_by_table).delete(handler::clear),
        )
        .route("/{table_id}/items", post(handler::add_item))
        .route(
            "/{table_id}/items/{product_id}",
            put(handler::set_quantity).delete(handler::remove_item),
        )
        .route("/{table_id}/complete", put(handler::set_completion))
}
