//! Waiter roster API

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/v1/waiters", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list).post(handler::create))
        .route(
            "/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
        .route("/{id}/issues", post(handler::add_issue))
        .route("/{id}/stats", get(handler::stats))
        .route(
            "/{id}/credentials",
            get(handler::get_credentials).put(handler::update_credentials),
        )
}
