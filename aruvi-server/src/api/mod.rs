//! HTTP API routes
//!
//! Everything is served under `/v1` except the bare `/health` probe.
//! Each resource module exposes a `router()` that nests its own prefix;
//! [`build_app`] merges them and applies the middleware stack.

pub mod analytics;
pub mod bills;
pub mod categories;
pub mod health;
pub mod history;
pub mod hotels;
pub mod orders;
pub mod products;
pub mod waiters;

use axum::Router;
use axum::http::Request;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;

use crate::core::ServerState;

#[derive(Clone, Default)]
struct MakeRequestUuid;

impl MakeRequestId for MakeRequestUuid {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = uuid::Uuid::new_v4().to_string();
        id.parse().ok().map(RequestId::new)
    }
}

/// Build the router without state (tests attach their own)
pub fn build_router() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(products::router())
        .merge(categories::router())
        .merge(orders::router())
        .merge(bills::router())
        .merge(history::router())
        .merge(waiters::router())
        .merge(hotels::router())
        .merge(analytics::router())
}

/// Build the full application with middleware and state
pub fn build_app(state: ServerState) -> Router {
    build_router()
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
