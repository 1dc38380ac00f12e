//! Live table order handlers
//!
//! Table ids are free-form path segments; an unknown table reads as an
//! empty order, so only item-level operations can 404.

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use crate::core::ServerState;
use shared::models::{CompletionUpdate, OrderItemAdd, QuantityUpdate, TableOrder};
use shared::{ApiResponse, AppError, AppResult};

/// GET /v1/orders
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<TableOrder>>> {
    Ok(ApiResponse::ok(state.manager.list_tables().await))
}

/// GET /v1/orders/{table_id}
pub async fn get_by_table(
    State(state): State<ServerState>,
    Path(table_id): Path<String>,
) -> AppResult<ApiResponse<TableOrder>> {
    Ok(ApiResponse::ok(state.manager.table_order(&table_id).await))
}

/// POST /v1/orders/{table_id}/items
pub async fn add_item(
    State(state): State<ServerState>,
    Path(table_id): Path<String>,
    Json(payload): Json<OrderItemAdd>,
) -> AppResult<ApiResponse<TableOrder>> {
    payload.validate()?;
    let view = state.manager.add_item(&table_id, payload.into()).await?;
    Ok(ApiResponse::ok(view))
}

/// PUT /v1/orders/{table_id}/items/{product_id}
///
/// Zero or negative quantity removes the line.
pub async fn set_quantity(
    State(state): State<ServerState>,
    Path((table_id, product_id)): Path<(String, String)>,
    Json(payload): Json<QuantityUpdate>,
) -> AppResult<ApiResponse<TableOrder>> {
    if payload.quantity > i64::from(u32::MAX) {
        return Err(AppError::validation("quantity out of range"));
    }
    let view = state
        .manager
        .set_quantity(&table_id, &product_id, payload.quantity)
        .await?
        .ok_or_else(|| AppError::not_found("order item"))?;
    Ok(ApiResponse::ok(view))
}

/// DELETE /v1/orders/{table_id}/items/{product_id}
pub async fn remove_item(
    State(state): State<ServerState>,
    Path((table_id, product_id)): Path<(String, String)>,
) -> AppResult<ApiResponse<TableOrder>> {
    let view = state
        .manager
        .remove_item(&table_id, &product_id)
        .await?
        .ok_or_else(|| AppError::not_found("order item"))?;
    Ok(ApiResponse::ok(view))
}

/// DELETE /v1/orders/{table_id}
pub async fn clear(
    State(state): State<ServerState>,
    Path(table_id): Path<String>,
) -> AppResult<ApiResponse<bool>> {
    state.manager.clear_order(&table_id).await?;
    Ok(ApiResponse::ok(true))
}

/// PUT /v1/orders/{table_id}/complete
pub async fn set_completion(
    State(state): State<ServerState>,
    Path(table_id): Path<String>,
    Json(payload): Json<CompletionUpdate>,
) -> AppResult<ApiResponse<TableOrder>> {
    let view = state
        .manager
        .set_completion(&table_id, payload.completed)
        .await?;
    Ok(ApiResponse::ok(view))
}
