//! Product API handlers

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use crate::core::ServerState;
use shared::models::{Product, ProductCreate, ProductUpdate};
use shared::{ApiResponse, AppError, AppResult};

/// GET /v1/products
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<Product>>> {
    Ok(ApiResponse::ok(state.manager.list_products().await))
}

/// GET /v1/products/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Product>> {
    let product = state
        .manager
        .get_product(&id)
        .await
        .ok_or_else(|| AppError::not_found("product"))?;
    Ok(ApiResponse::ok(product))
}

/// POST /v1/products
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<ApiResponse<Product>> {
    payload.validate()?;
    Ok(ApiResponse::ok(state.manager.create_product(payload).await?))
}

/// PUT /v1/products/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<ApiResponse<Product>> {
    let product = state
        .manager
        .update_product(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found("product"))?;
    Ok(ApiResponse::ok(product))
}

/// DELETE /v1/products/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<bool>> {
    if !state.manager.delete_product(&id).await? {
        return Err(AppError::not_found("product"));
    }
    Ok(ApiResponse::ok(true))
}
