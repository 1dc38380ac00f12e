//! Category API handlers

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use crate::core::ServerState;
use shared::models::{Category, CategoryCreate, CategoryUpdate};
use shared::{ApiResponse, AppError, AppResult};

/// GET /v1/categories
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<Category>>> {
    Ok(ApiResponse::ok(state.manager.list_categories().await))
}

/// GET /v1/categories/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Category>> {
    let category = state
        .manager
        .get_category(&id)
        .await
        .ok_or_else(|| AppError::not_found("category"))?;
    Ok(ApiResponse::ok(category))
}

/// POST /v1/categories
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<CategoryCreate>,
) -> AppResult<ApiResponse<Category>> {
    payload.validate()?;
    Ok(ApiResponse::ok(state.manager.create_category(payload).await?))
}

/// PUT /v1/categories/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<CategoryUpdate>,
) -> AppResult<ApiResponse<Category>> {
    let category = state
        .manager
        .update_category(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found("category"))?;
    Ok(ApiResponse::ok(category))
}

/// DELETE /v1/categories/{id}
///
/// Products referencing the category keep their stale reference.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<bool>> {
    if !state.manager.delete_category(&id).await? {
        return Err(AppError::not_found("category"));
    }
    Ok(ApiResponse::ok(true))
}
