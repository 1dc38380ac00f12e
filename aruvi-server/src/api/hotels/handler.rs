//! Shop profile handlers
//!
//! The first profile drives the generated table set; creating more is
//! allowed but only the first one is consulted.

use axum::Json;
use axum::extract::{Path, State};
use validator::Validate;

use crate::core::ServerState;
use shared::models::{Hotel, HotelCreate, HotelUpdate};
use shared::{ApiResponse, AppError, AppResult};

/// GET /v1/hotels
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<Hotel>>> {
    Ok(ApiResponse::ok(state.manager.list_hotels().await))
}

/// GET /v1/hotels/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Hotel>> {
    let hotel = state
        .manager
        .get_hotel(&id)
        .await
        .ok_or_else(|| AppError::not_found("hotel"))?;
    Ok(ApiResponse::ok(hotel))
}

/// POST /v1/hotels
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<HotelCreate>,
) -> AppResult<ApiResponse<Hotel>> {
    payload.validate()?;
    Ok(ApiResponse::ok(state.manager.create_hotel(payload).await?))
}

/// PUT /v1/hotels/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<HotelUpdate>,
) -> AppResult<ApiResponse<Hotel>> {
    payload.validate()?;
    let hotel = state
        .manager
        .update_hotel(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found("hotel"))?;
    Ok(ApiResponse::ok(hotel))
}

/// DELETE /v1/hotels/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<bool>> {
    if !state.manager.delete_hotel(&id).await? {
        return Err(AppError::not_found("hotel"));
    }
    Ok(ApiResponse::ok(true))
}
