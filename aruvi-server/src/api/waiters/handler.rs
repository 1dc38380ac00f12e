//! Waiter roster handlers

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use validator::Validate;

use crate::core::ServerState;
use crate::utils::time::{parse_date, today};
use shared::models::{
    IssueCreate, Waiter, WaiterCreate, WaiterCredentials, WaiterStats, WaiterUpdate,
};
use shared::{ApiResponse, AppError, AppResult};

/// GET /v1/waiters
pub async fn list(State(state): State<ServerState>) -> AppResult<ApiResponse<Vec<Waiter>>> {
    Ok(ApiResponse::ok(state.manager.list_waiters().await))
}

/// GET /v1/waiters/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<Waiter>> {
    let waiter = state
        .manager
        .get_waiter(&id)
        .await
        .ok_or_else(|| AppError::not_found("waiter"))?;
    Ok(ApiResponse::ok(waiter))
}

/// POST /v1/waiters
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<WaiterCreate>,
) -> AppResult<ApiResponse<Waiter>> {
    payload.validate()?;
    Ok(ApiResponse::ok(state.manager.create_waiter(payload).await?))
}

/// PUT /v1/waiters/{id}
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<WaiterUpdate>,
) -> AppResult<ApiResponse<Waiter>> {
    payload.validate()?;
    let waiter = state
        .manager
        .update_waiter(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found("waiter"))?;
    Ok(ApiResponse::ok(waiter))
}

/// DELETE /v1/waiters/{id}
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<bool>> {
    if !state.manager.delete_waiter(&id).await? {
        return Err(AppError::not_found("waiter"));
    }
    Ok(ApiResponse::ok(true))
}

/// POST /v1/waiters/{id}/issues
pub async fn add_issue(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<IssueCreate>,
) -> AppResult<ApiResponse<Waiter>> {
    payload.validate()?;
    let waiter = state
        .manager
        .add_waiter_issue(&id, payload.description)
        .await?
        .ok_or_else(|| AppError::not_found("waiter"))?;
    Ok(ApiResponse::ok(waiter))
}

#[derive(Debug, Deserialize)]
pub struct StatsQuery {
    date: Option<String>,
}

/// GET /v1/waiters/{id}/stats[?date=YYYY-MM-DD]
///
/// Defaults to today.
pub async fn stats(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Query(query): Query<StatsQuery>,
) -> AppResult<ApiResponse<WaiterStats>> {
    let date = match query.date.as_deref() {
        Some(raw) => {
            parse_date(raw).ok_or_else(|| AppError::invalid(format!("invalid date: {}", raw)))?
        }
        None => today(),
    };
    let stats = state
        .manager
        .waiter_stats(&id, date)
        .await
        .ok_or_else(|| AppError::not_found("waiter"))?;
    Ok(ApiResponse::ok(stats))
}

/// GET /v1/waiters/{id}/credentials
pub async fn get_credentials(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<WaiterCredentials>> {
    let waiter = state
        .manager
        .get_waiter(&id)
        .await
        .ok_or_else(|| AppError::not_found("waiter"))?;
    let credentials = waiter
        .credentials
        .ok_or_else(|| AppError::not_found("credentials"))?;
    Ok(ApiResponse::ok(credentials))
}

/// PUT /v1/waiters/{id}/credentials
pub async fn update_credentials(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<WaiterCredentials>,
) -> AppResult<ApiResponse<Waiter>> {
    let waiter = state
        .manager
        .update_credentials(&id, payload)
        .await?
        .ok_or_else(|| AppError::not_found("waiter"))?;
    Ok(ApiResponse::ok(waiter))
}
