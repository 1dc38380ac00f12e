//! Bill history handlers

use axum::extract::{Path, Query, State};
use axum::http::header::CONTENT_TYPE;
use axum::response::IntoResponse;
use serde::Deserialize;

use crate::core::ServerState;
use crate::printing::render_receipt;
use crate::utils::time::parse_date;
use shared::models::HistoryEntry;
use shared::{ApiResponse, AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct DateQuery {
    date: Option<String>,
}

/// GET /v1/history[?date=YYYY-MM-DD]
///
/// Newest first; the optional date filters by local calendar day.
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<DateQuery>,
) -> AppResult<ApiResponse<Vec<HistoryEntry>>> {
    let entries = match query.date.as_deref() {
        Some(raw) => {
            let date = parse_date(raw)
                .ok_or_else(|| AppError::invalid(format!("invalid date: {}", raw)))?;
            state.manager.history_by_date(date).await
        }
        None => state.manager.history().await,
    };
    Ok(ApiResponse::ok(entries))
}

/// GET /v1/history/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<HistoryEntry>> {
    let entry = state
        .manager
        .history_entry(&id)
        .await
        .ok_or_else(|| AppError::not_found("history entry"))?;
    Ok(ApiResponse::ok(entry))
}

/// GET /v1/history/{id}/receipt
///
/// Plain-text ticket, no envelope.
pub async fn receipt(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let entry = state
        .manager
        .history_entry(&id)
        .await
        .ok_or_else(|| AppError::not_found("history entry"))?;
    let hotel = state.manager.list_hotels().await.into_iter().next();
    let text = render_receipt(&entry, hotel.as_ref());
    Ok(([(CONTENT_TYPE, "text/plain; charset=utf-8")], text))
}
