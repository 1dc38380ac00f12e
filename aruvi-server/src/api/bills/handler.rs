//! Billing handlers

use axum::Json;
use axum::extract::State;
use validator::Validate;

use crate::core::ServerState;
use shared::models::{BillPrint, HistoryEntry};
use shared::{ApiResponse, AppError, AppResult};

/// POST /v1/bills/print
///
/// Settles the table in one step: snapshot to history, waiter counter,
/// order clear, completion reset. The items and total a client may echo
/// in the payload are ignored; the server bills what it holds. An empty
/// or unknown table is rejected rather than billed at zero.
pub async fn print(
    State(state): State<ServerState>,
    Json(payload): Json<BillPrint>,
) -> AppResult<ApiResponse<HistoryEntry>> {
    payload.validate()?;
    let entry = state
        .manager
        .print_bill(&payload.table_id, payload.waiter_id.as_deref())
        .await?
        .ok_or_else(|| AppError::order_empty(&payload.table_id))?;
    Ok(ApiResponse::ok(entry))
}
