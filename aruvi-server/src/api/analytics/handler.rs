//! Sales analytics handlers
//!
//! Figures are computed on demand from the in-memory bill history; every
//! endpoint takes an optional `date` (local calendar day, default today).

use axum::extract::{Query, State};
use chrono::NaiveDate;
use serde::Deserialize;

use crate::analytics;
use crate::core::ServerState;
use crate::utils::time::{parse_date, today};
use shared::models::{CategorySales, Product, ProductSales, SalesSummary};
use shared::{ApiResponse, AppError, AppResult};

const DEFAULT_TOP_LIMIT: usize = 10;

#[derive(Debug, Deserialize)]
pub struct AnalyticsQuery {
    date: Option<String>,
    limit: Option<usize>,
}

fn resolve_date(query: &AnalyticsQuery) -> Result<NaiveDate, AppError> {
    match query.date.as_deref() {
        Some(raw) => {
            parse_date(raw).ok_or_else(|| AppError::invalid(format!("invalid date: {}", raw)))
        }
        None => Ok(today()),
    }
}

/// GET /v1/analytics/sales
pub async fn sales(
    State(state): State<ServerState>,
    Query(query): Query<AnalyticsQuery>,
) -> AppResult<ApiResponse<SalesSummary>> {
    let date = resolve_date(&query)?;
    let history = state.manager.history().await;
    Ok(ApiResponse::ok(analytics::sales_summary(&history, date)))
}

/// GET /v1/analytics/products/top
pub async fn top_products(
    State(state): State<ServerState>,
    Query(query): Query<AnalyticsQuery>,
) -> AppResult<ApiResponse<Vec<ProductSales>>> {
    let date = resolve_date(&query)?;
    let limit = query.limit.unwrap_or(DEFAULT_TOP_LIMIT);
    let history = state.manager.history().await;
    let mut sales = analytics::product_sales(&history, date);
    sales.truncate(limit);
    Ok(ApiResponse::ok(sales))
}

/// GET /v1/analytics/products/non-selling
pub async fn non_selling(
    State(state): State<ServerState>,
    Query(query): Query<AnalyticsQuery>,
) -> AppResult<ApiResponse<Vec<Product>>> {
    let date = resolve_date(&query)?;
    let history = state.manager.history().await;
    let products = state.manager.list_products().await;
    Ok(ApiResponse::ok(analytics::non_selling_products(
        &history, &products, date,
    )))
}

/// GET /v1/analytics/categories
pub async fn categories(
    State(state): State<ServerState>,
    Query(query): Query<AnalyticsQuery>,
) -> AppResult<ApiResponse<Vec<CategorySales>>> {
    let date = resolve_date(&query)?;
    let history = state.manager.history().await;
    let products = state.manager.list_products().await;
    let categories = state.manager.list_categories().await;
    Ok(ApiResponse::ok(analytics::category_sales(
        &history,
        &products,
        &categories,
        date,
    )))
}
