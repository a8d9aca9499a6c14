//! Transactions API endpoints - JSON API and HTMX partial responses
//!
//! Endpoints:
//! - htmx_transactions_list: filtered table body (HTML fragment)
//! - api_transactions: filtered list (JSON)
//! - api_transaction_detail: single record (JSON)
//! - api_data_document: the whole dataset in its input shape (JSON)

use crate::{ApiError, AppState};
use axum::extract::{Path, Query, State};
use axum::Json;
use riserboard_core::{SearchQuery, Transaction, TransactionDocument};
use std::collections::HashMap;

fn search_query(params: &HashMap<String, String>) -> SearchQuery {
    SearchQuery::new(params.get("q").map(|s| s.as_str()).unwrap_or(""))
}

/// HTMX: table body for the current search box value
///
/// Always filters the original list; metrics and charts are left alone.
pub async fn htmx_transactions_list(
    state: State<AppState>,
    params: Query<HashMap<String, String>>,
) -> axum::response::Html<String> {
    let dashboard = state.dashboard.read().await;
    let rows = dashboard.rows(&search_query(&params));
    axum::response::Html(super::page::render_table_body(&rows))
}

/// Filtered transactions (JSON API)
pub async fn api_transactions(
    state: State<AppState>,
    params: Query<HashMap<String, String>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let dashboard = state.dashboard.read().await;
    let response = dashboard.search_response(&search_query(&params));
    Ok(Json(serde_json::to_value(&response)?))
}

/// Single transaction (JSON API)
pub async fn api_transaction_detail(
    state: State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Transaction>, ApiError> {
    let dashboard = state.dashboard.read().await;
    let transaction = dashboard.transaction(&id)?;
    Ok(Json(transaction.clone()))
}

/// The loaded dataset, served where the page would fetch it from
pub async fn api_data_document(state: State<AppState>) -> Json<TransactionDocument> {
    let dashboard = state.dashboard.read().await;
    Json(dashboard.document())
}
