//! Dashboard API endpoints - JSON API

use crate::AppState;
use axum::Json;
use riserboard_core::Metrics;

/// Metrics over the whole dataset, search has no effect
pub async fn api_metrics(state: axum::extract::State<AppState>) -> Json<Metrics> {
    let dashboard = state.dashboard.read().await;
    Json(dashboard.metrics())
}
