//! Chart endpoints - aggregated series (JSON) and the adapter script (HTMX)

use crate::AppState;
use axum::Json;
use riserboard_core::ChartData;

pub async fn api_charts(state: axum::extract::State<AppState>) -> Json<ChartData> {
    let dashboard = state.dashboard.read().await;
    Json(dashboard.chart_data())
}

/// HTMX: chart script for the current dataset
pub async fn htmx_chart_script(
    state: axum::extract::State<AppState>,
) -> axum::response::Html<String> {
    let dashboard = state.dashboard.read().await;
    let config = dashboard.config();
    axum::response::Html(super::page::render_chart_script(
        &dashboard.chart_data(),
        &config.dashboard,
        &config.palette,
    ))
}
