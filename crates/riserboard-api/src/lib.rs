//! HTTP API server with HTMX support
//!
//! Routes are organized into modules:
//! - routes::dashboard: Full page and metric cards
//! - routes::transactions: Searchable table, transaction JSON
//! - routes::charts: Bar and doughnut chart script
//! - routes::settings: Configuration display

pub mod error;
pub mod routes;

use axum::{
    routing::{get, post},
    Json, Router,
};
use riserboard_config::Config;
use riserboard_core::{Dashboard, DefaultErrorLogger, ErrorContext, ErrorLogger};
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;

pub use error::ApiError;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<RwLock<Dashboard>>,
    pub config: Config,
}

/// Create the application router
pub fn create_router(state: AppState) -> Router {
    use routes::charts::{api_charts, htmx_chart_script};
    use routes::dashboard::{api_metrics, htmx_metrics, page_dashboard};
    use routes::settings::{api_settings, page_settings};
    use routes::transactions::{
        api_data_document, api_transaction_detail, api_transactions, htmx_transactions_list,
    };

    Router::new()
        // API endpoints
        .route("/api/health", get(health_check))
        .route("/api/summary", get(api_summary))
        .route("/api/metrics", get(api_metrics))
        .route("/api/transactions", get(api_transactions))
        .route("/api/transactions/:id", get(api_transaction_detail))
        .route("/api/charts", get(api_charts))
        .route("/api/settings", get(api_settings))
        .route("/api/reload", post(api_reload))
        .route("/data.json", get(api_data_document))
        // HTMX page routes
        .route("/", get(page_dashboard))
        .route("/dashboard", get(page_dashboard))
        .route("/settings", get(page_settings))
        // HTMX partial routes
        .route("/metrics", get(htmx_metrics))
        .route("/transactions/list", get(htmx_transactions_list))
        .route("/charts/script", get(htmx_chart_script))
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

/// Dataset summary (JSON API)
async fn api_summary(state: axum::extract::State<AppState>) -> String {
    let dashboard = state.dashboard.read().await;
    let summary = dashboard.summary();
    serde_json::to_string(&summary).unwrap_or_default()
}

/// Re-fetch the dataset; the previous list survives a failure
async fn api_reload(state: axum::extract::State<AppState>) -> Json<serde_json::Value> {
    let mut dashboard = state.dashboard.write().await;
    match dashboard.load().await {
        Ok(count) => Json(serde_json::json!({ "success": true, "count": count })),
        Err(e) => {
            let context = ErrorContext::new("reload")
                .with_data("source", serde_json::json!(dashboard.summary().source))
                .with_data("kept_transactions", serde_json::json!(dashboard.transactions().len()));
            DefaultErrorLogger.log_error(&e, &context);
            Json(serde_json::json!({ "success": false, "message": e.to_string() }))
        }
    }
}

// ==================== Template Functions ====================

/// Base HTML template
pub fn base_html(title: &str, content: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="es">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{}</title>
    <script src="https://unpkg.com/htmx.org@1.9.10"></script>
    <script src="https://cdn.tailwindcss.com"></script>
    <script src="https://cdn.jsdelivr.net/npm/chart.js@4.4.1/dist/chart.umd.min.js"></script>
    <style>
        .htmx-indicator {{ opacity: 0; transition: opacity 0.3s; }}
        .htmx-request .htmx-indicator {{ opacity: 1; }}
        .card {{ transition: transform 0.2s; }}
        .card:hover {{ transform: translateY(-2px); }}
        .brand-badge {{ background: #eef2ff; color: #1100ff; padding: 2px 10px; border-radius: 9999px; font-size: 0.75rem; font-weight: 600; }}
        .status-badge {{ padding: 2px 10px; border-radius: 9999px; font-size: 0.75rem; font-weight: 600; background: #f1f5f9; color: #0f0f0f; }}
        .status-completed {{ background: #dcfce7; color: #28a745; }}
        .status-pending {{ background: #fef9c3; color: #a16207; }}
        .status-cancelled {{ background: #fee2e2; color: #b91c1c; }}
        .records:empty::after {{ content: attr(data-empty); display: block; padding: 2rem; text-align: center; color: #6b7280; }}
    </style>
</head>
<body class="bg-gray-50 text-gray-900">
    {}
</body>
</html>"#,
        riserboard_utils::escape_html(title),
        content
    )
}

/// Navigation sidebar
pub fn nav_sidebar(current_path: &str) -> String {
    let links = [("/", "Panel", "📊"), ("/settings", "Configuración", "⚙️")];

    let mut nav = String::from("<div class='bg-white border-r h-screen flex flex-col'><div class='p-4 border-b'><h1 class='text-xl font-bold' style='color:#1100ff'>Riser</h1></div><ul class='flex-1 py-2 space-y-1 px-2'>");

    for (path, label, icon) in &links {
        let is_active = if *path == "/" {
            current_path == "/" || current_path.starts_with("/dashboard")
        } else {
            current_path.starts_with(path)
        };
        let active_class = if is_active {
            "bg-indigo-50 text-indigo-600"
        } else {
            "text-gray-600 hover:bg-gray-50"
        };
        nav.push_str(&format!(
            r#"<li><a href='{}' class='flex items-center gap-2 px-3 py-2 rounded-lg {}'>{}<span>{}</span></a></li>"#,
            path, active_class, icon, label
        ));
    }
    nav.push_str("</ul></div>");
    nav
}

/// Check if request is from HTMX (partial page update)
fn is_htmx_request(headers: &axum::http::HeaderMap) -> bool {
    headers.get("hx-request").is_some()
}

/// Wrap content for full page or HTMX partial
pub fn page_response(
    headers: &axum::http::HeaderMap,
    title: &str,
    current_path: &str,
    inner_content: &str,
) -> String {
    if is_htmx_request(headers) {
        format!(r#"<main class='flex-1 overflow-auto bg-gray-50 p-6'>{}</main>"#, inner_content)
    } else {
        base_html(title, &format!(r#"<div class='flex flex-col h-screen'>
    <div class='flex flex-1 overflow-hidden'>
        <aside class='w-64 flex-shrink-0'>{}</aside>
        <main class='flex-1 overflow-auto bg-gray-50 p-6'>{}</main>
    </div>
</div>"#,
            nav_sidebar(current_path), inner_content))
    }
}

/// Start the HTTP server
///
/// Binds `server.host:server.port` and serves until Ctrl-C.
pub async fn start_server(config: Config, dashboard: Arc<RwLock<Dashboard>>) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState { dashboard, config };

    let router = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Starting Riser dashboard on http://{}", addr);
    log::info!("Available routes:");
    log::info!("  - / (Dashboard)");
    log::info!("  - /settings (Configuration)");
    log::info!("  - /api/* (JSON API endpoints)");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    log::info!("Server stopped gracefully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        log::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    log::info!("Shutdown signal received");
}

// ==================== Tests ====================
