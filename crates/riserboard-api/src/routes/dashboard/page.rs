//! Dashboard page rendering - Full page and metric card fragment

use crate::routes::charts::{render_chart_script, SALES_CANVAS_ID, STATUS_CANVAS_ID};
use crate::routes::transactions::render_transactions_panel;
use crate::AppState;
use riserboard_config::Config;
use riserboard_core::{DashboardView, MetricCard, SearchQuery};
use riserboard_utils::escape_html;
use std::collections::HashMap;

/// Cards in the order given, accent color from the palette
pub fn render_metric_cards(cards: &[MetricCard], accent: &str) -> String {
    cards
        .iter()
        .map(|card| {
            format!(
                r#"<div class='card bg-white rounded-xl shadow-sm p-6 flex items-center gap-4'>
    <div class='w-12 h-12 rounded-lg flex items-center justify-center text-white text-xl font-bold' style='background:{}'>{}</div>
    <div><p class='text-sm text-gray-500'>{}</p><p class='text-2xl font-bold'>{}</p></div>
</div>"#,
                escape_html(accent),
                escape_html(&card.icon),
                escape_html(&card.label),
                escape_html(&card.value)
            )
        })
        .collect()
}

fn chart_panel(title: &str, canvas_id: &str) -> String {
    format!(
        r#"<div class='bg-white rounded-xl shadow-sm p-6'>
    <h3 class='text-lg font-semibold mb-4'>{}</h3>
    <div style='position:relative; height:280px'><canvas id='{}'></canvas></div>
</div>"#,
        title, canvas_id
    )
}

/// Inner content of the dashboard for one view snapshot
pub fn render_dashboard(view: &DashboardView, config: &Config) -> String {
    let empty_notice = if view.loaded {
        String::new()
    } else {
        "<div class='bg-yellow-50 border border-yellow-200 text-yellow-700 rounded-lg p-4 mb-6'>No se pudieron cargar los datos</div>".to_string()
    };

    format!(
        r#"<div class='mb-6'><h2 class='text-2xl font-bold'>{}</h2></div>
{}
<div id='metricsContainer' class='grid grid-cols-1 md:grid-cols-3 gap-4 mb-6'>{}</div>
<div class='grid grid-cols-1 lg:grid-cols-2 gap-6 mb-6'>
    {}
    {}
</div>
{}
{}"#,
        escape_html(&view.title),
        empty_notice,
        render_metric_cards(&view.cards, &config.palette.primary),
        chart_panel("Ventas por mes", SALES_CANVAS_ID),
        chart_panel("Estado de transacciones", STATUS_CANVAS_ID),
        render_transactions_panel(&view.rows, &view.query),
        render_chart_script(&view.charts, &config.dashboard, &config.palette)
    )
}

pub async fn page_dashboard(
    state: axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
    params: axum::extract::Query<HashMap<String, String>>,
) -> axum::response::Html<String> {
    let query = SearchQuery::new(params.get("q").map(|s| s.as_str()).unwrap_or(""));
    let dashboard = state.dashboard.read().await;
    let view = dashboard.view(&query);
    let inner_content = render_dashboard(&view, dashboard.config());

    axum::response::Html(crate::page_response(&headers, &view.title, "/dashboard", &inner_content))
}

/// HTMX: metric cards only
pub async fn htmx_metrics(state: axum::extract::State<AppState>) -> axum::response::Html<String> {
    let dashboard = state.dashboard.read().await;
    let accent = &dashboard.config().palette.primary;
    axum::response::Html(render_metric_cards(&dashboard.cards(), accent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use riserboard_core::{ChartData, Metrics, TransactionRow};

    fn view(loaded: bool) -> DashboardView {
        DashboardView {
            title: "Riser Dashboard".to_string(),
            loaded,
            query: String::new(),
            metrics: Metrics::default(),
            cards: vec![
                MetricCard::new("Ventas Totales", "$200.00".to_string()),
                MetricCard::new("Modelos Disponibles", "1".to_string()),
                MetricCard::new("Margen de Reventa Promedio", "50%".to_string()),
            ],
            rows: vec![TransactionRow {
                id: "T1".to_string(),
                product: "Phone".to_string(),
                brand: "Acme".to_string(),
                date: "2024-01-15".to_string(),
                amount: "$100.00".to_string(),
                quantity: "2".to_string(),
                status: "Completed".to_string(),
                status_class: "status-completed".to_string(),
            }],
            charts: ChartData {
                sales_by_month: vec![],
                status_counts: vec![],
                status_colors: vec![],
            },
        }
    }

    #[test]
    fn test_metric_cards_in_order() {
        let html = render_metric_cards(&view(true).cards, "#1100ff");
        assert_eq!(html.matches("class='card ").count(), 3);
        let revenue = html.find("Ventas Totales").unwrap();
        let count = html.find("Modelos Disponibles").unwrap();
        let margin = html.find("Margen de Reventa Promedio").unwrap();
        assert!(revenue < count && count < margin);
        assert!(html.contains(">V</div>"));
        assert!(html.contains("$200.00"));
    }

    #[test]
    fn test_dashboard_layout() {
        let html = render_dashboard(&view(true), &Config::default());
        assert!(html.contains("id='metricsContainer'"));
        assert!(html.contains("<canvas id='chart-transactions'>"));
        assert!(html.contains("<canvas id='chart-status'>"));
        assert!(html.contains("<tbody id='tableBody'"));
        assert!(html.contains("id='globalSearch'"));
        assert!(!html.contains("No se pudieron cargar"));
    }

    #[test]
    fn test_dashboard_empty_state() {
        let mut empty = view(false);
        empty.rows.clear();
        let html = render_dashboard(&empty, &Config::default());
        assert!(html.contains("No se pudieron cargar"));
        assert!(html.contains("data-empty='Sin transacciones'></tbody>"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = Config::default();
        assert_eq!(render_dashboard(&view(true), &config), render_dashboard(&view(true), &config));
    }
}
