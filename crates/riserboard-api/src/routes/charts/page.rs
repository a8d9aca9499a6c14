//! Chart.js adapter - turns aggregated series into chart configurations
//!
//! The browser only instantiates what the server describes. Every emitted
//! script destroys the charts already bound to the canvases first, so a
//! re-render never stacks a second instance on the same element.

use riserboard_config::{DashboardConfig, PaletteConfig};
use riserboard_core::ChartData;
use serde_json::{json, Value};

pub const SALES_CANVAS_ID: &str = "chart-transactions";
pub const STATUS_CANVAS_ID: &str = "chart-status";

fn labels_and_values(points: &[riserboard_core::SeriesPoint]) -> (Vec<&str>, Vec<f64>) {
    points.iter().map(|p| (p.label.as_str(), p.value)).unzip()
}

/// Bar chart: one dataset, one color, no legend
pub fn sales_chart_config(
    data: &ChartData,
    dashboard: &DashboardConfig,
    palette: &PaletteConfig,
) -> Value {
    let (labels, values) = labels_and_values(&data.sales_by_month);
    json!({
        "type": "bar",
        "data": {
            "labels": labels,
            "datasets": [{
                "label": dashboard.sales_series_label,
                "data": values,
                "backgroundColor": palette.primary,
                "borderRadius": 6
            }]
        },
        "options": {
            "maintainAspectRatio": false,
            "plugins": { "legend": { "display": false } }
        }
    })
}

/// Doughnut chart: one ring, slice colors assigned by position
pub fn status_chart_config(data: &ChartData) -> Value {
    let (labels, values) = labels_and_values(&data.status_counts);
    json!({
        "type": "doughnut",
        "data": {
            "labels": labels,
            "datasets": [{
                "data": values,
                "backgroundColor": data.status_colors,
                "borderWidth": 0
            }]
        },
        "options": {
            "maintainAspectRatio": false,
            "cutout": "70%"
        }
    })
}

/// `<script>` that (re)creates both charts
pub fn render_chart_script(
    data: &ChartData,
    dashboard: &DashboardConfig,
    palette: &PaletteConfig,
) -> String {
    let configs = json!({
        SALES_CANVAS_ID: sales_chart_config(data, dashboard, palette),
        STATUS_CANVAS_ID: status_chart_config(data),
    });
    // A literal "</" inside the JSON would close the script element early
    let configs = configs.to_string().replace("</", "<\\/");

    format!(
        r#"<script>
(function () {{
    if (typeof Chart === 'undefined') return;
    const configs = {};
    for (const id of Object.keys(configs)) {{
        const existing = Chart.getChart(id);
        if (existing) existing.destroy();
        const canvas = document.getElementById(id);
        if (canvas) new Chart(canvas, configs[id]);
    }}
}})();
</script>"#,
        configs
    )
}
