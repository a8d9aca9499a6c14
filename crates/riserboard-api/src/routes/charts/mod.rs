//! Chart routes - monthly sales bar chart and status doughnut

pub mod api;
pub mod page;

pub use api::{api_charts, htmx_chart_script};
pub use page::{render_chart_script, SALES_CANVAS_ID, STATUS_CANVAS_ID};
