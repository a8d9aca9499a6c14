//! Dashboard routes - metric cards, charts and the transaction table on one page

pub mod api;
pub mod page;

pub use api::api_metrics;
pub use page::{htmx_metrics, page_dashboard, render_dashboard, render_metric_cards};
