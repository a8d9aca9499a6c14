//! Route modules for the API server
//!
//! - dashboard: full page, metric cards
//! - transactions: table body, search, dataset JSON
//! - charts: Chart.js configurations
//! - settings: Settings page
//!
//! Each module follows a consistent structure:
//! - mod.rs: Module declaration and exports
//! - api.rs: JSON API endpoints and HTMX fragments
//! - page.rs: HTML rendering

pub mod charts;
pub mod dashboard;
pub mod settings;
pub mod transactions;
