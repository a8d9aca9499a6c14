//! Transaction routes - searchable table
//!
//! Structure:
//! - api.rs: JSON API and HTMX endpoints
//! - page.rs: table markup

pub mod api;
pub mod page;

pub use api::{
    api_data_document,
    api_transaction_detail,
    api_transactions,
    htmx_transactions_list,
};

pub use page::{render_table_body, render_transactions_panel};
