//! Dataset loading, metrics and aggregation for the sales dashboard
//!
//! The [`Dashboard`] owns the as-loaded ("original") transaction list and
//! derives every view from it; nothing here mutates a record after load.

pub mod charts;
pub mod error;
pub mod metrics;
pub mod search;
pub mod source;
pub mod types;
pub mod views;

use riserboard_config::Config;
use serde::{Deserialize, Serialize};

pub use charts::{ChartData, SeriesPoint};
pub use error::{
    CoreError, CoreResult, DefaultErrorLogger, ErrorContext, ErrorLogger, ErrorSeverity,
};
pub use metrics::{calculate_metrics, Metrics};
pub use search::{filter_transactions, SearchQuery};
pub use source::{JsonFileSource, SourceRef, StaticSource, TransactionSource};
pub use types::{parse_money, Transaction, TransactionDocument};
pub use views::{DashboardView, MetricCard, TransactionRow};

/// Dataset summary for the JSON API
#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardSummary {
    pub loaded: bool,
    pub source: String,
    pub total_transactions: usize,
}

/// Filtered list response for the JSON API
#[derive(Debug, Serialize)]
pub struct TransactionsResponse<'a> {
    pub query: String,
    pub total_count: usize,
    pub transactions: Vec<&'a Transaction>,
}

/// Application state: configuration, data source and the original list
pub struct Dashboard {
    config: Config,
    source: SourceRef,
    transactions: Vec<Transaction>,
    loaded: bool,
}

impl Dashboard {
    /// Create an empty dashboard; call [`Dashboard::load`] to populate it
    pub fn new(config: Config, source: SourceRef) -> Self {
        Self {
            config,
            source,
            transactions: Vec::new(),
            loaded: false,
        }
    }

    /// Fetch the dataset once and replace the original list
    ///
    /// On failure the previous list (possibly empty) is kept.
    pub async fn load(&mut self) -> CoreResult<usize> {
        let transactions = self.source.fetch().await?;
        let count = transactions.len();
        self.transactions = transactions;
        self.loaded = true;
        log::info!("Loaded {} transactions from {}", count, self.source.describe());
        Ok(count)
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The original, unfiltered list
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Look up one record by id; fails with `NotLoaded` before the first successful load
    pub fn transaction(&self, id: &str) -> CoreResult<&Transaction> {
        if !self.loaded {
            return Err(CoreError::NotLoaded);
        }
        self.transactions
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| CoreError::TransactionNotFound { id: id.to_string() })
    }

    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary {
            loaded: self.loaded,
            source: self.source.describe(),
            total_transactions: self.transactions.len(),
        }
    }

    /// Records matching `query`, always filtered from the original list
    pub fn search(&self, query: &SearchQuery) -> Vec<&Transaction> {
        let found = filter_transactions(&self.transactions, query);
        log::debug!(
            "Search {:?} matched {} of {}",
            query.term(),
            found.len(),
            self.transactions.len()
        );
        found
    }

    pub fn search_response(&self, query: &SearchQuery) -> TransactionsResponse<'_> {
        let transactions = self.search(query);
        TransactionsResponse {
            query: query.term().to_string(),
            total_count: transactions.len(),
            transactions,
        }
    }

    /// Table rows for `query`
    pub fn rows(&self, query: &SearchQuery) -> Vec<TransactionRow> {
        self.search(query).into_iter().map(TransactionRow::from).collect()
    }

    pub fn metrics(&self) -> Metrics {
        calculate_metrics(&self.transactions, self.config.dashboard.default_cost_ratio)
    }

    pub fn cards(&self) -> Vec<MetricCard> {
        self.metrics().cards(&self.config.dashboard, &self.config.currency)
    }

    pub fn chart_data(&self) -> ChartData {
        charts::chart_data(
            &self.transactions,
            &self.config.dashboard.month_labels,
            &self.config.palette,
        )
    }

    /// Derive the complete view for one render
    pub fn view(&self, query: &SearchQuery) -> DashboardView {
        let metrics = self.metrics();
        DashboardView {
            title: self.config.dashboard.title.clone(),
            loaded: self.loaded,
            query: query.term().to_string(),
            cards: metrics.cards(&self.config.dashboard, &self.config.currency),
            metrics,
            rows: self.rows(query),
            charts: self.chart_data(),
        }
    }

    /// The dataset in its input shape
    pub fn document(&self) -> TransactionDocument {
        TransactionDocument {
            transactions: self.transactions.clone(),
        }
    }
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn tx(
        id: &str,
        product: &str,
        brand: &str,
        amount: &str,
        quantity: i64,
        status: &str,
    ) -> Transaction {
        Transaction {
            id: id.to_string(),
            product: product.to_string(),
            brand: brand.to_string(),
            date: "2024-01-15".to_string(),
            amount: amount.to_string(),
            cost: None,
            quantity,
            status: status.to_string(),
        }
    }

    fn dashboard(transactions: Vec<Transaction>) -> Dashboard {
        Dashboard::new(Config::default(), Arc::new(StaticSource::new(transactions)))
    }

    /// Source that always fails, for the error path
    struct BrokenSource;

    #[async_trait::async_trait]
    impl TransactionSource for BrokenSource {
        async fn fetch(&self) -> CoreResult<Vec<Transaction>> {
            Err(CoreError::ParseError { message: "expected value".to_string() })
        }

        fn describe(&self) -> String {
            "broken".to_string()
        }
    }

    /// Serves its list once, then fails every later fetch
    struct FailsAfterFirstFetch {
        transactions: Vec<Transaction>,
        fetches: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl TransactionSource for FailsAfterFirstFetch {
        async fn fetch(&self) -> CoreResult<Vec<Transaction>> {
            if self.fetches.fetch_add(1, Ordering::SeqCst) == 0 {
                Ok(self.transactions.clone())
            } else {
                Err(CoreError::ParseError { message: "truncated document".to_string() })
            }
        }

        fn describe(&self) -> String {
            "fails-after-first".to_string()
        }
    }

    #[tokio::test]
    async fn test_empty_until_loaded() {
        let mut dash = dashboard(vec![tx("T1", "Phone", "Acme", "$100.00", 2, "Completed")]);
        assert!(!dash.is_loaded());
        assert!(dash.transactions().is_empty());
        assert!(dash.search(&SearchQuery::new("")).is_empty());

        assert_eq!(dash.load().await.unwrap(), 1);
        assert!(dash.is_loaded());
        assert_eq!(dash.summary().total_transactions, 1);
    }

    #[tokio::test]
    async fn test_failed_load_keeps_state() {
        let mut dash = Dashboard::new(Config::default(), Arc::new(BrokenSource));
        let err = dash.load().await.unwrap_err();

        assert_eq!(err.code(), error::ErrorCode::ParseError);
        assert!(!dash.is_loaded());
        assert_eq!(dash.metrics(), Metrics::default());
        assert!(dash.view(&SearchQuery::default()).rows.is_empty());
    }

    #[tokio::test]
    async fn test_view_scenario() {
        let mut dash = dashboard(vec![tx("T1", "Phone", "Acme", "$100.00", 2, "Completed")]);
        dash.load().await.unwrap();

        let view = dash.view(&SearchQuery::new(""));
        assert_eq!(view.cards[0].value, "$200.00");
        assert_eq!(view.cards[1].value, "1");
        assert_eq!(view.cards[2].value, "50%");
        assert_eq!(view.rows.len(), 1);
        assert_eq!(view.charts.sales_by_month[0].label, "Ene");
        assert_eq!(view.charts.sales_by_month[0].value, 200.0);
        assert_eq!(view.charts.status_counts[0].label, "Completed");

        assert_eq!(dash.search(&SearchQuery::new("acme")).len(), 1);
        assert!(dash.search(&SearchQuery::new("xyz")).is_empty());
    }

    #[tokio::test]
    async fn test_filter_does_not_touch_metrics_or_charts() {
        let mut dash = dashboard(vec![
            tx("T1", "Phone", "Acme", "$100.00", 2, "Completed"),
            tx("T2", "Tablet", "Globex", "$300.00", 1, "Pending"),
        ]);
        dash.load().await.unwrap();

        let full = dash.view(&SearchQuery::new(""));
        let filtered = dash.view(&SearchQuery::new("globex"));

        assert_eq!(filtered.rows.len(), 1);
        assert_eq!(filtered.rows[0].id, "T2");
        assert_eq!(filtered.cards, full.cards);
        assert_eq!(filtered.charts, full.charts);
        assert_eq!(filtered.metrics.transaction_count, 2);
    }

    #[tokio::test]
    async fn test_search_always_starts_from_original() {
        let mut dash = dashboard(vec![
            tx("T1", "Phone", "Acme", "$100.00", 2, "Completed"),
            tx("T2", "Tablet", "Globex", "$300.00", 1, "Pending"),
        ]);
        dash.load().await.unwrap();

        assert_eq!(dash.rows(&SearchQuery::new("phone")).len(), 1);
        // Narrow then widen: the second query must see both records again
        assert_eq!(dash.rows(&SearchQuery::new("t")).len(), 2);
        assert_eq!(dash.transactions().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_reload_keeps_previous_list() {
        let source = FailsAfterFirstFetch {
            transactions: vec![tx("T1", "Phone", "Acme", "$100.00", 2, "Completed")],
            fetches: AtomicUsize::new(0),
        };
        let mut dash = Dashboard::new(Config::default(), Arc::new(source));
        dash.load().await.unwrap();
        let before = dash.metrics();

        let err = dash.load().await.unwrap_err();
        assert_eq!(err.code(), error::ErrorCode::ParseError);
        assert!(dash.is_loaded());
        assert_eq!(dash.transactions().len(), 1);
        assert_eq!(dash.transaction("T1").unwrap().product, "Phone");
        assert_eq!(dash.metrics(), before);
    }

    #[tokio::test]
    async fn test_transaction_lookup() {
        let mut dash = dashboard(vec![tx("T1", "Phone", "Acme", "$100.00", 2, "Completed")]);
        assert!(matches!(dash.transaction("T1"), Err(CoreError::NotLoaded)));

        dash.load().await.unwrap();

        assert_eq!(dash.transaction("T1").unwrap().product, "Phone");
        assert!(matches!(
            dash.transaction("T404"),
            Err(CoreError::TransactionNotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_reload_replaces_whole_list() {
        let mut dash = dashboard(vec![tx("T1", "Phone", "Acme", "$100.00", 2, "Completed")]);
        dash.load().await.unwrap();
        dash.load().await.unwrap();

        assert_eq!(dash.transactions().len(), 1);
        assert_eq!(dash.document().transactions.len(), 1);
    }
}
