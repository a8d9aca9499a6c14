//! View-models handed to the markup layer

use crate::charts::ChartData;
use crate::metrics::Metrics;
use crate::types::Transaction;
use serde::Serialize;

/// One summary card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricCard {
    pub label: String,
    pub value: String,
    /// First character of the label
    pub icon: String,
}

impl MetricCard {
    pub fn new(label: &str, value: String) -> Self {
        Self {
            label: label.to_string(),
            icon: label.chars().next().map(String::from).unwrap_or_default(),
            value,
        }
    }
}

/// One table row, display strings only
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub product: String,
    pub brand: String,
    pub date: String,
    pub amount: String,
    pub quantity: String,
    pub status: String,
    pub status_class: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: tx.id.clone(),
            product: tx.product.clone(),
            brand: tx.brand.clone(),
            date: tx.date.clone(),
            amount: tx.amount.clone(),
            quantity: tx.quantity.to_string(),
            status: tx.status.clone(),
            status_class: tx.status_class(),
        }
    }
}

/// Everything a full dashboard render needs, derived from one state snapshot
///
/// Metrics and charts always describe the whole dataset; only `rows` follow
/// the search query.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub title: String,
    pub loaded: bool,
    pub query: String,
    pub metrics: Metrics,
    pub cards: Vec<MetricCard>,
    pub rows: Vec<TransactionRow>,
    pub charts: ChartData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_card_icon() {
        let card = MetricCard::new("Ventas Totales", "$1.00".to_string());
        assert_eq!(card.icon, "V");

        let card = MetricCard::new("", "0".to_string());
        assert_eq!(card.icon, "");

        let card = MetricCard::new("Éxito", "1".to_string());
        assert_eq!(card.icon, "É");
    }

    #[test]
    fn test_row_from_transaction() {
        let tx = Transaction {
            id: "T1".to_string(),
            product: "Phone".to_string(),
            brand: "Acme".to_string(),
            date: "2024-01-15".to_string(),
            amount: "$100.00".to_string(),
            cost: Some("$80.00".to_string()),
            quantity: 2,
            status: "Completed".to_string(),
        };
        let row = TransactionRow::from(&tx);

        assert_eq!(row.amount, "$100.00");
        assert_eq!(row.quantity, "2");
        assert_eq!(row.status, "Completed");
        assert_eq!(row.status_class, "status-completed");
    }
}
