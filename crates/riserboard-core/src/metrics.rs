//! Summary metrics over a list of transactions

use crate::types::Transaction;
use crate::views::MetricCard;
use riserboard_config::{CurrencyConfig, DashboardConfig};
use serde::{Deserialize, Serialize};

/// Reduced figures for the metric cards
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Metrics {
    /// Σ price × quantity
    pub total_revenue: f64,
    /// Σ unit cost × quantity
    pub total_cost: f64,
    pub transaction_count: usize,
    /// (revenue − cost) / revenue × 100, 0 when there is no revenue
    pub margin_percent: f64,
}

/// Reduce transactions into revenue, cost, count and margin
pub fn calculate_metrics(transactions: &[Transaction], cost_ratio: f64) -> Metrics {
    let (total_revenue, total_cost) = transactions.iter().fold((0.0, 0.0), |(rev, cost), tx| {
        (rev + tx.revenue(), cost + tx.total_cost(cost_ratio))
    });

    let margin_percent = if total_revenue > 0.0 {
        (total_revenue - total_cost) / total_revenue * 100.0
    } else {
        0.0
    };

    Metrics {
        total_revenue,
        total_cost,
        transaction_count: transactions.len(),
        margin_percent,
    }
}

impl Metrics {
    /// Margin rounded to the nearest whole percent
    pub fn rounded_margin(&self) -> i64 {
        self.margin_percent.round() as i64
    }

    /// Display cards: revenue, record count, margin
    pub fn cards(&self, labels: &DashboardConfig, currency: &CurrencyConfig) -> Vec<MetricCard> {
        let revenue = riserboard_utils::format_money(
            self.total_revenue,
            &currency.symbol,
            currency.decimal_places as usize,
            &currency.thousands_separator,
        );

        vec![
            MetricCard::new(&labels.revenue_label, revenue),
            MetricCard::new(&labels.count_label, self.transaction_count.to_string()),
            MetricCard::new(&labels.margin_label, format!("{}%", self.rounded_margin())),
        ]
    }
}
