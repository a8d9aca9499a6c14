//! Chart aggregations: sales per month and records per status
//!
//! Both series keep first-encountered order. Month labels are not re-sorted
//! into calendar order, and status keys are the raw strings, so `Completed`
//! and `completed` are two slices of the doughnut.

use crate::types::Transaction;
use chrono::Datelike;
use riserboard_config::PaletteConfig;
use serde::{Deserialize, Serialize};

/// One labelled value of a chart series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// Both chart series plus the colors assigned to the status slices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub sales_by_month: Vec<SeriesPoint>,
    pub status_counts: Vec<SeriesPoint>,
    pub status_colors: Vec<String>,
}

/// Add `value` to the point labelled `label`, appending it when new
fn accumulate(points: &mut Vec<SeriesPoint>, label: &str, value: f64) {
    match points.iter_mut().find(|p| p.label == label) {
        Some(point) => point.value += value,
        None => points.push(SeriesPoint {
            label: label.to_string(),
            value,
        }),
    }
}

/// Revenue per month label
///
/// `month_labels` holds twelve labels, January first. Records whose date does
/// not parse are left out.
pub fn sales_by_month(transactions: &[Transaction], month_labels: &[String]) -> Vec<SeriesPoint> {
    let mut points = Vec::new();
    for tx in transactions {
        let Some(date) = tx.date_naive() else {
            log::debug!("Skipping {} in monthly sales: unparseable date {:?}", tx.id, tx.date);
            continue;
        };
        let Some(label) = month_labels.get(date.month0() as usize) else {
            continue;
        };
        accumulate(&mut points, label, tx.revenue());
    }
    points
}

/// Record count per raw status string
pub fn status_counts(transactions: &[Transaction]) -> Vec<SeriesPoint> {
    let mut points = Vec::new();
    for tx in transactions {
        accumulate(&mut points, &tx.status, 1.0);
    }
    points
}

/// Positional doughnut colors: success, pending, cancelled, then `extra` cycled
pub fn status_colors(palette: &PaletteConfig, count: usize) -> Vec<String> {
    let fixed = [&palette.success, &palette.pending, &palette.cancelled];
    (0..count)
        .map(|i| match fixed.get(i) {
            Some(color) => color.to_string(),
            None if palette.extra.is_empty() => palette.secondary.clone(),
            None => palette.extra[(i - fixed.len()) % palette.extra.len()].clone(),
        })
        .collect()
}

/// Aggregate both series for the full dataset
pub fn chart_data(
    transactions: &[Transaction],
    month_labels: &[String],
    palette: &PaletteConfig,
) -> ChartData {
    let sales_by_month = sales_by_month(transactions, month_labels);
    let status_counts = status_counts(transactions);
    let status_colors = status_colors(palette, status_counts.len());
    ChartData {
        sales_by_month,
        status_counts,
        status_colors,
    }
}
