//! Dataset types: the transaction record and its input document

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

static CURRENCY_CHARS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[$,]").unwrap());

static NUMBER_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?").unwrap());

/// Parse a currency-formatted string such as `$1,234.00`
///
/// Strips every `$` and `,`, then reads the longest leading decimal number,
/// so trailing garbage is ignored (`"12.5 USD"` is 12.5). Returns `None` when
/// no number leads the string.
pub fn parse_money(raw: &str) -> Option<f64> {
    let cleaned = CURRENCY_CHARS.replace_all(raw, "");
    let cleaned = cleaned.trim();
    let number = NUMBER_PREFIX.find(cleaned)?;
    number.as_str().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a calendar date in one of the layouts found in exported sales data
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for layout in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, layout) {
            return Some(dt.date());
        }
    }
    NaiveDate::parse_from_str(raw, "%Y/%m/%d").ok()
}

/// One sales record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    /// Product display name
    #[serde(default, deserialize_with = "lenient_string")]
    pub product: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub brand: String,
    /// Sale date, normally `YYYY-MM-DD`
    #[serde(default, deserialize_with = "lenient_string")]
    pub date: String,
    /// Currency-formatted unit price, e.g. `$1,234.00`
    #[serde(default, deserialize_with = "lenient_string")]
    pub amount: String,
    /// Currency-formatted unit cost
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_optional_string"
    )]
    pub cost: Option<String>,
    /// Units sold
    #[serde(default, deserialize_with = "lenient_quantity")]
    pub quantity: i64,
    /// Lifecycle label (completed, pending, cancelled...)
    #[serde(default, deserialize_with = "lenient_string")]
    pub status: String,
}

impl Transaction {
    /// Unit price, 0 when `amount` does not parse
    pub fn price(&self) -> f64 {
        parse_money(&self.amount).unwrap_or(0.0)
    }

    /// Unit cost, `cost_ratio` of the price when `cost` is absent or unparseable
    pub fn unit_cost(&self, cost_ratio: f64) -> f64 {
        self.cost
            .as_deref()
            .and_then(parse_money)
            .unwrap_or_else(|| self.price() * cost_ratio)
    }

    /// Price times quantity
    pub fn revenue(&self) -> f64 {
        self.price() * self.quantity as f64
    }

    /// Unit cost times quantity
    pub fn total_cost(&self, cost_ratio: f64) -> f64 {
        self.unit_cost(cost_ratio) * self.quantity as f64
    }

    /// Sale date as NaiveDate
    pub fn date_naive(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }

    /// Style class for the status badge (`status-completed`)
    pub fn status_class(&self) -> String {
        format!("status-{}", riserboard_utils::css_token(&self.status))
    }
}

/// The dataset as stored on disk: `{ "transactions": [...] }`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionDocument {
    pub transactions: Vec<Transaction>,
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_optional_string(deserializer)?.unwrap_or_default())
}

fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

fn lenient_quantity<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse::<i64>().unwrap_or(0),
        _ => 0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Transaction {
        Transaction {
            id: "T1".to_string(),
            product: "Phone".to_string(),
            brand: "Acme".to_string(),
            date: "2024-01-15".to_string(),
            amount: "$100.00".to_string(),
            cost: None,
            quantity: 2,
            status: "Completed".to_string(),
        }
    }

    #[test]
    fn test_parse_money() {
        assert_eq!(parse_money("$1,234.00"), Some(1234.0));
        assert_eq!(parse_money("100"), Some(100.0));
        assert_eq!(parse_money(" $ 80.50 "), Some(80.5));
        assert_eq!(parse_money("12.5 USD"), Some(12.5));
        assert_eq!(parse_money("$1,000,000"), Some(1_000_000.0));
        assert_eq!(parse_money(""), None);
        assert_eq!(parse_money("N/A"), None);
        assert_eq!(parse_money("$"), None);
    }

    #[test]
    fn test_parse_date_layouts() {
        let jan = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        assert_eq!(parse_date("2024-01-15"), Some(jan));
        assert_eq!(parse_date("2024-01-15T10:30:00"), Some(jan));
        assert_eq!(parse_date("2024-01-15T10:30:00Z"), Some(jan));
        assert_eq!(parse_date("2024/01/15"), Some(jan));
        assert_eq!(parse_date("yesterday"), None);
        assert_eq!(parse_date("2024-13-01"), None);
    }

    #[test]
    fn test_price_and_cost_fallbacks() {
        let mut tx = sample();
        assert_eq!(tx.price(), 100.0);
        assert_eq!(tx.unit_cost(0.5), 50.0);
        assert_eq!(tx.revenue(), 200.0);
        assert_eq!(tx.total_cost(0.5), 100.0);

        tx.cost = Some("$80.00".to_string());
        assert_eq!(tx.unit_cost(0.5), 80.0);

        tx.cost = Some("unknown".to_string());
        assert_eq!(tx.unit_cost(0.5), 50.0);

        tx.amount = "free".to_string();
        assert_eq!(tx.price(), 0.0);
        assert_eq!(tx.revenue(), 0.0);
    }

    #[test]
    fn test_status_class() {
        let mut tx = sample();
        assert_eq!(tx.status_class(), "status-completed");
        tx.status = "PENDING".to_string();
        assert_eq!(tx.status_class(), "status-pending");
    }

    #[test]
    fn test_document_deserialization() {
        let json = r#"{"transactions": [
            {"id": "T1", "product": "Phone", "brand": "Acme", "date": "2024-01-15",
             "amount": "$100.00", "quantity": 2, "status": "Completed"},
            {"id": "T2", "product": "Case", "brand": "Acme", "date": "2024-02-01",
             "amount": 25, "cost": "$10.00", "quantity": "3", "status": "Pending"}
        ]}"#;
        let doc: TransactionDocument = serde_json::from_str(json).unwrap();

        assert_eq!(doc.transactions.len(), 2);
        assert_eq!(doc.transactions[0], sample());
        assert_eq!(doc.transactions[1].amount, "25");
        assert_eq!(doc.transactions[1].cost.as_deref(), Some("$10.00"));
        assert_eq!(doc.transactions[1].quantity, 3);
    }

    #[test]
    fn test_missing_fields_degrade_to_blank() {
        let doc: TransactionDocument =
            serde_json::from_str(r#"{"transactions": [{"id": "T9", "cost": null}]}"#).unwrap();
        let tx = &doc.transactions[0];

        assert_eq!(tx.id, "T9");
        assert_eq!(tx.product, "");
        assert_eq!(tx.cost, None);
        assert_eq!(tx.quantity, 0);
        assert_eq!(tx.revenue(), 0.0);
    }

    #[test]
    fn test_missing_transactions_field_is_an_error() {
        assert!(serde_json::from_str::<TransactionDocument>(r#"{"items": []}"#).is_err());
    }
}
