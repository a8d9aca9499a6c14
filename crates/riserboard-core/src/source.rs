//! Where the dataset comes from

use crate::error::{CoreError, CoreResult};
use crate::types::{Transaction, TransactionDocument};
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::Arc;

/// Source reference type
pub type SourceRef = Arc<dyn TransactionSource>;

/// A one-shot provider of the transaction list
#[async_trait]
pub trait TransactionSource: Send + Sync {
    /// Fetch and decode the full list
    async fn fetch(&self) -> CoreResult<Vec<Transaction>>;

    /// Human-readable location, for logs and the summary endpoint
    fn describe(&self) -> String;
}

/// JSON document on the local filesystem
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

/// Decode a `{ "transactions": [...] }` document
pub fn parse_document(content: &str) -> CoreResult<Vec<Transaction>> {
    let document: TransactionDocument = serde_json::from_str(content)?;
    Ok(document.transactions)
}

#[async_trait]
impl TransactionSource for JsonFileSource {
    async fn fetch(&self) -> CoreResult<Vec<Transaction>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CoreError::FileNotFound {
                path: self.path.to_string_lossy().to_string(),
            },
            _ => CoreError::from(e),
        })?;
        parse_document(&content)
    }

    fn describe(&self) -> String {
        self.path.to_string_lossy().to_string()
    }
}

/// Fixed in-memory list, used when the data is already at hand
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    transactions: Vec<Transaction>,
}

impl StaticSource {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }
}

#[async_trait]
impl TransactionSource for StaticSource {
    async fn fetch(&self) -> CoreResult<Vec<Transaction>> {
        Ok(self.transactions.clone())
    }

    fn describe(&self) -> String {
        format!("static ({} records)", self.transactions.len())
    }
}
