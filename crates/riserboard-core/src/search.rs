//! Free-text search over product, id and brand

use crate::types::Transaction;

/// A normalized search term: trimmed and lower-cased
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchQuery {
    term: String,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            term: raw.trim().to_lowercase(),
        }
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// An empty query matches every record
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    /// Case-insensitive substring match on product, id or brand
    pub fn matches(&self, tx: &Transaction) -> bool {
        [&tx.product, &tx.id, &tx.brand]
            .iter()
            .any(|field| field.to_lowercase().contains(&self.term))
    }
}

/// Filter the original list, keeping its order
pub fn filter_transactions<'a>(
    original: &'a [Transaction],
    query: &SearchQuery,
) -> Vec<&'a Transaction> {
    original.iter().filter(|tx| query.matches(tx)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(id: &str, product: &str, brand: &str) -> Transaction {
        Transaction {
            id: id.to_string(),
            product: product.to_string(),
            brand: brand.to_string(),
            date: "2024-01-15".to_string(),
            amount: "$100.00".to_string(),
            cost: None,
            quantity: 1,
            status: "Completed".to_string(),
        }
    }

    fn dataset() -> Vec<Transaction> {
        vec![
            tx("T1", "Phone", "Acme"),
            tx("T2", "Tablet", "Globex"),
            tx("ACME-3", "Acme Phone Case", "Acme"),
        ]
    }

    fn ids(found: &[&Transaction]) -> Vec<String> {
        found.iter().map(|t| t.id.clone()).collect()
    }

    fn search(data: &[Transaction], raw: &str) -> Vec<String> {
        ids(&filter_transactions(data, &SearchQuery::new(raw)))
    }

    #[test]
    fn test_query_normalization() {
        assert_eq!(SearchQuery::new("  AcMe ").term(), "acme");
        assert!(SearchQuery::new(" \t ").is_empty());
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let data = dataset();
        assert_eq!(search(&data, ""), vec!["T1", "T2", "ACME-3"]);
        assert_eq!(search(&data, "   "), vec!["T1", "T2", "ACME-3"]);
    }

    #[test]
    fn test_case_insensitive_substring_on_any_field() {
        let data = dataset();
        // brand
        assert_eq!(search(&data, "GLOB"), vec!["T2"]);
        // product
        assert_eq!(search(&data, "phone"), vec!["T1", "ACME-3"]);
        // id
        assert_eq!(search(&data, "t2"), vec!["T2"]);
    }

    #[test]
    fn test_record_matching_several_fields_appears_once() {
        let data = dataset();
        let found = filter_transactions(&data, &SearchQuery::new("acme"));
        assert_eq!(ids(&found), vec!["T1", "ACME-3"]);
    }

    #[test]
    fn test_no_match() {
        let data = vec![tx("T1", "Phone", "Acme")];
        assert_eq!(filter_transactions(&data, &SearchQuery::new("acme")).len(), 1);
        assert!(filter_transactions(&data, &SearchQuery::new("xyz")).is_empty());
    }
}
