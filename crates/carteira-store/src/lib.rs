//! Record store for carteira
//!
//! Gains and expenses are kept as two ordered, read-only lists of
//! [`TransactionRecord`]s, loaded once from JSON files.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub mod error;
pub mod types;

pub use error::StoreError;
pub use types::{Frequency, TransactionRecord};

// ==================== Source Trait ====================

/// Trait for record sources
#[async_trait]
pub trait RecordSourceTrait: Send + Sync {
    /// Parse records from file content
    async fn parse(&self, content: &str) -> Result<Vec<TransactionRecord>, StoreError>;

    /// Read and parse records from a file path
    async fn load_file(&self, path: PathBuf) -> Result<Vec<TransactionRecord>, StoreError>;
}

/// Reads a JSON array of records
#[derive(Debug, Default)]
pub struct JsonRecordSource;

impl JsonRecordSource {
    fn parse_with_source(content: &str, source: &str) -> Result<Vec<TransactionRecord>, StoreError> {
        serde_json::from_str(content).map_err(|e| StoreError::SyntaxError {
            location: format!("{}:{}:{}", source, e.line(), e.column()),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl RecordSourceTrait for JsonRecordSource {
    async fn parse(&self, content: &str) -> Result<Vec<TransactionRecord>, StoreError> {
        Self::parse_with_source(content, "input")
    }

    async fn load_file(&self, path: PathBuf) -> Result<Vec<TransactionRecord>, StoreError> {
        let content = tokio::fs::read_to_string(&path).await?;
        let source_path = path.to_string_lossy().to_string();
        let records = Self::parse_with_source(&content, &source_path)?;
        log::debug!("Parsed {} records from {}", records.len(), source_path);
        Ok(records)
    }
}

// ==================== Store ====================

/// The two record sets of a session
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    gains: Vec<TransactionRecord>,
    expenses: Vec<TransactionRecord>,
}

impl RecordStore {
    /// Create a store from already loaded records
    pub fn new(gains: Vec<TransactionRecord>, expenses: Vec<TransactionRecord>) -> Self {
        Self { gains, expenses }
    }

    /// Load both record files through `source`
    pub async fn load(
        source: &dyn RecordSourceTrait,
        gains_path: impl AsRef<Path>,
        expenses_path: impl AsRef<Path>,
    ) -> Result<Self, StoreError> {
        let gains = source.load_file(gains_path.as_ref().to_path_buf()).await?;
        let expenses = source.load_file(expenses_path.as_ref().to_path_buf()).await?;

        log::info!(
            "Record store loaded: {} gains, {} expenses",
            gains.len(),
            expenses.len()
        );

        Ok(Self::new(gains, expenses))
    }

    /// Income records
    pub fn gains(&self) -> &[TransactionRecord] {
        &self.gains
    }

    /// Expense records
    pub fn expenses(&self) -> &[TransactionRecord] {
        &self.expenses
    }

    pub fn is_empty(&self) -> bool {
        self.gains.is_empty() && self.expenses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GAINS: &str = r#"[
        {"description": "Salário", "amount": "5000.00", "frequency": "recorrente", "date": "2021-03-05"},
        {"description": "Freela", "amount": "1200", "frequency": "eventual", "date": "2021-04-18"}
    ]"#;

    const EXPENSES: &str = r#"[
        {"description": "Aluguel", "amount": "1500", "frequency": "recorrente", "date": "2021-03-10"}
    ]"#;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "carteira-store-{}-{}",
            std::process::id(),
            name
        ));
        std::fs::write(&path, content).unwrap();
        path
    }

    #[tokio::test]
    async fn test_parse_records() {
        let records = JsonRecordSource.parse(GAINS).await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].description, "Salário");
        assert_eq!(records[1].frequency, Frequency::Occasional);
    }

    #[tokio::test]
    async fn test_parse_rejects_unknown_frequency() {
        let content = r#"[{"description": "x", "amount": "1", "frequency": "anual", "date": "2021-01-01"}]"#;
        let err = JsonRecordSource.parse(content).await.unwrap_err();
        assert!(matches!(err, StoreError::SyntaxError { .. }));
    }

    #[tokio::test]
    async fn test_parse_keeps_malformed_amount() {
        // Amounts are validated at aggregation time, not at load time
        let content = r#"[{"description": "x", "amount": "abc", "frequency": "eventual", "date": "2021-01-01"}]"#;
        let records = JsonRecordSource.parse(content).await.unwrap();
        assert_eq!(records[0].amount, "abc");
    }

    #[tokio::test]
    async fn test_load_store() {
        let gains = temp_file("gains.json", GAINS);
        let expenses = temp_file("expenses.json", EXPENSES);

        let store = RecordStore::load(&JsonRecordSource, &gains, &expenses).await.unwrap();
        assert_eq!(store.gains().len(), 2);
        assert_eq!(store.expenses().len(), 1);
        assert!(!store.is_empty());

        let gain_names: Vec<&str> = store.gains().iter().map(|r| r.description.as_str()).collect();
        assert_eq!(gain_names, vec!["Salário", "Freela"]);
        assert_eq!(store.expenses()[0].description, "Aluguel");

        std::fs::remove_file(gains).ok();
        std::fs::remove_file(expenses).ok();
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let err = RecordStore::load(
            &JsonRecordSource,
            "/nonexistent/gains.json",
            "/nonexistent/expenses.json",
        )
        .await
        .unwrap_err();
        assert!(matches!(err, StoreError::IoError(_)));
    }

    #[test]
    fn test_empty_store() {
        let store = RecordStore::default();
        assert!(store.is_empty());
        assert!(store.gains().is_empty());
    }
}
