//! Transaction repository for JSON storage
//!
//! Manages loading and saving finance-tracker entries to transactions.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ToolboxError;
use crate::models::{Transaction, TransactionId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable transaction data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct TransactionData {
    transactions: Vec<Transaction>,
}

/// Repository for transaction persistence
pub struct TransactionRepository {
    path: PathBuf,
    data: RwLock<HashMap<TransactionId, Transaction>>,
}

impl TransactionRepository {
    /// Create a new transaction repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load transactions from disk
    pub fn load(&self) -> Result<(), ToolboxError> {
        let file_data: TransactionData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| ToolboxError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for txn in file_data.transactions {
            data.insert(txn.id, txn);
        }

        Ok(())
    }

    /// Save transactions to disk, newest first
    pub fn save(&self) -> Result<(), ToolboxError> {
        let data = self
            .data
            .read()
            .map_err(|e| ToolboxError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

        let file_data = TransactionData { transactions };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> Result<Option<Transaction>, ToolboxError> {
        let data = self
            .data
            .read()
            .map_err(|e| ToolboxError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all transactions, newest first
    pub fn get_all(&self) -> Result<Vec<Transaction>, ToolboxError> {
        let data = self
            .data
            .read()
            .map_err(|e| ToolboxError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut transactions: Vec<_> = data.values().cloned().collect();
        transactions.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(transactions)
    }

    /// Insert or replace a transaction
    pub fn upsert(&self, txn: Transaction) -> Result<(), ToolboxError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ToolboxError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(txn.id, txn);
        Ok(())
    }

    /// Remove a transaction; returns whether it existed
    pub fn remove(&self, id: TransactionId) -> Result<bool, ToolboxError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ToolboxError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use tempfile::TempDir;

    fn sample(desc: &str, cents: i64) -> Transaction {
        Transaction::new(TransactionKind::Expense, Money::from_cents(cents), desc)
    }

    #[test]
    fn test_upsert_get_remove() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TransactionRepository::new(temp_dir.path().join("transactions.json"));

        let txn = sample("coffee", 450);
        let id = txn.id;
        repo.upsert(txn).unwrap();

        assert_eq!(repo.get(id).unwrap().unwrap().description, "coffee");
        assert!(repo.remove(id).unwrap());
        assert!(repo.get(id).unwrap().is_none());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("transactions.json");

        let repo = TransactionRepository::new(path.clone());
        let txn = sample("rent", 120_000);
        let id = txn.id;
        repo.upsert(txn).unwrap();
        repo.save().unwrap();

        let reloaded = TransactionRepository::new(path);
        reloaded.load().unwrap();
        let fetched = reloaded.get(id).unwrap().unwrap();
        assert_eq!(fetched.amount.cents(), 120_000);
    }

    #[test]
    fn test_get_all_newest_first() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TransactionRepository::new(temp_dir.path().join("transactions.json"));

        let mut old = sample("old", 100);
        old.date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let mut new = sample("new", 200);
        new.date = chrono::NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        repo.upsert(old).unwrap();
        repo.upsert(new).unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all[0].description, "new");
        assert_eq!(all[1].description, "old");
    }
}
