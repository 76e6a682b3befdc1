//! CSV Export functionality
//!
//! Exports finance-tracker transactions in spreadsheet-compatible form.

use std::io::Write;

use crate::error::{ToolboxError, ToolboxResult};
use crate::storage::Storage;

/// Export all transactions to CSV
pub fn export_transactions_csv<W: Write>(storage: &Storage, writer: &mut W) -> ToolboxResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["ID", "Date", "Kind", "Amount", "Category", "Description"])
        .map_err(|e| ToolboxError::Export(e.to_string()))?;

    for txn in storage.transactions.get_all()? {
        csv_writer
            .write_record([
                txn.id.as_uuid().to_string(),
                txn.date.to_string(),
                txn.kind.to_string(),
                format!("{:.2}", txn.amount.cents() as f64 / 100.0),
                txn.category.clone(),
                txn.description.clone(),
            ])
            .map_err(|e| ToolboxError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ToolboxError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ToolboxPaths;
    use crate::models::{Money, Transaction, TransactionKind};
    use tempfile::TempDir;

    #[test]
    fn test_csv_contains_header_and_rows() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ToolboxPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        storage
            .transactions
            .upsert(Transaction::new(
                TransactionKind::Expense,
                Money::from_cents(1250),
                "lunch, with a comma",
            ))
            .unwrap();

        let mut buffer = Vec::new();
        export_transactions_csv(&storage, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert!(text.starts_with("ID,Date,Kind,Amount,Category,Description"));
        assert!(text.contains("12.50"));
        // Comma in the description must be quoted
        assert!(text.contains("\"lunch, with a comma\""));
    }

    #[test]
    fn test_empty_storage_exports_header_only() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ToolboxPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let mut buffer = Vec::new();
        export_transactions_csv(&storage, &mut buffer).unwrap();
        let text = String::from_utf8(buffer).unwrap();

        assert_eq!(text.lines().count(), 1);
    }
}
