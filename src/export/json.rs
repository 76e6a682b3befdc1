//! JSON Export functionality
//!
//! Exports the complete database to JSON format with schema versioning.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::{ToolboxError, ToolboxResult};
use crate::models::{Note, Transaction};
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full database export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// All notes
    pub notes: Vec<Note>,

    /// All transactions
    pub transactions: Vec<Transaction>,

    /// Export metadata
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Total number of notes
    pub note_count: usize,

    /// Total number of transactions
    pub transaction_count: usize,

    /// Date range of transactions (earliest)
    pub earliest_transaction: Option<String>,

    /// Date range of transactions (latest)
    pub latest_transaction: Option<String>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> ToolboxResult<Self> {
        let notes = storage.notes.get_all()?;
        let transactions = storage.transactions.get_all()?;

        let earliest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .min()
            .map(|d| d.to_string());
        let latest_transaction = transactions
            .iter()
            .map(|t| t.date)
            .max()
            .map(|d| d.to_string());

        let metadata = ExportMetadata {
            note_count: notes.len(),
            transaction_count: transactions.len(),
            earliest_transaction,
            latest_transaction,
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            notes,
            transactions,
            metadata,
        })
    }
}

/// Export the full database to pretty-printed JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: &mut W) -> ToolboxResult<()> {
    let export = FullExport::from_storage(storage)?;
    serde_json::to_writer_pretty(writer, &export)
        .map_err(|e| ToolboxError::Export(e.to_string()))?;
    Ok(())
}
