//! Export module for the toolbox
//!
//! Provides data export functionality in multiple formats:
//! - CSV: For finance-tracker transactions (spreadsheet-compatible)
//! - JSON: For machine-readable full data export
//! - YAML: For human-readable full data export

pub mod csv;
pub mod json;
pub mod yaml;

pub use csv::export_transactions_csv;
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
