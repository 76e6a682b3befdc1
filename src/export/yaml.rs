//! YAML Export functionality
//!
//! Exports the complete database to YAML format for human-readable backup.

use std::io::Write;

use crate::error::{ToolboxError, ToolboxResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export the full database to YAML format
pub fn export_full_yaml<W: Write>(storage: &Storage, writer: &mut W) -> ToolboxResult<()> {
    let export = FullExport::from_storage(storage)?;

    writeln!(writer, "# Toolbox Full Data Export")
        .map_err(|e| ToolboxError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.exported_at)
        .map_err(|e| ToolboxError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| ToolboxError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| ToolboxError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ToolboxError::Export(e.to_string()))?;

    Ok(())
}
