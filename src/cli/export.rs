//! Export CLI commands

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{ToolboxError, ToolboxResult};
use crate::export::{export_full_json, export_full_yaml, export_transactions_csv};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export transactions as CSV
    Csv {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export all data as JSON
    Json {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export all data as YAML
    Yaml {
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Open the export destination: a file when given, stdout otherwise
fn open_writer(output: &Option<PathBuf>) -> ToolboxResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                ToolboxError::Export(format!("cannot create {}: {}", path.display(), e))
            })?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Handle an export command
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> ToolboxResult<()> {
    let (output, result) = match cmd {
        ExportCommands::Csv { output } => {
            let mut writer = open_writer(&output)?;
            (output, export_transactions_csv(storage, &mut writer))
        }
        ExportCommands::Json { output } => {
            let mut writer = open_writer(&output)?;
            (output, export_full_json(storage, &mut writer))
        }
        ExportCommands::Yaml { output } => {
            let mut writer = open_writer(&output)?;
            (output, export_full_yaml(storage, &mut writer))
        }
    };
    result?;

    if let Some(path) = output {
        eprintln!("Exported to {}", path.display());
    }
    Ok(())
}
