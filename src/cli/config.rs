//! Settings CLI commands

use clap::Subcommand;

use crate::config::{Settings, ToolboxPaths};
use crate::error::{ToolboxError, ToolboxResult};

/// Settings subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the current settings
    Show,
    /// Change a setting
    Set {
        /// Currency symbol for the finance tracker
        #[arg(long)]
        currency: Option<String>,
        /// Decimal digits shown for conversion results (0-12)
        #[arg(long)]
        precision: Option<usize>,
        /// Date format (strftime)
        #[arg(long)]
        date_format: Option<String>,
    },
}

/// Handle a settings command
pub fn handle_config_command(
    paths: &ToolboxPaths,
    settings: &mut Settings,
    cmd: ConfigCommands,
) -> ToolboxResult<()> {
    match cmd {
        ConfigCommands::Show => {
            println!("Config directory:     {}", paths.config_dir().display());
            println!("Data directory:       {}", paths.data_dir().display());
            println!();
            println!("Currency symbol:      {}", settings.currency_symbol);
            println!("Date format:          {}", settings.date_format);
            println!("Conversion precision: {}", settings.conversion_precision);
        }

        ConfigCommands::Set { currency, precision, date_format } => {
            if currency.is_none() && precision.is_none() && date_format.is_none() {
                return Err(ToolboxError::Validation(
                    "nothing to change: pass --currency, --precision, or --date-format".into(),
                ));
            }

            if let Some(currency) = currency {
                if currency.trim().is_empty() {
                    return Err(ToolboxError::Validation(
                        "currency symbol cannot be empty".into(),
                    ));
                }
                settings.currency_symbol = currency.trim().to_string();
            }
            if let Some(precision) = precision {
                if precision > 12 {
                    return Err(ToolboxError::Validation(
                        "conversion precision must be at most 12".into(),
                    ));
                }
                settings.conversion_precision = precision;
            }
            if let Some(format) = date_format {
                settings.date_format = format;
            }

            settings.save(paths)?;
            println!("Settings updated.");
        }
    }

    Ok(())
}
