//! Command handlers
//!
//! One module per tool family. Each exposes a clap [`Subcommand`] enum and
//! a `handle_*` function that bridges parsed arguments to the service layer
//! and prints through the display module.
//!
//! [`Subcommand`]: clap::Subcommand

pub mod calc;
pub mod config;
pub mod export;
pub mod finance;
pub mod note;
pub mod session;
pub mod text;

pub use calc::{handle_calc_command, CalcCommands};
pub use config::{handle_config_command, ConfigCommands};
pub use export::{handle_export_command, ExportCommands};
pub use finance::{handle_finance_command, FinanceCommands};
pub use note::{handle_note_command, NoteCommands};
pub use session::{handle_login, handle_logout, handle_whoami};
pub use text::{handle_text_command, TextCommands};
