use anyhow::Result;
use clap::{Parser, Subcommand};

use toolbox_cli::cli::{
    handle_calc_command, handle_config_command, handle_export_command, handle_finance_command,
    handle_login, handle_logout, handle_note_command, handle_text_command, handle_whoami,
};
use toolbox_cli::config::{paths::ToolboxPaths, settings::Settings};
use toolbox_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "toolbox",
    version,
    about = "Terminal multi-tool: calculators, converters, notes, and a finance tracker",
    long_about = "Toolbox bundles the small utilities that usually live in a dozen \
                  browser tabs into one command: loan and investment calculators, \
                  unit and color conversion, age and BMI calculators, text tools, \
                  a notepad, and a lightweight income/expense tracker."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculator commands
    #[command(subcommand)]
    Calc(toolbox_cli::cli::CalcCommands),

    /// Text and utility tool commands
    #[command(subcommand)]
    Text(toolbox_cli::cli::TextCommands),

    /// Notepad commands
    #[command(subcommand)]
    Note(toolbox_cli::cli::NoteCommands),

    /// Finance tracker commands
    #[command(subcommand, alias = "fin")]
    Finance(toolbox_cli::cli::FinanceCommands),

    /// Export data
    #[command(subcommand)]
    Export(toolbox_cli::cli::ExportCommands),

    /// Settings commands
    #[command(subcommand)]
    Config(toolbox_cli::cli::ConfigCommands),

    /// Store a display name for greetings
    Login {
        /// Display name
        name: String,
    },

    /// Drop the stored display name
    Logout,

    /// Show the stored display name
    Whoami,

    /// Initialize the data directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ToolboxPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Calc(cmd)) => {
            handle_calc_command(&settings, cmd)?;
        }
        Some(Commands::Text(cmd)) => {
            handle_text_command(cmd)?;
        }
        Some(Commands::Note(cmd)) => {
            handle_note_command(&storage, cmd)?;
        }
        Some(Commands::Finance(cmd)) => {
            handle_finance_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Config(cmd)) => {
            handle_config_command(&paths, &mut settings, cmd)?;
        }
        Some(Commands::Login { name }) => {
            handle_login(&paths, &name)?;
        }
        Some(Commands::Logout) => {
            handle_logout(&paths)?;
        }
        Some(Commands::Whoami) => {
            handle_whoami(&paths)?;
        }
        Some(Commands::Init) => {
            println!("Initializing toolbox at: {}", paths.data_dir().display());
            toolbox_cli::storage::init::initialize_storage(&paths)?;
            settings.setup_completed = true;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Try:");
            println!("  toolbox calc loan 100000 10 12");
            println!("  toolbox note list");
            println!("  toolbox finance add expense 4.50 'coffee'");
        }
        None => {
            println!("Toolbox - terminal multi-tool");
            println!();
            println!("Run 'toolbox --help' for usage information.");
            println!("Run 'toolbox init' to set up the data directory.");
        }
    }

    Ok(())
}
