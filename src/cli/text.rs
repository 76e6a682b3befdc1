//! Text and utility tool CLI commands

use std::io::Read;
use std::path::PathBuf;

use clap::Subcommand;

use crate::display::{format_strength, format_text_stats};
use crate::error::{ToolboxError, ToolboxResult};
use crate::tools::{
    decode_text, encode_text, format_json, generate_password, strength_score, JsonStyle,
    PasswordOptions, TextStats,
};

/// Text tool subcommands
#[derive(Subcommand)]
pub enum TextCommands {
    /// Word, character, and sentence statistics
    Stats {
        /// Text to analyze; reads stdin when absent
        text: Option<String>,
        /// Read the text from a file instead
        #[arg(short, long, conflicts_with = "text")]
        file: Option<PathBuf>,
    },
    /// Base64-encode text
    Encode {
        /// Text to encode
        input: String,
    },
    /// Decode Base64 back to text
    Decode {
        /// Base64 input
        input: String,
    },
    /// Generate a random password
    Password {
        /// Password length
        #[arg(short, long, default_value_t = 12)]
        length: usize,
        /// Exclude uppercase letters
        #[arg(long)]
        no_uppercase: bool,
        /// Exclude digits
        #[arg(long)]
        no_digits: bool,
        /// Exclude symbols
        #[arg(long)]
        no_symbols: bool,
    },
    /// Pretty-print or minify a JSON document
    Json {
        /// JSON input; reads stdin when absent
        input: Option<String>,
        /// Read the JSON from a file instead
        #[arg(short, long, conflicts_with = "input")]
        file: Option<PathBuf>,
        /// Emit a single line instead of pretty-printing
        #[arg(short, long)]
        minify: bool,
    },
}

/// Resolve tool input from an argument, a file, or stdin
fn resolve_input(text: Option<String>, file: Option<PathBuf>) -> ToolboxResult<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(&path)
            .map_err(|e| ToolboxError::Io(format!("Failed to read {}: {}", path.display(), e)));
    }

    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| ToolboxError::Io(format!("Failed to read stdin: {}", e)))?;
    Ok(buffer)
}

/// Handle a text tool command
pub fn handle_text_command(cmd: TextCommands) -> ToolboxResult<()> {
    match cmd {
        TextCommands::Stats { text, file } => {
            let input = resolve_input(text, file)?;
            let stats = TextStats::analyze(&input);
            print!("{}", format_text_stats(&stats));
        }

        TextCommands::Encode { input } => {
            println!("{}", encode_text(&input));
        }

        TextCommands::Decode { input } => {
            println!("{}", decode_text(&input)?);
        }

        TextCommands::Password { length, no_uppercase, no_digits, no_symbols } => {
            let options = PasswordOptions {
                length,
                include_uppercase: !no_uppercase,
                include_digits: !no_digits,
                include_symbols: !no_symbols,
            };
            println!("{}", generate_password(&options)?);
            print!("{}", format_strength(strength_score(&options)));
        }

        TextCommands::Json { input, file, minify } => {
            let document = resolve_input(input, file)?;
            let style = if minify {
                JsonStyle::Minified
            } else {
                JsonStyle::Pretty
            };
            println!("{}", format_json(&document, style)?);
        }
    }

    Ok(())
}
