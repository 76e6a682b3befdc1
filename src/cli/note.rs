//! Note CLI commands

use clap::Subcommand;

use crate::display::{format_note_details, format_note_list};
use crate::error::{ToolboxError, ToolboxResult};
use crate::services::NoteService;
use crate::storage::Storage;

/// Note subcommands
#[derive(Subcommand)]
pub enum NoteCommands {
    /// Create a new note
    Add {
        /// Note title
        title: String,
        /// Note body
        #[arg(short, long, default_value = "")]
        content: String,
    },
    /// List all notes
    List,
    /// Show a note in full
    Show {
        /// Note title or ID prefix
        note: String,
    },
    /// Edit a note
    Edit {
        /// Note title or ID prefix
        note: String,
        /// New title
        #[arg(short, long)]
        title: Option<String>,
        /// New body
        #[arg(short, long)]
        content: Option<String>,
    },
    /// Delete a note
    Delete {
        /// Note title or ID prefix
        note: String,
    },
}

/// Handle a note command
pub fn handle_note_command(storage: &Storage, cmd: NoteCommands) -> ToolboxResult<()> {
    let service = NoteService::new(storage);

    match cmd {
        NoteCommands::Add { title, content } => {
            let note = service.create(&title, &content)?;
            println!("Created note '{}' ({})", note.title, note.id);
        }

        NoteCommands::List => {
            let notes = service.list()?;
            print!("{}", format_note_list(&notes));
        }

        NoteCommands::Show { note } => {
            let found = service
                .find(&note)?
                .ok_or_else(|| ToolboxError::note_not_found(&note))?;
            print!("{}", format_note_details(&found));
        }

        NoteCommands::Edit { note, title, content } => {
            if title.is_none() && content.is_none() {
                return Err(ToolboxError::Validation(
                    "nothing to change: pass --title and/or --content".into(),
                ));
            }
            let edited = service.edit(&note, title.as_deref(), content.as_deref())?;
            println!("Updated note '{}' ({})", edited.title, edited.id);
        }

        NoteCommands::Delete { note } => {
            let deleted = service.delete(&note)?;
            println!("Deleted note '{}' ({})", deleted.title, deleted.id);
        }
    }

    Ok(())
}
