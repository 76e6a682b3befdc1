//! Storage initialization
//!
//! Handles first-run setup and default data creation

use crate::config::paths::ToolboxPaths;
use crate::error::ToolboxError;
use crate::models::Note;

use super::notes::NoteRepository;

/// Initialize storage for a fresh installation
///
/// Creates the directory layout and a welcome note, mirroring the
/// first-run experience of the notes tool.
pub fn initialize_storage(paths: &ToolboxPaths) -> Result<(), ToolboxError> {
    paths.ensure_directories()?;

    if !paths.notes_file().exists() {
        create_welcome_note(paths)?;
    }

    Ok(())
}

/// Seed notes.json with a single welcome note
fn create_welcome_note(paths: &ToolboxPaths) -> Result<(), ToolboxError> {
    let repo = NoteRepository::new(paths.notes_file());
    repo.upsert(Note::new(
        "Welcome",
        "This is your notepad. Create notes with 'toolbox note add'.",
    ))?;
    repo.save()
}

/// Check if storage needs initialization
pub fn needs_initialization(paths: &ToolboxPaths) -> bool {
    !paths.notes_file().exists() && !paths.transactions_file().exists()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_creates_welcome_note() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ToolboxPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert!(needs_initialization(&paths));
        initialize_storage(&paths).unwrap();
        assert!(!needs_initialization(&paths));

        let repo = NoteRepository::new(paths.notes_file());
        repo.load().unwrap();
        let notes = repo.get_all().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Welcome");
    }

    #[test]
    fn test_initialize_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ToolboxPaths::with_base_dir(temp_dir.path().to_path_buf());

        initialize_storage(&paths).unwrap();
        initialize_storage(&paths).unwrap();

        let repo = NoteRepository::new(paths.notes_file());
        repo.load().unwrap();
        assert_eq!(repo.get_all().unwrap().len(), 1);
    }
}
