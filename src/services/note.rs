//! Note service
//!
//! Business logic for the notepad tool: CRUD with validation and
//! flexible lookup by ID prefix or title.

use crate::error::{ToolboxError, ToolboxResult};
use crate::models::Note;
use crate::storage::Storage;

/// Service for note management
pub struct NoteService<'a> {
    storage: &'a Storage,
}

impl<'a> NoteService<'a> {
    /// Create a new note service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Create a note
    pub fn create(&self, title: &str, content: &str) -> ToolboxResult<Note> {
        let title = title.trim();
        if title.is_empty() {
            return Err(ToolboxError::Validation("note title cannot be empty".into()));
        }

        let note = Note::new(title, content);
        self.storage.notes.upsert(note.clone())?;
        self.storage.notes.save()?;
        Ok(note)
    }

    /// List all notes, most recently updated first
    pub fn list(&self) -> ToolboxResult<Vec<Note>> {
        self.storage.notes.get_all()
    }

    /// Find a note by ID prefix or by exact title (case-insensitive)
    pub fn find(&self, identifier: &str) -> ToolboxResult<Option<Note>> {
        let notes = self.storage.notes.get_all()?;

        if let Some(note) = notes.iter().find(|n| n.id.matches(identifier)) {
            return Ok(Some(note.clone()));
        }

        Ok(notes
            .iter()
            .find(|n| n.title.eq_ignore_ascii_case(identifier))
            .cloned())
    }

    /// Update a note's title and/or content
    pub fn edit(
        &self,
        identifier: &str,
        title: Option<&str>,
        content: Option<&str>,
    ) -> ToolboxResult<Note> {
        let mut note = self
            .find(identifier)?
            .ok_or_else(|| ToolboxError::note_not_found(identifier))?;

        if let Some(title) = title {
            let title = title.trim();
            if title.is_empty() {
                return Err(ToolboxError::Validation("note title cannot be empty".into()));
            }
            note.set_title(title);
        }
        if let Some(content) = content {
            note.set_content(content);
        }

        self.storage.notes.upsert(note.clone())?;
        self.storage.notes.save()?;
        Ok(note)
    }

    /// Delete a note
    pub fn delete(&self, identifier: &str) -> ToolboxResult<Note> {
        let note = self
            .find(identifier)?
            .ok_or_else(|| ToolboxError::note_not_found(identifier))?;

        self.storage.notes.remove(note.id)?;
        self.storage.notes.save()?;
        Ok(note)
    }
}
