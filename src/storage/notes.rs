//! Note repository for JSON storage
//!
//! Manages loading and saving notes to notes.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ToolboxError;
use crate::models::{Note, NoteId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable note data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct NoteData {
    notes: Vec<Note>,
}

/// Repository for note persistence
pub struct NoteRepository {
    path: PathBuf,
    data: RwLock<HashMap<NoteId, Note>>,
}

impl NoteRepository {
    /// Create a new note repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load notes from disk
    pub fn load(&self) -> Result<(), ToolboxError> {
        let file_data: NoteData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| ToolboxError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for note in file_data.notes {
            data.insert(note.id, note);
        }

        Ok(())
    }

    /// Save notes to disk, most recently updated first
    pub fn save(&self) -> Result<(), ToolboxError> {
        let data = self
            .data
            .read()
            .map_err(|e| ToolboxError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut notes: Vec<_> = data.values().cloned().collect();
        notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));

        let file_data = NoteData { notes };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a note by ID
    pub fn get(&self, id: NoteId) -> Result<Option<Note>, ToolboxError> {
        let data = self
            .data
            .read()
            .map_err(|e| ToolboxError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Get all notes, most recently updated first
    pub fn get_all(&self) -> Result<Vec<Note>, ToolboxError> {
        let data = self
            .data
            .read()
            .map_err(|e| ToolboxError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        let mut notes: Vec<_> = data.values().cloned().collect();
        notes.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(notes)
    }

    /// Insert or replace a note
    pub fn upsert(&self, note: Note) -> Result<(), ToolboxError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ToolboxError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(note.id, note);
        Ok(())
    }

    /// Remove a note; returns whether it existed
    pub fn remove(&self, id: NoteId) -> Result<bool, ToolboxError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| ToolboxError::Storage(format!("Failed to acquire write lock: {}", e)))?;

        Ok(data.remove(&id).is_some())
    }

    /// Number of stored notes
    pub fn count(&self) -> Result<usize, ToolboxError> {
        let data = self
            .data
            .read()
            .map_err(|e| ToolboxError::Storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_upsert_and_get() {
        let temp_dir = TempDir::new().unwrap();
        let repo = NoteRepository::new(temp_dir.path().join("notes.json"));

        let note = Note::new("title", "content");
        let id = note.id;
        repo.upsert(note).unwrap();

        let fetched = repo.get(id).unwrap().unwrap();
        assert_eq!(fetched.title, "title");
        assert_eq!(repo.count().unwrap(), 1);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.json");

        let repo = NoteRepository::new(path.clone());
        let note = Note::new("persisted", "body");
        let id = note.id;
        repo.upsert(note).unwrap();
        repo.save().unwrap();

        let reloaded = NoteRepository::new(path);
        reloaded.load().unwrap();
        assert_eq!(reloaded.get(id).unwrap().unwrap().title, "persisted");
    }

    #[test]
    fn test_remove() {
        let temp_dir = TempDir::new().unwrap();
        let repo = NoteRepository::new(temp_dir.path().join("notes.json"));

        let note = Note::new("t", "c");
        let id = note.id;
        repo.upsert(note).unwrap();

        assert!(repo.remove(id).unwrap());
        assert!(!repo.remove(id).unwrap());
        assert!(repo.get(id).unwrap().is_none());
    }

    #[test]
    fn test_get_all_sorted_by_updated_at() {
        let temp_dir = TempDir::new().unwrap();
        let repo = NoteRepository::new(temp_dir.path().join("notes.json"));

        let older = Note::new("older", "");
        let mut newer = Note::new("newer", "");
        newer.updated_at = older.updated_at + chrono::Duration::seconds(10);

        repo.upsert(older).unwrap();
        repo.upsert(newer).unwrap();

        let all = repo.get_all().unwrap();
        assert_eq!(all[0].title, "newer");
        assert_eq!(all[1].title, "older");
    }
}
