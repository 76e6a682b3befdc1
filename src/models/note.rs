//! Note model
//!
//! A free-form text note with a title, tracked by creation and
//! modification timestamps.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::NoteId;

/// A text note
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier
    pub id: NoteId,

    /// Note title
    pub title: String,

    /// Note body
    #[serde(default)]
    pub content: String,

    /// When the note was created
    pub created_at: DateTime<Utc>,

    /// When the note was last modified
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Create a new note
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: NoteId::new(),
            title: title.into(),
            content: content.into(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace the title and bump the modification timestamp
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        self.updated_at = Utc::now();
    }

    /// Replace the content and bump the modification timestamp
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.updated_at = Utc::now();
    }

    /// One-line preview of the note body for list views
    pub fn preview(&self, max_chars: usize) -> String {
        let first_line = self.content.lines().next().unwrap_or("");
        let mut preview: String = first_line.chars().take(max_chars).collect();
        if first_line.chars().count() > max_chars || self.content.lines().count() > 1 {
            preview.push('…');
        }
        preview
    }
}
