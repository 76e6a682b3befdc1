//! Storage layer for the toolbox
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod file_io;
pub mod init;
pub mod notes;
pub mod transactions;

pub use file_io::{read_json, write_json_atomic};
pub use init::{initialize_storage, needs_initialization};
pub use notes::NoteRepository;
pub use transactions::TransactionRepository;

use crate::config::paths::ToolboxPaths;
use crate::error::ToolboxError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: ToolboxPaths,
    pub notes: NoteRepository,
    pub transactions: TransactionRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: ToolboxPaths) -> Result<Self, ToolboxError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            notes: NoteRepository::new(paths.notes_file()),
            transactions: TransactionRepository::new(paths.transactions_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &ToolboxPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), ToolboxError> {
        self.notes.load()?;
        self.transactions.load()?;
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), ToolboxError> {
        self.notes.save()?;
        self.transactions.save()?;
        Ok(())
    }
}
