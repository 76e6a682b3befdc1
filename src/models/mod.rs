//! Core data models for the toolbox
//!
//! This module contains the data structures for the persistent tools:
//! notes, finance-tracker transactions, and the money type they share.

pub mod ids;
pub mod money;
pub mod note;
pub mod transaction;

pub use ids::{NoteId, TransactionId};
pub use money::Money;
pub use note::Note;
pub use transaction::{Transaction, TransactionKind, PREDEFINED_CATEGORIES, UNCATEGORIZED};
