//! Custom error types for the toolbox
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for toolbox operations
#[derive(Error, Debug)]
pub enum ToolboxError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// A calculator was given input it cannot compute from (non-finite,
    /// zero/negative where a positive value is required). Recoverable:
    /// correct the input and call again.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Unit symbol not registered in the requested conversion category
    #[error("Unknown unit '{symbol}' for category '{category}'")]
    UnknownUnit {
        symbol: String,
        category: &'static str,
    },

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Entity not found errors
    #[error("{entity_type} not found: {identifier}")]
    NotFound {
        entity_type: &'static str,
        identifier: String,
    },

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Session errors (login/logout)
    #[error("Session error: {0}")]
    Session(String),
}

impl ToolboxError {
    /// Create a "not found" error for notes
    pub fn note_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Note",
            identifier: identifier.into(),
        }
    }

    /// Create a "not found" error for transactions
    pub fn transaction_not_found(identifier: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: "Transaction",
            identifier: identifier.into(),
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if this is an invalid-input error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_) | Self::UnknownUnit { .. })
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for ToolboxError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ToolboxError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for toolbox operations
pub type ToolboxResult<T> = Result<T, ToolboxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ToolboxError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_not_found_error() {
        let err = ToolboxError::note_not_found("groceries");
        assert_eq!(err.to_string(), "Note not found: groceries");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_unknown_unit_error() {
        let err = ToolboxError::UnknownUnit {
            symbol: "kg".into(),
            category: "length",
        };
        assert_eq!(err.to_string(), "Unknown unit 'kg' for category 'length'");
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let toolbox_err: ToolboxError = io_err.into();
        assert!(matches!(toolbox_err, ToolboxError::Io(_)));
    }
}
