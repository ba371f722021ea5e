//! Error types for the taskman engine.
//!
//! Every engine operation returns [`Result`]. Validation and lookup failures
//! are recoverable and carry a reason the command layer prints as-is; storage
//! failures wrap the underlying IO error.

use super::access::Operation;
use thiserror::Error;

/// Main error type for record store, identity and lifecycle operations.
#[derive(Error, Debug)]
pub enum TaskError {
    /// A field failed its syntax or semantic check.
    #[error("{0}")]
    Validation(String),

    #[error("Username '{0}' already exists. Please try a different username.")]
    DuplicateUsername(String),

    /// Deliberately identical for unknown users and wrong credentials.
    #[error("Invalid username or password.")]
    Authentication,

    #[error("User '{0}' does not exist.")]
    UnknownOwner(String),

    #[error("Task '{0}' not found.")]
    NotFound(String),

    #[error("Task ID {0} is completed and cannot be edited. Reset it to incomplete first.")]
    EditLocked(u32),

    /// Informational: the task was already incomplete and nothing was written.
    #[error("Task ID {0} is already incomplete.")]
    AlreadyIncomplete(u32),

    #[error("Only Admin users can {0}.")]
    Unauthorized(Operation),

    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl TaskError {
    /// Whether the error reports a condition rather than a failure.
    pub fn is_informational(&self) -> bool {
        matches!(self, TaskError::AlreadyIncomplete(_))
    }
}

impl From<serde_json::Error> for TaskError {
    fn from(err: serde_json::Error) -> Self {
        TaskError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for TaskError {
    fn from(err: csv::Error) -> Self {
        TaskError::Serialization(err.to_string())
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, TaskError>;
