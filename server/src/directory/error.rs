//! Directory Error Types

use thiserror::Error;

/// Errors produced by directory write operations.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Username already taken.
    #[error("User already exists")]
    DuplicateUser,

    /// Role name not present in the directory.
    #[error("Unknown role: {0}")]
    UnknownRole(String),

    /// User or role lookup came up empty.
    ///
    /// Deliberately does not say which side was missing.
    #[error("User or role not found")]
    NotFound,

    /// Database error.
    #[error("Database error")]
    Database(#[from] sqlx::Error),
}
