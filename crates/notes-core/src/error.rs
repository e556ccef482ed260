//! Error types for notes-core

use std::path::PathBuf;

/// Result type for notes-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in notes-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No note is stored under the given id
    #[error("Note not found: {id}")]
    NoteNotFound { id: String },

    /// Note ids must be non-empty
    #[error("Note id must not be empty")]
    EmptyNoteId,

    /// Configuration file not found at expected path
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parse error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}
