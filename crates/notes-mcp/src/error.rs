//! Error types for the MCP server

use thiserror::Error;

/// Result type alias for MCP operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during MCP server operations
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the note store
    #[error(transparent)]
    Core(#[from] notes_core::Error),

    /// Error during JSON serialization/deserialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Resource URI does not use the `note://` scheme
    #[error("Unsupported URI scheme: {uri}")]
    UnsupportedScheme { uri: String },

    /// Request params did not match the method's shape
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
