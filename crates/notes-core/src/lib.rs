//! Core note storage for the notes MCP server
//!
//! This crate owns all server state: a mapping from note identifier to note
//! body, plus the configuration that may pre-populate it at startup.
//!
//! # Modules
//!
//! - [`store`] - [`NoteStore`], the id → body mapping
//! - [`config`] - [`ServerConfig`] loaded from TOML, including seed notes
//! - [`samples`] - built-in sample notes

pub mod config;
pub mod error;
pub mod samples;
pub mod store;

pub use config::{DEFAULT_SERVER_NAME, LoggingConfig, ServerConfig, ServerSection};
pub use error::{Error, Result};
pub use samples::sample_notes;
pub use store::NoteStore;
