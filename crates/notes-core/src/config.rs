//! Server configuration parsed from a TOML file
//!
//! All sections are optional; an empty file yields the defaults.
//!
//! ```toml
//! [server]
//! name = "notes-server"
//! version = "0.1.0"
//!
//! [logging]
//! file = "notes-mcp.log"
//!
//! [seed]
//! welcome = "Hello from the notes server"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Error, NoteStore, Result};

/// Default server name advertised during `initialize`
pub const DEFAULT_SERVER_NAME: &str = "notes-server";

fn default_name() -> String {
    DEFAULT_SERVER_NAME.to_string()
}

/// Identity advertised to clients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerSection {
    #[serde(default = "default_name")]
    pub name: String,

    /// Advertised version; the binary's own version when unset
    #[serde(default)]
    pub version: Option<String>,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            name: default_name(),
            version: None,
        }
    }
}

/// Log sinks in addition to stderr
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Append logs to this file as well
    #[serde(default)]
    pub file: Option<PathBuf>,
}

/// Top-level server configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Notes loaded into the store at startup, keyed by note id
    #[serde(default)]
    pub seed: BTreeMap<String, String>,
}

impl ServerConfig {
    /// Parse a configuration from TOML content
    ///
    /// # Example
    ///
    /// ```
    /// use notes_core::ServerConfig;
    ///
    /// let config = ServerConfig::parse(r#"
    /// [seed]
    /// todo = "write tests"
    /// "#).unwrap();
    ///
    /// assert_eq!(config.server.name, "notes-server");
    /// assert_eq!(config.seed["todo"], "write tests");
    /// ```
    pub fn parse(content: &str) -> Result<Self> {
        let config: ServerConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Load a configuration file
    ///
    /// Fails with [`Error::ConfigNotFound`] if `path` does not exist.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::parse(&content)?;
        tracing::debug!(
            path = %path.display(),
            seed_notes = config.seed.len(),
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Build a store holding this configuration's seed notes
    pub fn seed_store(&self) -> NoteStore {
        NoteStore::from_seed(self.seed.iter().map(|(id, body)| (id.as_str(), body.as_str())))
    }
}
