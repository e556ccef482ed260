//! Notes MCP Server
//!
//! A Model Context Protocol server exposing an in-memory note store to
//! agent hosts.
//!
//! # Usage
//!
//! ```bash
//! notes-mcp [--config <path>] [--log-file <path>] [--samples]
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Control log verbosity (default: `notes_mcp=info,notes_core=info`)
//!
//! # Protocol
//!
//! The server communicates via JSON-RPC 2.0 over stdio:
//! - Requests/responses go through stdout, one JSON value per line
//! - Logs go to stderr (to avoid interfering with the protocol)

use std::path::PathBuf;

use clap::Parser;
use notes_core::{ServerConfig, sample_notes};
use notes_mcp::{NotesMcpServer, logging};

/// MCP server for a key-value note store
#[derive(Parser)]
#[command(name = "notes-mcp")]
#[command(about = "MCP server for a key-value note store")]
#[command(version)]
struct Args {
    /// TOML configuration file (server identity, log file, seed notes)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Also write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Pre-populate the store with built-in sample notes
    #[arg(long)]
    samples: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };

    // Initialize logging to stderr (stdout is reserved for MCP protocol)
    let log_file = args.log_file.as_deref().or(config.logging.file.as_deref());
    logging::init(log_file).map_err(|e| e as Box<dyn std::error::Error>)?;

    let mut store = config.seed_store();
    if args.samples {
        store.extend(sample_notes());
    }

    tracing::info!(
        config = ?args.config,
        notes = store.len(),
        "Starting notes-mcp server"
    );

    let version = config
        .server
        .version
        .clone()
        .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string());
    let mut server = NotesMcpServer::new(store).with_server_info(config.server.name, version);

    if let Err(e) = server.run().await {
        tracing::error!(error = %e, "Server terminated");
        return Err(e.into());
    }

    Ok(())
}
