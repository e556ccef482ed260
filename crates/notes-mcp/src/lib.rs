//! MCP Server for a key-value note store
//!
//! This crate exposes an in-memory note store via the Model Context Protocol
//! (MCP), so agent hosts (Claude Desktop, IDEs, scripted clients) can create,
//! read, list and delete short text notes.
//!
//! # Architecture
//!
//! ```text
//! [ MCP Client (agent host) ]
//!        | (newline-delimited JSON-RPC over stdio)
//!        v
//! [ notes-mcp (NotesMcpServer) ]
//!        | (Rust API)
//!        v
//! [ notes-core (NoteStore) ]
//! ```
//!
//! # Tools
//!
//! - `create_note` - Insert or overwrite a note
//! - `get_note` - Show a note
//! - `list_notes` - List note ids
//! - `delete_note` - Remove a note
//!
//! Tool failures (missing arguments, unknown notes, unknown tools) come back
//! as successful responses whose text starts with `"Error: "`.
//!
//! # Resources
//!
//! Each note is readable at `note://<id>` as `text/plain`.

pub mod error;
pub mod handlers;
pub mod logging;
pub mod protocol;
pub mod resource_handlers;
pub mod resources;
pub mod server;
pub mod tools;

pub use error::{Error, Result};
pub use server::NotesMcpServer;
pub use tools::{NoteTool, ToolContent, ToolDefinition, ToolResult, get_tool_definitions};
