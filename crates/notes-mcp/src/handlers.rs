//! MCP Tool Handlers
//!
//! Executes `tools/call` against a [`NoteStore`].
//!
//! Every outcome, including missing arguments, unknown notes and unknown
//! tools, is returned as a [`ToolResult`] holding one text element. Failures
//! are reported as text beginning with `"Error: "`; callers detect them by
//! inspecting the text, never through the JSON-RPC error channel.

use notes_core::NoteStore;
use serde_json::Value;
use tracing::debug;

use crate::tools::{NoteTool, ToolResult};

/// Handle a tool call by dispatching to the appropriate handler
pub fn handle_tool_call(store: &mut NoteStore, tool_name: &str, arguments: &Value) -> ToolResult {
    let tool = match tool_name.parse::<NoteTool>() {
        Ok(tool) => tool,
        Err(e) => {
            debug!(tool = %tool_name, "Rejected unknown tool");
            return ToolResult::text(format!("Error: {}", e));
        }
    };

    let text = match tool {
        NoteTool::CreateNote => create_note(store, arguments),
        NoteTool::GetNote => get_note(store, arguments),
        NoteTool::ListNotes => list_notes(store),
        NoteTool::DeleteNote => delete_note(store, arguments),
    };
    ToolResult::text(text)
}

/// Fetch a string argument, treating absent, non-string and empty values as missing
fn string_arg<'a>(arguments: &'a Value, key: &str) -> Option<&'a str> {
    arguments
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

fn create_note(store: &mut NoteStore, arguments: &Value) -> String {
    let (Some(note_id), Some(content)) = (
        string_arg(arguments, "note_id"),
        string_arg(arguments, "content"),
    ) else {
        return "Error: Both note_id and content are required".to_string();
    };

    match store.put(note_id, content) {
        Ok(replaced) => {
            debug!(note_id, replaced, "Stored note");
            format!("Note '{}' created successfully", note_id)
        }
        // Unreachable while note_id is non-empty
        Err(e) => format!("Error: {}", e),
    }
}

fn get_note(store: &NoteStore, arguments: &Value) -> String {
    let Some(note_id) = string_arg(arguments, "note_id") else {
        return "Error: note_id is required".to_string();
    };

    match store.get(note_id) {
        Ok(body) => format!("Note '{}':\n{}", note_id, body),
        Err(_) => format!("Error: Note '{}' not found", note_id),
    }
}

fn list_notes(store: &NoteStore) -> String {
    if store.is_empty() {
        return "No notes available".to_string();
    }

    let lines: Vec<String> = store.list().map(|id| format!("- {}", id)).collect();
    format!("Available notes:\n{}", lines.join("\n"))
}

fn delete_note(store: &mut NoteStore, arguments: &Value) -> String {
    let Some(note_id) = string_arg(arguments, "note_id") else {
        return "Error: note_id is required".to_string();
    };

    match store.delete(note_id) {
        Ok(_) => {
            debug!(note_id, "Deleted note");
            format!("Note '{}' deleted successfully", note_id)
        }
        Err(_) => format!("Error: Note '{}' not found", note_id),
    }
}
