//! MCP Tool definitions
//!
//! Tools are the action-oriented surface of the server. The set of tools is
//! closed: [`NoteTool`] names every tool, and both the catalog returned by
//! `tools/list` and the dispatcher in [`crate::handlers`] match on it
//! exhaustively.
//!
//! | Tool | Required arguments | Effect |
//! |------|--------------------|--------|
//! | `create_note` | `note_id`, `content` | Insert or overwrite a note |
//! | `get_note` | `note_id` | Show a note's body |
//! | `list_notes` | - | List note ids |
//! | `delete_note` | `note_id` | Remove a note |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// The tools this server exposes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoteTool {
    CreateNote,
    GetNote,
    ListNotes,
    DeleteNote,
}

impl NoteTool {
    /// Every tool, in catalog order
    pub const ALL: [NoteTool; 4] = [
        NoteTool::CreateNote,
        NoteTool::GetNote,
        NoteTool::ListNotes,
        NoteTool::DeleteNote,
    ];

    /// Wire name used in `tools/list` and `tools/call`
    pub fn name(self) -> &'static str {
        match self {
            NoteTool::CreateNote => "create_note",
            NoteTool::GetNote => "get_note",
            NoteTool::ListNotes => "list_notes",
            NoteTool::DeleteNote => "delete_note",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            NoteTool::CreateNote => "Create a new note with an ID and content",
            NoteTool::GetNote => "Retrieve a note by its ID",
            NoteTool::ListNotes => "List all available notes",
            NoteTool::DeleteNote => "Delete a note by its ID",
        }
    }

    /// JSON schema describing the tool's arguments
    pub fn input_schema(self) -> Value {
        match self {
            NoteTool::CreateNote => json!({
                "type": "object",
                "properties": {
                    "note_id": {
                        "type": "string",
                        "description": "Unique identifier for the note"
                    },
                    "content": {
                        "type": "string",
                        "description": "The content of the note"
                    }
                },
                "required": ["note_id", "content"]
            }),
            NoteTool::GetNote => json!({
                "type": "object",
                "properties": {
                    "note_id": {
                        "type": "string",
                        "description": "The ID of the note to retrieve"
                    }
                },
                "required": ["note_id"]
            }),
            NoteTool::ListNotes => json!({
                "type": "object",
                "properties": {},
                "required": []
            }),
            NoteTool::DeleteNote => json!({
                "type": "object",
                "properties": {
                    "note_id": {
                        "type": "string",
                        "description": "The ID of the note to delete"
                    }
                },
                "required": ["note_id"]
            }),
        }
    }

    pub fn definition(self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            description: self.description().to_string(),
            input_schema: self.input_schema(),
        }
    }
}

/// Error returned when a tool name is not one of [`NoteTool::ALL`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTool(pub String);

impl fmt::Display for UnknownTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown tool '{}'", self.0)
    }
}

impl std::error::Error for UnknownTool {}

impl FromStr for NoteTool {
    type Err = UnknownTool;

    // Exact, case-sensitive match on the wire name
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        NoteTool::ALL
            .into_iter()
            .find(|tool| tool.name() == s)
            .ok_or_else(|| UnknownTool(s.to_string()))
    }
}

impl fmt::Display for NoteTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Tool definition for MCP protocol
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// Result from a tool invocation
///
/// Always carries exactly one text element. Failures inside a tool are
/// reported as text starting with `"Error: "`, not through `isError`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    pub content: Vec<ToolContent>,
}

/// Content types for tool results
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ToolContent {
    #[serde(rename = "text")]
    Text { text: String },
}

impl ToolResult {
    /// Create a text result
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: content.into(),
            }],
        }
    }

    /// The text of the result's single content element
    pub fn as_text(&self) -> &str {
        match self.content.first() {
            Some(ToolContent::Text { text }) => text,
            None => "",
        }
    }
}

/// Get all available tool definitions
pub fn get_tool_definitions() -> Vec<ToolDefinition> {
    NoteTool::ALL.into_iter().map(NoteTool::definition).collect()
}
