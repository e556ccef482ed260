//! MCP Resource definitions
//!
//! Every stored note is exposed as a read-only resource:
//!
//! | URI | Name | Content-Type |
//! |-----|------|--------------|
//! | `note://<id>` | `Note: <id>` | text/plain |

use notes_core::NoteStore;
use serde::{Deserialize, Serialize};

/// URI prefix identifying note resources
pub const NOTE_URI_SCHEME: &str = "note://";

/// MIME type of every note resource
pub const NOTE_MIME_TYPE: &str = "text/plain";

/// Resource descriptor returned by `resources/list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDefinition {
    pub uri: String,
    pub name: String,
    pub description: String,
    pub mime_type: String,
}

/// Content returned by `resources/read`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceContent {
    pub uri: String,
    pub mime_type: String,
    pub text: String,
}

/// Build the resource URI for a note id
pub fn note_uri(id: &str) -> String {
    format!("{}{}", NOTE_URI_SCHEME, id)
}

impl ResourceDefinition {
    pub fn for_note(id: &str) -> Self {
        Self {
            uri: note_uri(id),
            name: format!("Note: {}", id),
            description: format!("A note with ID {}", id),
            mime_type: NOTE_MIME_TYPE.to_string(),
        }
    }
}

/// Get one resource definition per stored note, in store order
pub fn get_resource_definitions(store: &NoteStore) -> Vec<ResourceDefinition> {
    store.list().map(ResourceDefinition::for_note).collect()
}
