//! MCP Resource Handlers
//!
//! Read-only access to stored notes by `note://<id>` URI.

use notes_core::NoteStore;

use crate::resources::{NOTE_MIME_TYPE, NOTE_URI_SCHEME, ResourceContent};
use crate::{Error, Result};

/// Read a resource by URI
///
/// # Errors
///
/// - `Error::UnsupportedScheme` if the URI does not start with `note://`
/// - `Error::Core(NoteNotFound)` if no note is stored under the id
pub fn read_resource(store: &NoteStore, uri: &str) -> Result<ResourceContent> {
    let id = uri
        .strip_prefix(NOTE_URI_SCHEME)
        .ok_or_else(|| Error::UnsupportedScheme {
            uri: uri.to_string(),
        })?;

    let body = store.get(id)?;

    Ok(ResourceContent {
        uri: uri.to_string(),
        mime_type: NOTE_MIME_TYPE.to_string(),
        text: body.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_note_resource() {
        let store = NoteStore::from_seed([("todo", "buy milk")]);
        let content = read_resource(&store, "note://todo").unwrap();
        assert_eq!(content.uri, "note://todo");
        assert_eq!(content.mime_type, "text/plain");
        assert_eq!(content.text, "buy milk");
    }

    #[test]
    fn test_unsupported_scheme() {
        let store = NoteStore::from_seed([("todo", "buy milk")]);
        match read_resource(&store, "file:///etc/passwd") {
            Err(e @ Error::UnsupportedScheme { .. }) => {
                assert_eq!(e.to_string(), "Unsupported URI scheme: file:///etc/passwd");
            }
            other => panic!("Expected UnsupportedScheme, got {:?}", other),
        }
    }

    #[test]
    fn test_scheme_match_is_case_sensitive() {
        let store = NoteStore::from_seed([("todo", "buy milk")]);
        assert!(matches!(
            read_resource(&store, "NOTE://todo"),
            Err(Error::UnsupportedScheme { .. })
        ));
    }

    #[test]
    fn test_missing_note() {
        let store = NoteStore::new();
        let err = read_resource(&store, "note://ghost").unwrap_err();
        assert!(matches!(
            err,
            Error::Core(notes_core::Error::NoteNotFound { .. })
        ));
        assert_eq!(err.to_string(), "Note not found: ghost");
    }

    #[test]
    fn test_empty_id_is_not_found() {
        let store = NoteStore::from_seed([("todo", "buy milk")]);
        let err = read_resource(&store, "note://").unwrap_err();
        assert_eq!(err.to_string(), "Note not found: ");
    }
}
