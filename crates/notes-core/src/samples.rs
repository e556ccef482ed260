//! Built-in sample notes, loaded with `notes-mcp --samples`

/// The fixed set of sample notes
pub fn sample_notes() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "welcome",
            "Welcome to the notes server. Use create_note to add your own notes.",
        ),
        ("shopping", "- milk\n- eggs\n- coffee"),
        (
            "mcp-tips",
            "Notes are also readable as resources at note://<id>.",
        ),
    ]
}
