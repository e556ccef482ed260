//! MCP Protocol Compliance Integration Tests
//!
//! Tests that the MCP server correctly implements JSON-RPC 2.0 and the
//! notes tool/resource contract: ID preservation, error codes, notification
//! handling, and end-to-end note workflows through `handle_message`.

use notes_core::NoteStore;
use notes_mcp::NotesMcpServer;
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

/// Create a server with an empty store.
fn setup_server() -> NotesMcpServer {
    NotesMcpServer::new(NoteStore::new())
}

/// Send one request and parse its response.
async fn request(server: &mut NotesMcpServer, message: &str) -> Value {
    let response = server
        .handle_message(message)
        .await
        .unwrap()
        .expect("request must produce a response");
    serde_json::from_str(&response).unwrap()
}

/// Invoke a tool and return the text of its single content element.
async fn call_tool(server: &mut NotesMcpServer, name: &str, arguments: Value) -> String {
    let message = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "tools/call",
        "params": {"name": name, "arguments": arguments}
    })
    .to_string();
    let response = request(server, &message).await;

    assert!(
        response.get("error").is_none(),
        "tools/call must never fail at the RPC level, got: {}",
        response
    );
    let content = response["result"]["content"].as_array().unwrap();
    assert_eq!(content.len(), 1, "Tool results carry exactly one element");
    assert_eq!(content[0]["type"], "text");
    content[0]["text"].as_str().unwrap().to_string()
}

async fn read_resource(server: &mut NotesMcpServer, uri: &str) -> Value {
    let message = json!({
        "jsonrpc": "2.0",
        "id": 1,
        "method": "resources/read",
        "params": {"uri": uri}
    })
    .to_string();
    request(server, &message).await
}

// ==========================================================================
// JSON-RPC 2.0 ID Preservation
// ==========================================================================

#[tokio::test]
async fn test_numeric_id_preserved_in_response() {
    let mut server = setup_server();

    let response = request(
        &mut server,
        r#"{"jsonrpc":"2.0","id":42,"method":"initialize","params":{}}"#,
    )
    .await;

    assert_eq!(response["id"], 42, "Numeric ID must be echoed back exactly");
    assert_eq!(response["jsonrpc"], "2.0");
}

#[tokio::test]
async fn test_string_id_preserved_in_response() {
    let mut server = setup_server();

    let response = request(
        &mut server,
        r#"{"jsonrpc":"2.0","id":"req-abc-123","method":"tools/list"}"#,
    )
    .await;

    assert_eq!(response["id"], "req-abc-123");
}

#[tokio::test]
async fn test_id_preserved_in_error_response() {
    let mut server = setup_server();

    let response = request(
        &mut server,
        r#"{"jsonrpc":"2.0","id":"err-test","method":"resources/read","params":{"uri":"note://missing"}}"#,
    )
    .await;

    assert_eq!(response["id"], "err-test");
    assert!(response.get("error").is_some());
}

// ==========================================================================
// Error Codes
// ==========================================================================

#[tokio::test]
async fn test_method_not_found_returns_32601() {
    let mut server = setup_server();

    let response = request(
        &mut server,
        r#"{"jsonrpc":"2.0","id":1,"method":"completely/unknown","params":{}}"#,
    )
    .await;

    assert_eq!(response["error"]["code"], -32601);
    let msg = response["error"]["message"].as_str().unwrap();
    assert!(
        msg.contains("completely/unknown"),
        "Error message should include the unknown method name, got: {}",
        msg
    );
}

#[tokio::test]
async fn test_malformed_json_is_an_error() {
    let mut server = setup_server();
    assert!(server.handle_message(r#"{"not valid json"#).await.is_err());
}

#[tokio::test]
async fn test_missing_method_field_returns_32600_with_id() {
    let mut server = setup_server();

    let response = request(&mut server, r#"{"jsonrpc":"2.0","id":5,"params":{}}"#).await;

    assert_eq!(response["error"]["code"], -32600);
    assert_eq!(response["id"], 5, "Invalid requests must still echo their id");
}

#[tokio::test]
async fn test_resources_read_without_uri_returns_32602() {
    let mut server = setup_server();

    let response = request(
        &mut server,
        r#"{"jsonrpc":"2.0","id":1,"method":"resources/read","params":{"wrong_field":"value"}}"#,
    )
    .await;

    assert_eq!(response["error"]["code"], -32602);
    assert_eq!(response["id"], 1);
}

#[tokio::test]
async fn test_tools_call_with_non_object_params_returns_32602() {
    let mut server = setup_server();

    let response = request(
        &mut server,
        r#"{"jsonrpc":"2.0","id":1,"method":"tools/call","params":"not-an-object"}"#,
    )
    .await;

    assert_eq!(response["error"]["code"], -32602);
}

#[tokio::test]
async fn test_unsupported_scheme_is_rpc_error() {
    let mut server = setup_server();

    let response = read_resource(&mut server, "repo://config").await;

    assert_eq!(response["error"]["code"], -32602);
    assert_eq!(
        response["error"]["message"],
        "Unsupported URI scheme: repo://config"
    );
    assert!(response.get("result").is_none());
}

#[tokio::test]
async fn test_missing_note_resource_is_rpc_error() {
    let mut server = setup_server();

    let response = read_resource(&mut server, "note://nobody").await;

    assert_eq!(response["error"]["code"], -32602);
    assert_eq!(response["error"]["message"], "Note not found: nobody");
}

// ==========================================================================
// Handshake and Notifications
// ==========================================================================

#[tokio::test]
async fn test_initialize_returns_server_info() {
    let mut server = setup_server();

    let response = request(
        &mut server,
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{"protocolVersion":"2024-11-05","capabilities":{},"clientInfo":{"name":"test","version":"1.0"}}}"#,
    )
    .await;

    let result = &response["result"];
    assert_eq!(result["protocolVersion"], "2024-11-05");
    assert_eq!(result["serverInfo"]["name"], "notes-server");
    let version = result["serverInfo"]["version"].as_str().unwrap();
    assert!(version.contains('.'), "Version should be semver-like, got: {}", version);
    assert!(result["capabilities"].get("tools").is_some());
    assert!(result["capabilities"].get("resources").is_some());
}

#[tokio::test]
async fn test_notifications_produce_no_response() {
    let mut server = setup_server();

    for message in [
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        r#"{"jsonrpc":"2.0","method":"initialized"}"#,
        r#"{"jsonrpc":"2.0","id":null,"method":"tools/list"}"#,
    ] {
        let response = server.handle_message(message).await.unwrap();
        assert!(response.is_none(), "{} must not be answered", message);
    }
}

#[tokio::test]
async fn test_notification_cannot_mutate_through_tools_call() {
    let mut server = setup_server();

    // A notification is never answered, but it is also never dispatched
    let message = r#"{"jsonrpc":"2.0","method":"tools/call","params":{"name":"create_note","arguments":{"note_id":"n","content":"c"}}}"#;
    assert!(server.handle_message(message).await.unwrap().is_none());
    assert!(server.store().is_empty());
}

// ==========================================================================
// Tools and Resources
// ==========================================================================

#[tokio::test]
async fn test_tools_list_returns_catalog() {
    let mut server = setup_server();

    let response = request(
        &mut server,
        r#"{"jsonrpc":"2.0","id":1,"method":"tools/list","params":{}}"#,
    )
    .await;

    let tools = response["result"]["tools"].as_array().unwrap();
    let names: Vec<&str> = tools.iter().map(|t| t["name"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["create_note", "get_note", "list_notes", "delete_note"]);

    for tool in tools {
        assert!(tool["description"].is_string());
        assert!(tool["inputSchema"].is_object());
    }
}

#[tokio::test]
async fn test_full_note_workflow() {
    let mut server = setup_server();

    assert_eq!(call_tool(&mut server, "list_notes", json!({})).await, "No notes available");

    assert_eq!(
        call_tool(
            &mut server,
            "create_note",
            json!({"note_id": "meeting", "content": "Discuss roadmap"})
        )
        .await,
        "Note 'meeting' created successfully"
    );
    call_tool(
        &mut server,
        "create_note",
        json!({"note_id": "ideas", "content": "Ship it"}),
    )
    .await;

    assert_eq!(
        call_tool(&mut server, "list_notes", json!({})).await,
        "Available notes:\n- ideas\n- meeting"
    );
    assert_eq!(
        call_tool(&mut server, "get_note", json!({"note_id": "meeting"})).await,
        "Note 'meeting':\nDiscuss roadmap"
    );
    assert_eq!(
        call_tool(&mut server, "delete_note", json!({"note_id": "meeting"})).await,
        "Note 'meeting' deleted successfully"
    );
    assert_eq!(
        call_tool(&mut server, "get_note", json!({"note_id": "meeting"})).await,
        "Error: Note 'meeting' not found"
    );
    assert_eq!(
        call_tool(&mut server, "list_notes", json!({})).await,
        "Available notes:\n- ideas"
    );
}

#[tokio::test]
async fn test_create_overwrites_existing_note() {
    let mut server = setup_server();

    call_tool(&mut server, "create_note", json!({"note_id": "x", "content": "a"})).await;
    call_tool(&mut server, "create_note", json!({"note_id": "x", "content": "b"})).await;

    assert_eq!(
        call_tool(&mut server, "get_note", json!({"note_id": "x"})).await,
        "Note 'x':\nb"
    );
}

#[tokio::test]
async fn test_get_note_is_idempotent() {
    let mut server = NotesMcpServer::new(NoteStore::from_seed([("a", "alpha"), ("b", "beta")]));

    for id in ["a", "b", "missing"] {
        let first = call_tool(&mut server, "get_note", json!({"note_id": id})).await;
        let second = call_tool(&mut server, "get_note", json!({"note_id": id})).await;
        assert_eq!(first, second);
    }
}

#[tokio::test]
async fn test_missing_argument_guard_does_not_mutate() {
    let mut server = NotesMcpServer::new(NoteStore::from_seed([("keep", "me")]));
    let before = call_tool(&mut server, "list_notes", json!({})).await;

    let text = call_tool(&mut server, "create_note", json!({"content": "orphan"})).await;
    assert_eq!(text, "Error: Both note_id and content are required");

    let after = call_tool(&mut server, "list_notes", json!({})).await;
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_unknown_tool_is_reported_not_raised() {
    let mut server = NotesMcpServer::new(NoteStore::from_seed([("keep", "me")]));

    let text = call_tool(&mut server, "bogus", json!({})).await;
    assert_eq!(text, "Error: Unknown tool 'bogus'");
    assert_eq!(server.store().len(), 1);
}

#[tokio::test]
async fn test_resources_mirror_tool_view() {
    let mut server = setup_server();
    for (id, body) in [("alpha", "first body"), ("beta", "second\nline")] {
        call_tool(
            &mut server,
            "create_note",
            json!({"note_id": id, "content": body}),
        )
        .await;
    }

    let listed = request(
        &mut server,
        r#"{"jsonrpc":"2.0","id":2,"method":"resources/list"}"#,
    )
    .await;
    let resources = listed["result"]["resources"].as_array().unwrap().clone();
    assert_eq!(resources.len(), 2);

    let ids: Vec<String> = server.store().list().map(str::to_string).collect();
    for id in ids {
        let uri = format!("note://{}", id);
        let descriptor = resources
            .iter()
            .find(|r| r["uri"] == uri.as_str())
            .unwrap_or_else(|| panic!("No descriptor for {}", uri));
        assert_eq!(descriptor["mimeType"], "text/plain");
        assert_eq!(descriptor["name"], format!("Note: {}", id));

        let read = read_resource(&mut server, &uri).await;
        let body = read["result"]["contents"][0]["text"].as_str().unwrap().to_string();

        let shown = call_tool(&mut server, "get_note", json!({"note_id": id})).await;
        assert_eq!(shown, format!("Note '{}':\n{}", id, body));
    }
}
