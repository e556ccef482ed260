//! MCP Server implementation
//!
//! The main server struct that owns the note store and translates
//! JSON-RPC messages into store operations.

use std::io::{BufRead, Write};

use notes_core::{DEFAULT_SERVER_NAME, NoteStore};
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::handlers::handle_tool_call;
use crate::protocol::{
    InitializeParams, InitializeResult, JSONRPC_VERSION, JsonRpcRequest, JsonRpcResponse,
    PROTOCOL_VERSION, ReadResourceParams, ResourcesCapability, ServerCapabilities, ServerInfo,
    ToolCallParams, ToolsCapability, error_codes, methods,
};
use crate::resource_handlers::read_resource;
use crate::resources::get_resource_definitions;
use crate::tools::get_tool_definitions;
use crate::{Error, Result};

/// MCP Server for the note store
///
/// Messages are handled strictly one at a time: `handle_message` takes
/// `&mut self`, so the store is never observed mid-update.
///
/// # Example
///
/// ```ignore
/// use notes_core::NoteStore;
/// use notes_mcp::NotesMcpServer;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut server = NotesMcpServer::new(NoteStore::new());
///     server.run().await?;
///     Ok(())
/// }
/// ```
pub struct NotesMcpServer {
    /// All note state
    store: NoteStore,

    /// Identity advertised in the `initialize` response
    info: ServerInfo,

    /// Whether a client has completed `initialize`
    initialized: bool,
}

impl NotesMcpServer {
    /// Create a server around an existing store
    pub fn new(store: NoteStore) -> Self {
        Self {
            store,
            info: ServerInfo {
                name: DEFAULT_SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            initialized: false,
        }
    }

    /// Override the advertised server name and version
    pub fn with_server_info(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.info = ServerInfo {
            name: name.into(),
            version: version.into(),
        };
        self
    }

    /// Run the MCP server over stdin/stdout
    pub async fn run(&mut self) -> Result<()> {
        let stdin = std::io::stdin();
        let stdout = std::io::stdout();

        info!(
            name = %self.info.name,
            notes = self.store.len(),
            "MCP server ready, listening on stdio"
        );

        self.serve(stdin.lock(), stdout.lock()).await
    }

    /// Process newline-delimited JSON-RPC messages until `reader` is exhausted
    ///
    /// Blank lines are ignored. A line that is not UTF-8 or not JSON is
    /// answered with a parse error (`id: null`) and skipped. I/O errors on
    /// either stream end the loop and are returned.
    pub async fn serve<R: BufRead, W: Write>(&mut self, mut reader: R, mut writer: W) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }

            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line.trim(),
                Err(e) => {
                    warn!(error = %e, "Skipping message that is not valid UTF-8");
                    write_line(&mut writer, &parse_error(e)?)?;
                    continue;
                }
            };
            if line.is_empty() {
                continue;
            }

            debug!(request = %line, "Received message");

            let response = match self.handle_message(line).await {
                Ok(Some(response)) => response,
                Ok(None) => continue, // Notification, no response
                Err(Error::Json(e)) => {
                    warn!(error = %e, "Skipping malformed message");
                    parse_error(e)?
                }
                Err(e) => {
                    warn!(error = %e, "Failed to handle message");
                    let error_response = JsonRpcResponse::error(
                        None,
                        error_codes::INTERNAL_ERROR,
                        format!("Internal error: {}", e),
                    );
                    serde_json::to_string(&error_response)?
                }
            };

            debug!(response = %response, "Sending response");
            write_line(&mut writer, &response)?;
        }

        info!("Input closed, shutting down");
        Ok(())
    }

    /// Handle a single MCP message
    ///
    /// Returns the serialized response, or `None` for notifications.
    ///
    /// JSON that does not have the shape of a request is answered with
    /// `-32600`, echoing its `id` when one is present.
    ///
    /// # Errors
    ///
    /// `Error::Json` if `message` is not JSON at all.
    pub async fn handle_message(&mut self, message: &str) -> Result<Option<String>> {
        let value: Value = serde_json::from_str(message)?;
        let id = value.get("id").cloned();
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => {
                warn!(error = %e, "Rejecting invalid request");
                let response = JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_REQUEST,
                    format!("Invalid Request: {}", e),
                );
                return Ok(Some(serde_json::to_string(&response)?));
            }
        };

        if request.is_notification() {
            self.handle_notification(&request.method);
            return Ok(None);
        }

        let id = request.id;
        let response = if request.jsonrpc != JSONRPC_VERSION {
            JsonRpcResponse::error(
                id,
                error_codes::INVALID_REQUEST,
                format!("Invalid Request: unsupported jsonrpc version '{}'", request.jsonrpc),
            )
        } else {
            match request.method.as_str() {
                methods::INITIALIZE => self.handle_initialize(id, request.params)?,
                methods::PING => JsonRpcResponse::success(id, json!({})),
                methods::TOOLS_LIST => self.handle_tools_list(id)?,
                methods::TOOLS_CALL => self.handle_tools_call(id, request.params)?,
                methods::RESOURCES_LIST => self.handle_resources_list(id)?,
                methods::RESOURCES_READ => self.handle_resources_read(id, request.params)?,
                _ => JsonRpcResponse::error(
                    id,
                    error_codes::METHOD_NOT_FOUND,
                    format!("Method not found: {}", request.method),
                ),
            }
        };

        Ok(Some(serde_json::to_string(&response)?))
    }

    fn handle_notification(&self, method: &str) {
        match method {
            methods::INITIALIZED | methods::LEGACY_INITIALIZED => {
                debug!("Client finished initialization");
            }
            _ => debug!(method, "Ignoring notification"),
        }
    }

    /// Handle the initialize request
    ///
    /// Returns server capabilities and info.
    fn handle_initialize(&mut self, id: Option<Value>, params: Value) -> Result<JsonRpcResponse> {
        // Client details are informational only
        let params: InitializeParams = serde_json::from_value(params).unwrap_or_default();
        info!(
            client = ?params.client_info.as_ref().map(|c| &c.name),
            protocol_version = ?params.protocol_version,
            "Initializing MCP session"
        );

        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
                resources: Some(ResourcesCapability {
                    subscribe: Some(false),
                    list_changed: Some(false),
                }),
            },
            server_info: self.info.clone(),
        };

        self.initialized = true;
        Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?))
    }

    /// Handle tools/list request
    fn handle_tools_list(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        let tools = serde_json::to_value(get_tool_definitions())?;
        Ok(JsonRpcResponse::success(id, json!({ "tools": tools })))
    }

    /// Handle tools/call request
    ///
    /// Tool failures are reported inside a successful response; only
    /// malformed params produce a JSON-RPC error.
    fn handle_tools_call(&mut self, id: Option<Value>, params: Value) -> Result<JsonRpcResponse> {
        let tool_params: ToolCallParams = match serde_json::from_value(params) {
            Ok(params) => params,
            Err(e) => return Ok(invalid_params(id, e)),
        };

        debug!(tool = %tool_params.name, "Calling tool");
        let result = handle_tool_call(&mut self.store, &tool_params.name, &tool_params.arguments);
        Ok(JsonRpcResponse::success(id, serde_json::to_value(result)?))
    }

    /// Handle resources/list request
    fn handle_resources_list(&self, id: Option<Value>) -> Result<JsonRpcResponse> {
        let resources = serde_json::to_value(get_resource_definitions(&self.store))?;
        Ok(JsonRpcResponse::success(
            id,
            json!({ "resources": resources }),
        ))
    }

    /// Handle resources/read request
    fn handle_resources_read(&self, id: Option<Value>, params: Value) -> Result<JsonRpcResponse> {
        let read_params: ReadResourceParams = match serde_json::from_value(params) {
            Ok(params) => params,
            Err(e) => return Ok(invalid_params(id, e)),
        };

        match read_resource(&self.store, &read_params.uri) {
            Ok(content) => {
                let content = serde_json::to_value(content)?;
                Ok(JsonRpcResponse::success(
                    id,
                    json!({ "contents": [content] }),
                ))
            }
            Err(e) => {
                warn!(uri = %read_params.uri, error = %e, "Resource read failed");
                Ok(JsonRpcResponse::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    e.to_string(),
                ))
            }
        }
    }

    /// Get the note store
    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Get the advertised server identity
    pub fn server_info(&self) -> &ServerInfo {
        &self.info
    }

    /// Check if a client has completed `initialize`
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

fn parse_error(e: impl std::fmt::Display) -> Result<String> {
    let response = JsonRpcResponse::error(
        None,
        error_codes::PARSE_ERROR,
        format!("Parse error: {}", e),
    );
    Ok(serde_json::to_string(&response)?)
}

fn write_line<W: Write>(writer: &mut W, line: &str) -> Result<()> {
    writeln!(writer, "{}", line)?;
    writer.flush()?;
    Ok(())
}

fn invalid_params(id: Option<Value>, e: serde_json::Error) -> JsonRpcResponse {
    JsonRpcResponse::error(
        id,
        error_codes::INVALID_PARAMS,
        Error::InvalidParams(e.to_string()).to_string(),
    )
}
