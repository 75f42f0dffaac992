//! JSON-RPC and MCP message types for tool host communication.
//!
//! # Protocol Overview
//!
//! - **Framing**: one JSON object per line over the child's stdin/stdout
//! - **Requests**: client → host (`initialize`, `tools/list`, `tools/call`)
//! - **Responses**: host → client (result or error)
//! - **Notifications**: either direction, no `id` (`notifications/initialized`,
//!   host log messages)
//! - **Server requests**: host → client with `id` + `method` (e.g. `ping`)

use conductor_domain::{ArgumentRecord, CallResult, ContentBlock, ToolDescriptor};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::sync::atomic::{AtomicU64, Ordering};

/// MCP protocol revision sent during `initialize`.
pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";

/// JSON-RPC "method not found" error code.
pub const METHOD_NOT_FOUND: i64 = -32601;

/// Global request ID counter for JSON-RPC requests.
static REQUEST_ID: AtomicU64 = AtomicU64::new(1);

/// Generates a unique request ID.
fn next_id() -> u64 {
    REQUEST_ID.fetch_add(1, Ordering::SeqCst)
}

/// JSON-RPC request
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: &'static str,
    pub id: u64,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Creates a new JSON-RPC request with an auto-generated ID.
    pub fn new(method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: "2.0",
            id: next_id(),
            method: method.into(),
            params,
        }
    }
}

/// JSON-RPC notification (no `id`, no response expected)
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcNotification {
    pub jsonrpc: &'static str,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

impl JsonRpcNotification {
    pub fn new(method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            jsonrpc: "2.0",
            method: method.into(),
            params,
        }
    }
}

/// JSON-RPC response
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcResponse {
    #[serde(default)]
    pub jsonrpc: String,
    pub id: Option<u64>,
    pub result: Option<Value>,
    pub error: Option<RpcError>,
}

/// JSON-RPC error object
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// JSON-RPC response sent from client → host (answers a server request).
///
/// Server request ids may be numbers or strings, so the id is kept raw.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponseOut {
    pub jsonrpc: &'static str,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

impl JsonRpcResponseOut {
    pub fn result(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    pub fn method_not_found(id: Value, method: &str) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(RpcError {
                code: METHOD_NOT_FOUND,
                message: format!("Method not found: {}", method),
                data: None,
            }),
        }
    }
}

/// Classification of an incoming JSON-RPC message.
#[derive(Debug, PartialEq)]
pub enum MessageKind {
    /// A response to a request we sent (has `id`, no `method`).
    Response,
    /// A request from the host (has `id` + `method`), e.g. `ping`.
    IncomingRequest { id: Value },
    /// A notification (has `method`, no `id`), e.g. `notifications/message`.
    Notification,
    /// An error with a null or missing `id` and no `method`, sent when the
    /// host could not tell which request failed (e.g. a parse error).
    UnaddressedError,
}

/// Classify a JSON-RPC message by inspecting `id` and `method` fields.
pub fn classify_message(json: &Value) -> MessageKind {
    let id = json.get("id").filter(|v| !v.is_null());
    let method = json.get("method").and_then(|v| v.as_str());

    match (id, method) {
        (Some(id), Some(_)) => MessageKind::IncomingRequest { id: id.clone() },
        (Some(_), None) => MessageKind::Response,
        (None, None) if json.get("error").is_some() => MessageKind::UnaddressedError,
        _ => MessageKind::Notification,
    }
}

// ==================== MCP payloads ====================

/// Name/version pair identifying a client or server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Implementation {
    pub name: String,
    pub version: String,
}

/// `initialize` request parameters
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    pub protocol_version: String,
    pub capabilities: Value,
    pub client_info: Implementation,
}

impl InitializeParams {
    pub fn new(client_name: &str, client_version: &str) -> Self {
        Self {
            protocol_version: MCP_PROTOCOL_VERSION.to_string(),
            capabilities: json!({}),
            client_info: Implementation {
                name: client_name.to_string(),
                version: client_version.to_string(),
            },
        }
    }
}

/// `initialize` result
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    pub protocol_version: String,
    #[serde(default)]
    pub capabilities: Value,
    pub server_info: Option<Implementation>,
}

/// `tools/list` request parameters
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListToolsParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

/// `tools/list` result page
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListToolsResult {
    #[serde(default)]
    pub tools: Vec<McpTool>,
    pub next_cursor: Option<String>,
}

/// Tool entry as sent by the host
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct McpTool {
    pub name: String,
    pub description: Option<String>,
    pub input_schema: Option<Value>,
}

impl From<McpTool> for ToolDescriptor {
    fn from(tool: McpTool) -> Self {
        ToolDescriptor {
            name: tool.name,
            description: tool.description,
            input_schema: tool.input_schema.unwrap_or(Value::Null),
        }
    }
}

/// `tools/call` request parameters
#[derive(Debug, Clone, Serialize)]
pub struct CallToolParams<'a> {
    pub name: &'a str,
    pub arguments: &'a ArgumentRecord,
}

/// `tools/call` result
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CallToolResult {
    #[serde(default)]
    pub content: Vec<Value>,
    #[serde(default)]
    pub is_error: Option<bool>,
    pub structured_content: Option<Value>,
}

impl CallToolResult {
    /// Map to the domain result.
    ///
    /// `text` blocks become text, `json` blocks keep their `data`, and any
    /// other block (image, resource, ...) is kept whole as JSON.
    pub fn into_call_result(self) -> CallResult {
        let content = self.content.into_iter().map(content_block).collect();
        CallResult {
            is_error: self.is_error.unwrap_or(false),
            structured_content: self.structured_content.filter(|v| !v.is_null()),
            content,
        }
    }
}

fn content_block(raw: Value) -> ContentBlock {
    match raw.get("type").and_then(|t| t.as_str()) {
        Some("text") => match raw.get("text").and_then(|t| t.as_str()) {
            Some(text) => ContentBlock::text(text),
            None => ContentBlock::json(raw),
        },
        Some("json") => ContentBlock::json(raw.get("data").cloned().unwrap_or(Value::Null)),
        _ => ContentBlock::json(raw),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_response() {
        let json = json!({"jsonrpc": "2.0", "id": 1, "result": {}});
        assert_eq!(classify_message(&json), MessageKind::Response);
    }

    #[test]
    fn classify_incoming_request_with_string_id() {
        let json = json!({"jsonrpc": "2.0", "id": "srv-1", "method": "ping"});
        assert_eq!(
            classify_message(&json),
            MessageKind::IncomingRequest { id: json!("srv-1") }
        );
    }

    #[test]
    fn classify_notification() {
        let json = json!({"jsonrpc": "2.0", "method": "notifications/message", "params": {}});
        assert_eq!(classify_message(&json), MessageKind::Notification);

        let null_id = json!({"id": null, "method": "notifications/progress"});
        assert_eq!(classify_message(&null_id), MessageKind::Notification);
    }

    #[test]
    fn classify_error_without_id() {
        let null_id = json!({
            "jsonrpc": "2.0",
            "id": null,
            "error": {"code": -32700, "message": "Parse error"}
        });
        assert_eq!(classify_message(&null_id), MessageKind::UnaddressedError);

        let no_id = json!({"jsonrpc": "2.0", "error": {"code": -32600, "message": "Invalid Request"}});
        assert_eq!(classify_message(&no_id), MessageKind::UnaddressedError);
    }

    #[test]
    fn request_ids_increase() {
        let a = JsonRpcRequest::new("tools/list", None);
        let b = JsonRpcRequest::new("tools/list", None);
        assert!(b.id > a.id);
        let text = serde_json::to_string(&a).unwrap();
        assert!(!text.contains("params"));
    }

    #[test]
    fn initialize_params_shape() {
        let params = serde_json::to_value(InitializeParams::new("mcp-conductor", "0.1.0")).unwrap();
        assert_eq!(params["protocolVersion"], "2024-11-05");
        assert_eq!(params["clientInfo"]["name"], "mcp-conductor");
        assert_eq!(params["capabilities"], json!({}));
    }

    #[test]
    fn list_tools_page_into_descriptors() {
        let page: ListToolsResult = serde_json::from_value(json!({
            "tools": [
                {"name": "verify_account_setup", "inputSchema": {"type": "object", "properties": {}}},
                {"name": "preview_ad", "description": "Preview"}
            ],
            "nextCursor": "page-2"
        }))
        .unwrap();

        assert_eq!(page.next_cursor.as_deref(), Some("page-2"));
        let tools: Vec<ToolDescriptor> = page.tools.into_iter().map(Into::into).collect();
        assert_eq!(tools[1].description.as_deref(), Some("Preview"));
        assert!(tools[1].input_schema.is_null());
    }

    #[test]
    fn call_tool_result_mapping() {
        let raw: CallToolResult = serde_json::from_value(json!({
            "content": [
                {"type": "text", "text": "Campaign created"},
                {"type": "json", "data": {"id": "123"}},
                {"type": "image", "data": "iVBOR", "mimeType": "image/png"}
            ],
            "structuredContent": {"campaign_id": "123"}
        }))
        .unwrap();

        let result = raw.into_call_result();
        assert!(!result.is_error);
        assert_eq!(result.structured_content, Some(json!({"campaign_id": "123"})));
        assert_eq!(result.content[0], ContentBlock::text("Campaign created"));
        assert_eq!(result.content[1], ContentBlock::json(json!({"id": "123"})));
        assert_eq!(
            result.content[2],
            ContentBlock::json(json!({"type": "image", "data": "iVBOR", "mimeType": "image/png"}))
        );
    }

    #[test]
    fn call_tool_error_flag() {
        let raw: CallToolResult = serde_json::from_value(json!({
            "content": [{"type": "text", "text": "Invalid budget"}],
            "isError": true
        }))
        .unwrap();
        let result = raw.into_call_result();
        assert!(result.is_error);
        assert_eq!(result.error_message(), "Invalid budget");
    }

    #[test]
    fn method_not_found_response() {
        let out = serde_json::to_value(JsonRpcResponseOut::method_not_found(
            json!(7),
            "sampling/createMessage",
        ))
        .unwrap();
        assert_eq!(out["error"]["code"], -32601);
        assert!(out.get("result").is_none());
    }
}
