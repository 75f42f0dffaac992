//! MCP client session over a line-delimited JSON-RPC stream.
//!
//! Requests are strictly sequential: the reader lock is held from the
//! moment a request is written until its response arrives. While waiting,
//! host notifications are logged and skipped and host requests are
//! answered inline (`ping` → `{}`, anything else → method not found).
//! There is no timeout; an unresponsive host stalls the caller.

use super::error::{McpError, Result};
use super::protocol::{
    CallToolParams, CallToolResult, InitializeParams, InitializeResult, JsonRpcNotification,
    JsonRpcRequest, JsonRpcResponse, JsonRpcResponseOut, ListToolsParams, ListToolsResult,
    MessageKind, classify_message,
};
use async_trait::async_trait;
use conductor_application::{HostError, ToolHostPort};
use conductor_domain::{CallResult, ToolCall, ToolDescriptor};
use serde::Serialize;
use serde_json::Value;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;
use tracing::{debug, info, trace, warn};

/// Client name reported in `initialize`.
pub const CLIENT_NAME: &str = "mcp-conductor";

/// An MCP client session on a reader/writer pair.
pub struct McpSession<R, W> {
    reader: Mutex<R>,
    writer: Mutex<W>,
}

impl<R, W> McpSession<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: Mutex::new(reader),
            writer: Mutex::new(writer),
        }
    }

    /// Run the `initialize` handshake and confirm with `notifications/initialized`.
    pub async fn initialize(&self) -> Result<InitializeResult> {
        let params = InitializeParams::new(CLIENT_NAME, env!("CARGO_PKG_VERSION"));
        let result = self
            .request("initialize", Some(serde_json::to_value(params)?))
            .await?;
        let init: InitializeResult = serde_json::from_value(result)?;

        match &init.server_info {
            Some(server) => info!(
                "Connected to {} {} (protocol {})",
                server.name, server.version, init.protocol_version
            ),
            None => info!("Connected to tool host (protocol {})", init.protocol_version),
        }

        self.notify("notifications/initialized", None).await?;
        Ok(init)
    }

    /// List every advertised tool, following `nextCursor` pages.
    pub async fn list_all_tools(&self) -> Result<Vec<ToolDescriptor>> {
        let mut tools = Vec::new();
        let mut cursor: Option<String> = None;

        loop {
            let params = ListToolsParams {
                cursor: cursor.take(),
            };
            let result = self
                .request("tools/list", Some(serde_json::to_value(params)?))
                .await?;
            let page: ListToolsResult = serde_json::from_value(result)?;
            debug!("tools/list page with {} tools", page.tools.len());
            tools.extend(page.tools.into_iter().map(ToolDescriptor::from));

            match page.next_cursor {
                Some(next) if !next.is_empty() => cursor = Some(next),
                _ => break,
            }
        }

        Ok(tools)
    }

    /// Call one tool. An RPC error is an `Err`; `isError` stays in the result.
    pub async fn call(&self, call: &ToolCall) -> Result<CallResult> {
        let params = CallToolParams {
            name: &call.tool_name,
            arguments: &call.arguments,
        };
        let result = self
            .request("tools/call", Some(serde_json::to_value(params)?))
            .await?;
        let raw: CallToolResult = serde_json::from_value(result)?;
        Ok(raw.into_call_result())
    }

    /// Send a request and wait for its response.
    pub async fn request(&self, method: &str, params: Option<Value>) -> Result<Value> {
        let request = JsonRpcRequest::new(method, params);
        let mut reader = self.reader.lock().await;
        self.write_message(&request).await?;

        let mut line = String::new();
        loop {
            line.clear();
            let bytes_read = reader.read_line(&mut line).await?;
            if bytes_read == 0 {
                return Err(McpError::TransportClosed);
            }

            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            trace!("Received: {}", trimmed);

            let json: Value = match serde_json::from_str(trimmed) {
                Ok(json) => json,
                Err(e) => {
                    debug!("Skipping non-JSON line from tool host ({}): {}", e, trimmed);
                    continue;
                }
            };

            match classify_message(&json) {
                MessageKind::Response => {
                    let response: JsonRpcResponse = serde_json::from_value(json)?;
                    if response.id != Some(request.id) {
                        warn!(
                            "Ignoring response for id {:?} while waiting for {}",
                            response.id, request.id
                        );
                        continue;
                    }
                    if let Some(error) = response.error {
                        return Err(McpError::RpcError {
                            code: error.code,
                            message: error.message,
                        });
                    }
                    return response.result.ok_or_else(|| {
                        McpError::UnexpectedResponse(format!("{} response has no result", method))
                    });
                }
                MessageKind::IncomingRequest { id } => {
                    let incoming = json.get("method").and_then(|m| m.as_str()).unwrap_or("");
                    self.answer_host_request(id, incoming).await?;
                }
                MessageKind::Notification => {
                    let name = json.get("method").and_then(|m| m.as_str()).unwrap_or("?");
                    debug!("Tool host notification: {}", name);
                }
                // Only one request is in flight, so the error must be ours.
                MessageKind::UnaddressedError => {
                    let response: JsonRpcResponse = serde_json::from_value(json)?;
                    if let Some(error) = response.error {
                        warn!(
                            "Tool host returned an error without an id while waiting for {}: {}",
                            request.id, error.message
                        );
                        return Err(McpError::RpcError {
                            code: error.code,
                            message: error.message,
                        });
                    }
                }
            }
        }
    }

    /// Send a notification (fire-and-forget).
    pub async fn notify(&self, method: &str, params: Option<Value>) -> Result<()> {
        self.write_message(&JsonRpcNotification::new(method, params))
            .await
    }

    /// Close the writing half so the host sees end of input.
    pub async fn close(&self) -> Result<()> {
        let mut writer = self.writer.lock().await;
        writer.shutdown().await?;
        Ok(())
    }

    async fn answer_host_request(&self, id: Value, method: &str) -> Result<()> {
        let response = if method == "ping" {
            trace!("Answering ping");
            JsonRpcResponseOut::result(id, serde_json::json!({}))
        } else {
            debug!("Rejecting unsupported host request: {}", method);
            JsonRpcResponseOut::method_not_found(id, method)
        };
        self.write_message(&response).await
    }

    async fn write_message<T: Serialize>(&self, message: &T) -> Result<()> {
        let mut json = serde_json::to_string(message)?;
        trace!("Sending: {}", json);
        json.push('\n');

        let mut writer = self.writer.lock().await;
        writer.write_all(json.as_bytes()).await.map_err(closed_on_pipe)?;
        writer.flush().await.map_err(closed_on_pipe)?;
        Ok(())
    }
}

fn closed_on_pipe(e: std::io::Error) -> McpError {
    if e.kind() == std::io::ErrorKind::BrokenPipe {
        McpError::TransportClosed
    } else {
        McpError::Io(e)
    }
}

#[async_trait]
impl<R, W> ToolHostPort for McpSession<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn list_tools(&self) -> std::result::Result<Vec<ToolDescriptor>, HostError> {
        Ok(self.list_all_tools().await?)
    }

    async fn call_tool(&self, call: &ToolCall) -> std::result::Result<CallResult, HostError> {
        Ok(self.call(call).await?)
    }
}
