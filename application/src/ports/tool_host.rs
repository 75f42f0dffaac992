//! Tool host port
//!
//! Defines the minimal capability the orchestrator needs from the remote
//! tool host: list what it offers and call one tool. The session behind it
//! is opened once per run by the adapter.

use async_trait::async_trait;
use conductor_domain::{CallResult, ToolCall, ToolDescriptor};
use thiserror::Error;

/// Errors that can occur while talking to the tool host
#[derive(Error, Debug)]
pub enum HostError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("RPC error {code}: {message}")]
    RpcError { code: i64, message: String },

    #[error("Protocol error: {0}")]
    ProtocolError(String),

    #[error("Transport closed")]
    TransportClosed,
}

/// Port for the remote tool host
///
/// Implementations (adapters) live in the infrastructure layer.
#[async_trait]
pub trait ToolHostPort: Send + Sync {
    /// List every tool the host advertises
    async fn list_tools(&self) -> Result<Vec<ToolDescriptor>, HostError>;

    /// Call one tool with collected arguments.
    ///
    /// `Ok` with `is_error = true` is a soft failure reported by the host;
    /// `Err` means the call itself failed.
    async fn call_tool(&self, call: &ToolCall) -> Result<CallResult, HostError>;
}
