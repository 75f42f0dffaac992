//! Error types for the MCP adapter

use conductor_application::HostError;
use thiserror::Error;

/// Result type alias for MCP operations
pub type Result<T> = std::result::Result<T, McpError>;

/// Errors that can occur when talking to an MCP tool host
#[derive(Error, Debug)]
pub enum McpError {
    #[error("Failed to spawn tool host '{command}': {source}")]
    SpawnError {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("JSON-RPC error (code {code}): {message}")]
    RpcError { code: i64, message: String },

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Transport closed")]
    TransportClosed,
}

impl From<McpError> for HostError {
    fn from(error: McpError) -> Self {
        match error {
            McpError::RpcError { code, message } => HostError::RpcError { code, message },
            McpError::TransportClosed => HostError::TransportClosed,
            e @ (McpError::SpawnError { .. } | McpError::Io(_)) => {
                HostError::ConnectionError(e.to_string())
            }
            e @ (McpError::SerializationError(_) | McpError::UnexpectedResponse(_)) => {
                HostError::ProtocolError(e.to_string())
            }
        }
    }
}
