//! MCP client over stdio
//!
//! [`McpStdioHost`] spawns the tool host and implements
//! [`ToolHostPort`](conductor_application::ToolHostPort) on top of a
//! newline-delimited JSON-RPC [`McpSession`].

pub mod client;
pub mod error;
pub mod protocol;
pub mod session;

pub use client::{McpServerConfig, McpStdioHost};
pub use error::McpError;
pub use session::McpSession;
