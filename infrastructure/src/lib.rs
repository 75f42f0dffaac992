//! Infrastructure layer for mcp-conductor
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer: the MCP stdio tool host client and
//! configuration file loading.

pub mod config;
pub mod mcp;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileOutputConfig};
pub use mcp::{
    McpError, McpServerConfig, McpSession, McpStdioHost,
    error::Result,
};
