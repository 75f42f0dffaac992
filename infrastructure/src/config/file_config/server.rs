//! Tool host server configuration from TOML (`[server]` section)

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw server launch configuration
///
/// # Example
///
/// ```toml
/// [server]
/// command = "node"
/// args = ["dist/index.js"]
/// debug = ""
///
/// [server.env]
/// META_API_VERSION = "v21.0"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileServerConfig {
    /// Executable that starts the tool host
    pub command: String,
    /// Arguments to the command
    pub args: Vec<String>,
    /// Extra environment variables for the tool host
    pub env: BTreeMap<String, String>,
    /// Value of `DEBUG` in the tool host environment
    pub debug: String,
    /// Value of `NODE_ENV` in the tool host environment
    pub node_env: String,
}

impl Default for FileServerConfig {
    fn default() -> Self {
        let (command, args) = default_launch();
        Self {
            command,
            args,
            env: BTreeMap::new(),
            debug: "mcp:*".to_string(),
            node_env: "development".to_string(),
        }
    }
}

/// `npx tsx mcp/src/index.ts`, through `cmd /c` on Windows so `npx` resolves.
fn default_launch() -> (String, Vec<String>) {
    let parts: &[&str] = if cfg!(windows) {
        &["cmd", "/c", "npx", "tsx", "mcp/src/index.ts"]
    } else {
        &["npx", "tsx", "mcp/src/index.ts"]
    };
    (
        parts[0].to_string(),
        parts[1..].iter().map(|p| p.to_string()).collect(),
    )
}
