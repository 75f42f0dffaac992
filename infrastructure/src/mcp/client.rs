//! Stdio tool host: spawns the MCP server process and owns its session.
//!
//! The child is started once per run. It is killed when [`McpStdioHost`]
//! is dropped, so every exit path (including early aborts and `?`
//! propagation) tears it down.

use super::error::{McpError, Result};
use super::session::McpSession;
use async_trait::async_trait;
use conductor_application::{HostError, ToolHostPort};
use conductor_domain::{CallResult, ToolCall, ToolDescriptor};
use std::collections::BTreeMap;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::BufReader;
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tracing::{debug, info, warn};

/// How long a closed-stdin host gets to exit before it is killed.
const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

/// Variables copied from the parent environment into the child's.
#[cfg(not(windows))]
const INHERITED_ENV: &[&str] = &["HOME", "LOGNAME", "PATH", "SHELL", "TERM", "USER"];
#[cfg(windows)]
const INHERITED_ENV: &[&str] = &[
    "APPDATA",
    "HOMEDRIVE",
    "HOMEPATH",
    "LOCALAPPDATA",
    "PATH",
    "PATHEXT",
    "PROCESSOR_ARCHITECTURE",
    "SYSTEMDRIVE",
    "SYSTEMROOT",
    "TEMP",
    "USERNAME",
    "USERPROFILE",
];

/// How to launch the tool host process.
#[derive(Debug, Clone, PartialEq)]
pub struct McpServerConfig {
    pub command: String,
    pub args: Vec<String>,
    /// Explicit environment, applied on top of the inherited basics
    pub env: BTreeMap<String, String>,
}

impl McpServerConfig {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            args: Vec::new(),
            env: BTreeMap::new(),
        }
    }

    pub fn with_args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = args.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Full child environment: inherited basics, then explicit entries.
    pub fn child_env(&self) -> BTreeMap<String, String> {
        let mut env: BTreeMap<String, String> = INHERITED_ENV
            .iter()
            .filter_map(|key| std::env::var(key).ok().map(|v| (key.to_string(), v)))
            .collect();
        env.extend(self.env.iter().map(|(k, v)| (k.clone(), v.clone())));
        env
    }
}

/// MCP tool host running as a child process over stdio.
pub struct McpStdioHost {
    session: McpSession<BufReader<ChildStdout>, ChildStdin>,
    /// Tool host child process (killed on Drop to prevent orphans).
    child: Child,
}

impl McpStdioHost {
    /// Spawn the tool host and complete the `initialize` handshake.
    pub async fn spawn(config: &McpServerConfig) -> Result<Self> {
        debug!("Spawning tool host: {} {:?}", config.command, config.args);

        let mut cmd = Command::new(&config.command);
        cmd.args(&config.args)
            .env_clear()
            .envs(config.child_env())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        // Linux: request kernel to send SIGTERM to child when parent dies.
        // This catches cases where Drop doesn't run (SIGKILL, OOM kill).
        #[cfg(target_os = "linux")]
        unsafe {
            cmd.pre_exec(|| {
                libc::prctl(libc::PR_SET_PDEATHSIG, libc::SIGTERM);
                Ok(())
            });
        }

        let mut child = cmd.spawn().map_err(|source| McpError::SpawnError {
            command: config.command.clone(),
            source,
        })?;

        let stdin = child.stdin.take().ok_or_else(|| {
            McpError::Io(std::io::Error::other("Failed to capture tool host stdin"))
        })?;
        let stdout = child.stdout.take().ok_or_else(|| {
            McpError::Io(std::io::Error::other("Failed to capture tool host stdout"))
        })?;

        let host = Self {
            session: McpSession::new(BufReader::new(stdout), stdin),
            child,
        };

        // On failure `host` drops here and the child is killed.
        host.session.initialize().await?;
        Ok(host)
    }

    /// Close stdin, give the host a moment to exit, then kill it.
    pub async fn shutdown(mut self) -> Result<()> {
        if let Err(e) = self.session.close().await {
            debug!("Closing tool host stdin failed: {}", e);
        }

        match tokio::time::timeout(SHUTDOWN_GRACE, self.child.wait()).await {
            Ok(Ok(status)) => info!("Tool host exited with {}", status),
            Ok(Err(e)) => warn!("Waiting for tool host failed: {}", e),
            Err(_) => {
                debug!("Tool host still running after stdin closed, killing");
                self.child.start_kill()?;
                self.child.wait().await?;
            }
        }
        Ok(())
    }
}

impl Drop for McpStdioHost {
    fn drop(&mut self) {
        debug!("McpStdioHost dropping, killing tool host child process");
        let _ = self.child.start_kill();
    }
}

#[async_trait]
impl ToolHostPort for McpStdioHost {
    async fn list_tools(&self) -> std::result::Result<Vec<ToolDescriptor>, HostError> {
        self.session.list_tools().await
    }

    async fn call_tool(&self, call: &ToolCall) -> std::result::Result<CallResult, HostError> {
        self.session.call_tool(call).await
    }
}
