//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! Environment variables are merged into the same shape by the loader.

mod credentials;
mod execution;
mod lenient;
mod output;
mod pipeline;
mod safety;
mod server;

pub use credentials::FileCredentialsConfig;
pub use execution::FileExecutionConfig;
pub use output::FileOutputConfig;
pub use pipeline::FilePipelineConfig;
pub use safety::FileSafetyConfig;
pub use server::FileServerConfig;

use crate::mcp::McpServerConfig;
use conductor_application::RunConfig;
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Access token and account id
    pub credentials: FileCredentialsConfig,
    /// Mutation gate
    pub safety: FileSafetyConfig,
    /// Retry bound
    pub execution: FileExecutionConfig,
    /// Tool execution order
    pub pipeline: FilePipelineConfig,
    /// How to launch the tool host
    pub server: FileServerConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Explicit run configuration for the orchestrator.
    pub fn to_run_config(&self) -> RunConfig {
        RunConfig::default()
            .with_access_token(self.credentials.access_token.clone())
            .with_account_id(self.credentials.account_id.clone())
            .with_allow_mutations(self.safety.allow_mutations)
            .with_max_attempts(self.execution.max_attempts)
            .with_pipeline(self.pipeline.to_pipeline())
    }

    /// Launch settings for the tool host.
    ///
    /// The child sees the credentials, `DEBUG` and `NODE_ENV`, then any
    /// `[server.env]` entries, which win on conflict.
    pub fn server_config(&self) -> McpServerConfig {
        let mut config = McpServerConfig::new(self.server.command.clone())
            .with_args(self.server.args.iter().cloned())
            .with_env("META_ACCESS_TOKEN", self.credentials.access_token.clone())
            .with_env("META_AD_ACCOUNT_ID", self.credentials.account_id.clone())
            .with_env("DEBUG", self.server.debug.clone())
            .with_env("NODE_ENV", self.server.node_env.clone());
        config
            .env
            .extend(self.server.env.iter().map(|(k, v)| (k.clone(), v.clone())));
        config
    }

    /// Copy safe to print (access token masked).
    pub fn redacted(&self) -> Self {
        Self {
            credentials: self.credentials.redacted(),
            ..self.clone()
        }
    }
}
