//! Configuration file loading for mcp-conductor
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. Environment: `META_ACCESS_TOKEN`, `META_AD_ACCOUNT_ID`, `ALLOW_MUTATIONS`
//! 2. `--config <path>` specified file
//! 3. Project root: `./conductor.toml` or `./.conductor.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/mcp-conductor/config.toml`
//!    (fallback `~/.config/mcp-conductor/config.toml`)
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileConfig, FileCredentialsConfig, FileExecutionConfig, FileOutputConfig,
    FilePipelineConfig, FileSafetyConfig, FileServerConfig,
};
pub use loader::ConfigLoader;
