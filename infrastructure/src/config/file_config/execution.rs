//! Execution configuration from TOML (`[execution]` section)

use conductor_application::DEFAULT_MAX_ATTEMPTS;
use serde::{Deserialize, Serialize};

/// Raw execution configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileExecutionConfig {
    /// Attempts per tool before giving up (0 is treated as 1)
    pub max_attempts: u32,
}

impl Default for FileExecutionConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}
