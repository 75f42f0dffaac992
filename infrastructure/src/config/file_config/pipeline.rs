//! Pipeline configuration from TOML (`[pipeline]` section)

use conductor_domain::{DEFAULT_PIPELINE, PipelineSpec};
use serde::{Deserialize, Serialize};

/// Raw pipeline configuration
///
/// # Example
///
/// ```toml
/// [pipeline]
/// tools = ["verify_account_setup", "preview_ad"]
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePipelineConfig {
    /// Tool names in execution order
    pub tools: Vec<String>,
}

impl Default for FilePipelineConfig {
    fn default() -> Self {
        Self {
            tools: DEFAULT_PIPELINE.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl FilePipelineConfig {
    pub fn to_pipeline(&self) -> PipelineSpec {
        PipelineSpec::new(self.tools.iter().cloned())
    }
}
