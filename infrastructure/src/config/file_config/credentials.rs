//! Credentials configuration from TOML (`[credentials]` section)
//!
//! Usually supplied through `META_ACCESS_TOKEN` / `META_AD_ACCOUNT_ID`
//! rather than written to a file.

use super::lenient;
use serde::{Deserialize, Serialize};

/// Raw credentials configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCredentialsConfig {
    /// Access token handed to the tool host (required to run)
    #[serde(deserialize_with = "lenient::text")]
    pub access_token: String,
    /// Target ad account (e.g., "act_1234567890")
    #[serde(deserialize_with = "lenient::text")]
    pub account_id: String,
}

impl FileCredentialsConfig {
    /// Copy with the token masked, for display.
    pub fn redacted(&self) -> Self {
        let access_token = match self.access_token.chars().count() {
            0 => String::new(),
            n if n <= 8 => "****".to_string(),
            _ => {
                let head: String = self.access_token.chars().take(4).collect();
                format!("{}****", head)
            }
        };
        Self {
            access_token,
            account_id: self.account_id.clone(),
        }
    }
}
