//! Safety configuration from TOML (`[safety]` section)

use super::lenient;
use serde::{Deserialize, Serialize};

/// Raw safety configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileSafetyConfig {
    /// Allow tools that change remote state (create_/update_/pause_/resume_/delete_)
    #[serde(deserialize_with = "lenient::flag")]
    pub allow_mutations: bool,
}

#[cfg(test)]
mod tests {
    use super::super::FileConfig;

    #[test]
    fn test_allow_mutations_forms() {
        for (raw, expected) in [
            ("true", true),
            ("1", true),
            ("\"1\"", true),
            ("\"True\"", true),
            ("\"yes\"", false),
            ("0", false),
            ("false", false),
        ] {
            let config: FileConfig =
                toml::from_str(&format!("[safety]\nallow_mutations = {}", raw)).unwrap();
            assert_eq!(config.safety.allow_mutations, expected, "{raw}");
        }
    }
}
