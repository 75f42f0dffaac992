//! Configuration file loader with multi-source merging

use super::file_config::FileConfig;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Project-level config file names, checked in order.
const PROJECT_FILES: [&str; 2] = ["conductor.toml", ".conductor.toml"];

/// Environment variables read on top of the files, with their config keys.
const ENV_KEYS: [(&str, &str); 3] = [
    ("META_ACCESS_TOKEN", "credentials.access_token"),
    ("META_AD_ACCOUNT_ID", "credentials.account_id"),
    ("ALLOW_MUTATIONS", "safety.allow_mutations"),
];

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Environment: `META_ACCESS_TOKEN`, `META_AD_ACCOUNT_ID`, `ALLOW_MUTATIONS`
    /// 2. Explicit config path (if provided)
    /// 3. Project root: `./conductor.toml` or `./.conductor.toml`
    /// 4. Global: `~/.config/mcp-conductor/config.toml`
    /// 5. Default values
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, Box<figment::Error>> {
        Self::figment(config_path).extract().map_err(Box::new)
    }

    /// Load only default configuration plus the environment (for --no-config)
    pub fn load_defaults() -> Result<FileConfig, Box<figment::Error>> {
        Self::merge_env(Figment::new().merge(Serialized::defaults(FileConfig::default())))
            .extract()
            .map_err(Box::new)
    }

    fn figment(config_path: Option<&PathBuf>) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(&global_path));
            }
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        Self::merge_env(figment)
    }

    /// Overlay the well-known variables as untouched text.
    ///
    /// Values are never parsed: `0012345` stays an account id with its
    /// leading zeros, and only `1`, `true` or `True` enable mutations.
    /// An empty variable counts as unset.
    fn merge_env(figment: Figment) -> Figment {
        ENV_KEYS.iter().fold(figment, |figment, (var, key)| {
            match std::env::var(var).ok().filter(|v| !v.is_empty()) {
                Some(value) if *var == "ALLOW_MUTATIONS" => {
                    figment.merge(Serialized::default(key, env_flag(&value)))
                }
                Some(value) => figment.merge(Serialized::default(key, value)),
                None => figment,
            }
        })
    }

    /// Get the global config file path
    ///
    /// Returns XDG_CONFIG_HOME/mcp-conductor/config.toml if set,
    /// otherwise falls back to ~/.config/mcp-conductor/config.toml
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("mcp-conductor").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        PROJECT_FILES
            .iter()
            .map(PathBuf::from)
            .find(|path| path.exists())
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources(config_path: Option<&PathBuf>) {
        println!("Configuration sources (in priority order):");

        let env_names: Vec<&str> = ENV_KEYS.iter().map(|(var, _)| *var).collect();
        let env_set: Vec<&str> = env_names
            .iter()
            .copied()
            .filter(|var| std::env::var_os(var).is_some())
            .collect();
        if env_set.is_empty() {
            println!("  [     ] Env:     {}", env_names.join(", "));
        } else {
            println!("  [FOUND] Env:     {}", env_set.join(", "));
        }

        if let Some(path) = config_path {
            let mark = if path.exists() { "FOUND" } else { "MISSING" };
            println!("  [{}] Explicit: {}", mark, path.display());
        }

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./conductor.toml or ./.conductor.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

fn env_flag(value: &str) -> bool {
    matches!(value, "1" | "true" | "True")
}
