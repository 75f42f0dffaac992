//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for mcp-conductor
#[derive(Parser, Debug)]
#[command(name = "mcp-conductor")]
#[command(author, version, about = "Interactive MCP tool pipeline driver")]
#[command(long_about = r#"
MCP Conductor launches an MCP tool host, lists its tools, and walks an
ordered pipeline of them one at a time. Arguments for each tool are
collected interactively from the tool's input schema; failed calls are
retried up to a bounded number of attempts.

Tools whose names start with create_, update_, pause_, resume_ or delete_
are skipped unless mutations are allowed (ALLOW_MUTATIONS=1 or
--allow-mutations).

Configuration is loaded from (in priority order):
1. Environment        META_ACCESS_TOKEN, META_AD_ACCOUNT_ID, ALLOW_MUTATIONS
2. --config <path>    Explicit config file
3. ./conductor.toml   Project-level config
4. ~/.config/mcp-conductor/config.toml   Global config

Example:
  export META_ACCESS_TOKEN='EAAB...'; export META_AD_ACCOUNT_ID='act_123...'
  mcp-conductor
  mcp-conductor --allow-mutations --max-attempts 3
"#)]
pub struct Cli {
    /// Allow tools that change remote state (overrides ALLOW_MUTATIONS)
    #[arg(long)]
    pub allow_mutations: bool,

    /// Attempts per tool before giving up
    #[arg(long, value_name = "N")]
    pub max_attempts: Option<u32>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration sources and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["mcp-conductor"]);
        assert!(!cli.allow_mutations);
        assert_eq!(cli.max_attempts, None);
        assert_eq!(cli.verbose, 0);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "mcp-conductor",
            "--allow-mutations",
            "--max-attempts",
            "3",
            "-vv",
            "--no-color",
            "--config",
            "custom.toml",
        ]);
        assert!(cli.allow_mutations);
        assert_eq!(cli.max_attempts, Some(3));
        assert_eq!(cli.verbose, 2);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("custom.toml")));
    }

    #[test]
    fn test_rejects_negative_attempts() {
        assert!(Cli::try_parse_from(["mcp-conductor", "--max-attempts", "-1"]).is_err());
    }

    #[test]
    fn test_command_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
