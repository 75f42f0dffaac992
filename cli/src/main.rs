//! CLI entrypoint for MCP Conductor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use conductor_application::{RunPipelineError, RunPipelineUseCase};
use conductor_infrastructure::{ConfigLoader, FileConfig, McpStdioHost};
use conductor_presentation::{Cli, ConsoleRunReporter, TerminalConsole};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const CREDENTIAL_EXAMPLE: &str =
    "Example: export META_ACCESS_TOKEN='EAAB...'; export META_AD_ACCOUNT_ID='act_123...'\n";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // Logs go to stderr so they never interleave with prompts on stdout
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting MCP Conductor");

    // === Configuration ===
    let file_config = load_config(&cli)?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        println!();
        println!("Effective configuration:");
        println!(
            "{}",
            toml::to_string_pretty(&file_config.redacted())
                .context("Failed to render configuration")?
        );
        return Ok(());
    }

    if cli.no_color || !file_config.output.color {
        colored::control::set_override(false);
    }

    let mut run_config = file_config.to_run_config();
    if cli.allow_mutations {
        run_config = run_config.with_allow_mutations(true);
    }
    if let Some(max) = cli.max_attempts {
        run_config = run_config.with_max_attempts(max);
    }

    // Checked before the tool host is started so it never runs without a token
    if !run_config.has_credential() {
        println!("{}", RunPipelineError::MissingCredential.to_string().red());
        println!("{}", CREDENTIAL_EXAMPLE);
        return Ok(());
    }

    // === Dependency Injection ===
    let server = file_config.server_config();
    let host = Arc::new(
        McpStdioHost::spawn(&server)
            .await
            .with_context(|| format!("Failed to start tool host `{}`", server.command))?,
    );
    let console = Arc::new(TerminalConsole::new());

    let use_case = RunPipelineUseCase::new(Arc::clone(&host), console, run_config);
    let progress = ConsoleRunReporter::new();
    let outcome = use_case.execute_with_progress(&progress).await;
    drop(use_case);

    match outcome {
        Ok(summary) => info!(
            "Run complete: {} succeeded, {} failed, {} skipped",
            summary.succeeded(),
            summary.failed(),
            summary.skipped()
        ),
        Err(e) if e.is_fatal_precondition() => println!("{}", e.to_string().red()),
        Err(e) if e.is_input_closed() => {
            println!();
            println!("{}", "Input closed, stopping.".yellow());
        }
        Err(e) => {
            shutdown(host).await;
            return Err(e.into());
        }
    }

    shutdown(host).await;
    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let loaded = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
    };
    loaded.map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))
}

/// Stop the tool host; the child is killed on drop if it is still shared.
async fn shutdown(host: Arc<McpStdioHost>) {
    match Arc::try_unwrap(host) {
        Ok(host) => {
            if let Err(e) = host.shutdown().await {
                warn!("Tool host shutdown failed: {}", e);
            }
        }
        Err(_) => warn!("Tool host still in use at shutdown"),
    }
}
