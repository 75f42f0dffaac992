//! Run Pipeline use case
//!
//! Drives a whole batch: discovery, the count prompt, pipeline resolution,
//! then one tool at a time through the mutation gate and the retrying
//! invoker. Per-tool failures are contained at the tool boundary; only the
//! precondition failures (missing credential, nothing to run) end the run.

use crate::config::RunConfig;
use crate::ports::console::{ConsoleError, ConsolePort};
use crate::ports::progress::{NoRunProgress, RunProgressNotifier};
use crate::ports::tool_host::{HostError, ToolHostPort};
use crate::use_cases::invoke_tool::{RetryingInvoker, ToolInvocation};
use conductor_domain::{GateDecision, RunSummary, ToolRunStatus, parse_tool_count};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

pub const COUNT_PROMPT: &str = "How many of the FIRST tools should be processed? Enter a number: ";

/// Errors that can end a run
#[derive(Error, Debug)]
pub enum RunPipelineError {
    #[error("ERROR: Please set META_ACCESS_TOKEN in your environment.")]
    MissingCredential,

    #[error("No tools reported by server.")]
    NoToolsReported,

    #[error("None of the desired tools are available from the server.")]
    NoPipelineToolsAvailable,

    #[error("Tool host error: {0}")]
    Host(#[from] HostError),

    #[error("Console error: {0}")]
    Console(#[from] ConsoleError),
}

impl RunPipelineError {
    /// Configuration/discovery failures: reported, then the process exits normally.
    pub fn is_fatal_precondition(&self) -> bool {
        matches!(
            self,
            RunPipelineError::MissingCredential
                | RunPipelineError::NoToolsReported
                | RunPipelineError::NoPipelineToolsAvailable
        )
    }

    /// The human closed the input stream.
    pub fn is_input_closed(&self) -> bool {
        matches!(self, RunPipelineError::Console(ConsoleError::Closed))
    }
}

/// Use case for running the tool pipeline
pub struct RunPipelineUseCase<H: ToolHostPort + 'static, C: ConsolePort + 'static> {
    host: Arc<H>,
    console: Arc<C>,
    config: RunConfig,
}

impl<H: ToolHostPort + 'static, C: ConsolePort + 'static> RunPipelineUseCase<H, C> {
    pub fn new(host: Arc<H>, console: Arc<C>, config: RunConfig) -> Self {
        Self {
            host,
            console,
            config,
        }
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self) -> Result<RunSummary, RunPipelineError> {
        self.execute_with_progress(&NoRunProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        progress: &dyn RunProgressNotifier,
    ) -> Result<RunSummary, RunPipelineError> {
        if !self.config.has_credential() {
            return Err(RunPipelineError::MissingCredential);
        }

        let tools = self.host.list_tools().await?;
        if tools.is_empty() {
            return Err(RunPipelineError::NoToolsReported);
        }
        info!("Host reported {} tools", tools.len());
        progress.on_tools_discovered(&tools);

        let requested = self.prompt_count().await?;

        let resolved = self.config.pipeline.resolve(&tools);
        if resolved.is_empty() {
            return Err(RunPipelineError::NoPipelineToolsAvailable);
        }
        debug!("Resolved pipeline: {:?}", resolved.names());

        let batch = resolved.take(requested);
        info!(
            "Processing {} of {} requested tool(s)",
            batch.len(),
            requested
        );
        progress.on_batch_start(batch.len());

        let policy = self.config.mutation_policy();
        let invoker = RetryingInvoker::new(
            Arc::clone(&self.host),
            Arc::clone(&self.console),
            self.config.max_attempts,
        );

        let mut summary = RunSummary::new();
        for (i, tool) in batch.iter().enumerate() {
            let index = i + 1;

            if policy.decide(&tool.name) == GateDecision::Skip {
                info!("Skipping mutating tool {}", tool.name);
                progress.on_tool_skipped(index, &tool.name);
                summary.record(&tool.name, ToolRunStatus::Skipped);
                continue;
            }

            let invocation = invoker
                .invoke_with_progress(tool, index, progress)
                .await?;
            summary.record(&tool.name, invocation.status());

            if let ToolInvocation::Succeeded { result, .. } = &invocation {
                progress.on_tool_result(index, &tool.name, result);
            }
        }

        progress.on_run_complete(&summary);
        Ok(summary)
    }

    /// Ask how many pipeline tools to process, until a positive integer arrives.
    async fn prompt_count(&self) -> Result<usize, RunPipelineError> {
        loop {
            self.console.print_line("");
            let raw = self.console.read_line(COUNT_PROMPT).await?;
            match parse_tool_count(&raw) {
                Ok(count) => return Ok(count),
                Err(e) => self.console.print_line(&e.to_string()),
            }
        }
    }
}
