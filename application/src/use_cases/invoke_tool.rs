//! Invoke Tool use case
//!
//! Calls one tool with a bounded number of attempts. Every attempt
//! re-collects arguments from the human, so a failure caused by bad input
//! can be corrected on the next try. Retries are immediate: no backoff.
//!
//! ```text
//! attempt 1..=max:
//!   collect args ─▶ call_tool ─▶ Success ──────────────▶ return Succeeded
//!                            └─▶ SoftFailure/Exception ─▶ next attempt (or Exhausted)
//! ```

use crate::ports::console::{ConsoleError, ConsolePort};
use crate::ports::progress::{NoRunProgress, RunProgressNotifier};
use crate::ports::tool_host::ToolHostPort;
use crate::use_cases::collect_arguments::ArgumentCollector;
use conductor_domain::{CallResult, InvocationOutcome, ToolCall, ToolDescriptor, ToolRunStatus};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Final result of invoking one tool.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolInvocation {
    /// A call returned without the error flag
    Succeeded { result: CallResult, attempts: u32 },
    /// Every attempt failed
    Exhausted { attempts: u32 },
}

impl ToolInvocation {
    /// The no-result signal is `None`.
    pub fn into_result(self) -> Option<CallResult> {
        match self {
            ToolInvocation::Succeeded { result, .. } => Some(result),
            ToolInvocation::Exhausted { .. } => None,
        }
    }

    pub fn status(&self) -> ToolRunStatus {
        match self {
            ToolInvocation::Succeeded { attempts, .. } => ToolRunStatus::Succeeded {
                attempts: *attempts,
            },
            ToolInvocation::Exhausted { attempts } => ToolRunStatus::Failed {
                attempts: *attempts,
            },
        }
    }
}

/// Retrying invoker for a single tool
pub struct RetryingInvoker<H: ToolHostPort + 'static, C: ConsolePort + 'static> {
    host: Arc<H>,
    collector: ArgumentCollector<C>,
    max_attempts: u32,
}

impl<H: ToolHostPort + 'static, C: ConsolePort + 'static> RetryingInvoker<H, C> {
    /// `max_attempts` below 1 is treated as 1.
    pub fn new(host: Arc<H>, console: Arc<C>, max_attempts: u32) -> Self {
        Self {
            host,
            collector: ArgumentCollector::new(console),
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Invoke with default (no-op) progress
    pub async fn invoke(
        &self,
        tool: &ToolDescriptor,
        index: usize,
    ) -> Result<ToolInvocation, ConsoleError> {
        self.invoke_with_progress(tool, index, &NoRunProgress).await
    }

    /// Invoke with progress callbacks.
    ///
    /// Host failures never escape: they are reported and retried. Only a
    /// console failure (closed input) ends the loop early.
    pub async fn invoke_with_progress(
        &self,
        tool: &ToolDescriptor,
        index: usize,
        progress: &dyn RunProgressNotifier,
    ) -> Result<ToolInvocation, ConsoleError> {
        let max = self.max_attempts;

        for attempt in 1..=max {
            let args = self.collector.collect(tool).await?;
            let call = ToolCall::new(&tool.name).with_arguments(args);

            progress.on_attempt_start(index, &call, attempt, max);
            debug!("Calling {} (attempt {}/{})", tool.name, attempt, max);
            let response = self.host.call_tool(&call).await;
            progress.on_call_complete(index, &tool.name);

            let (message, is_exception) = match InvocationOutcome::classify(response) {
                InvocationOutcome::Success(result) => {
                    info!("{} succeeded on attempt {}/{}", tool.name, attempt, max);
                    return Ok(ToolInvocation::Succeeded {
                        result,
                        attempts: attempt,
                    });
                }
                InvocationOutcome::SoftFailure(message) => {
                    info!("{} reported an error: {}", tool.name, message);
                    (message, false)
                }
                InvocationOutcome::Exception(message) => {
                    warn!("{} call failed: {}", tool.name, message);
                    (message, true)
                }
            };

            if attempt < max {
                progress.on_attempt_failed(index, &tool.name, attempt, max, &message);
            } else {
                progress.on_tool_failed(
                    index,
                    &tool.name,
                    max,
                    is_exception.then_some(message.as_str()),
                );
            }
        }

        warn!("{} failed after {} attempts", tool.name, max);
        Ok(ToolInvocation::Exhausted { attempts: max })
    }
}
