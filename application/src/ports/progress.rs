//! Run progress notification port
//!
//! Defines the interface for reporting what the batch orchestrator is
//! doing: discovery, per-attempt calls and failures, skips, results and
//! the final summary. Every method has a no-op default.

use conductor_domain::{CallResult, RunSummary, ToolCall, ToolDescriptor};

/// Callback for progress updates during a batch run
///
/// Implementations live in the presentation layer. `index` is the
/// 1-based position of the tool within the processed batch.
pub trait RunProgressNotifier: Send + Sync {
    /// Called once with every tool the host advertises
    fn on_tools_discovered(&self, _tools: &[ToolDescriptor]) {}

    /// Called after resolution and clamping, before the first tool
    fn on_batch_start(&self, _count: usize) {}

    /// Called when the mutation gate blocks a tool
    fn on_tool_skipped(&self, _index: usize, _tool_name: &str) {}

    /// Called right before the host call of one attempt
    fn on_attempt_start(&self, _index: usize, _call: &ToolCall, _attempt: u32, _max: u32) {}

    /// Called when the host call of one attempt returns (any outcome)
    fn on_call_complete(&self, _index: usize, _tool_name: &str) {}

    /// Called when a non-final attempt failed and the tool will be retried
    fn on_attempt_failed(
        &self,
        _index: usize,
        _tool_name: &str,
        _attempt: u32,
        _max: u32,
        _message: &str,
    ) {
    }

    /// Called when the final attempt failed.
    ///
    /// `exception` carries the error text when the last failure was a
    /// transport/RPC exception rather than a soft failure.
    fn on_tool_failed(&self, _index: usize, _tool_name: &str, _max: u32, _exception: Option<&str>) {}

    /// Called with the result of a successful call
    fn on_tool_result(&self, _index: usize, _tool_name: &str, _result: &CallResult) {}

    /// Called once when the batch is done
    fn on_run_complete(&self, _summary: &RunSummary) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoRunProgress;

impl RunProgressNotifier for NoRunProgress {}
