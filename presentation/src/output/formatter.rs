//! Transcript line formatting for a pipeline run
//!
//! Every function returns plain text; the reporter decides on color.

use conductor_domain::{CallResult, RunSummary, ToolCall, ToolDescriptor, ToolRunStatus};
use serde_json::Value;

/// Formats the run transcript
pub struct RunFormatter;

impl RunFormatter {
    /// `Total tools: N` followed by a numbered list of names and descriptions.
    pub fn tool_list(tools: &[ToolDescriptor]) -> Vec<String> {
        let mut lines = Vec::with_capacity(tools.len() + 1);
        lines.push(format!("Total tools: {}", tools.len()));
        lines.extend(tools.iter().enumerate().map(|(i, tool)| {
            format!(
                "{}. {} — {}",
                i + 1,
                tool.name,
                tool.description.as_deref().unwrap_or("")
            )
        }));
        lines
    }

    pub fn batch_banner(count: usize) -> String {
        format!(
            "\n--- Processing the first {} tool(s) in tools_to_call order ---\n",
            count
        )
    }

    pub fn skipped(index: usize, tool_name: &str) -> String {
        format!(
            "[{}] {}: SKIPPED (set ALLOW_MUTATIONS=1 to enable write tools)\n",
            index, tool_name
        )
    }

    /// Attempt header plus the argument record as indented JSON.
    pub fn calling(index: usize, call: &ToolCall, attempt: u32, max: u32) -> String {
        format!(
            "[{}] Calling {} with args (attempt {}/{}):\n{}",
            index,
            call.tool_name,
            attempt,
            max,
            call.arguments_pretty()
        )
    }

    pub fn attempt_error(index: usize, tool_name: &str, attempt: u32, max: u32, message: &str) -> String {
        format!(
            "[{}] {} ERROR (attempt {}/{}): {}",
            index, tool_name, attempt, max, message
        )
    }

    pub fn retrying(index: usize, tool_name: &str) -> String {
        format!("[{}] Retrying {}...", index, tool_name)
    }

    pub fn failed(index: usize, tool_name: &str, max: u32, exception: Option<&str>) -> String {
        match exception {
            Some(e) => format!("[{}] {} FAILED after {} attempts: {}\n", index, tool_name, max, e),
            None => format!("[{}] {} FAILED after {} attempts\n", index, tool_name, max),
        }
    }

    /// `[i] name RESULT:`, the structured payload, each block, then a blank line.
    pub fn result(index: usize, tool_name: &str, result: &CallResult) -> Vec<String> {
        let mut lines = vec![format!("[{}] {} RESULT:", index, tool_name)];
        if let Some(payload) = result.structured_content.as_ref().filter(|v| is_present(v)) {
            lines.push(serde_json::to_string_pretty(payload).unwrap_or_else(|_| payload.to_string()));
        }
        lines.extend(result.content.iter().map(|block| block.render()));
        lines.push(String::new());
        lines
    }

    /// One line per processed tool, then the totals.
    pub fn summary(summary: &RunSummary) -> Vec<String> {
        let width = summary
            .entries()
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0);

        let mut lines = vec!["Run summary:".to_string()];
        for (name, status) in summary.entries() {
            let detail = match status {
                ToolRunStatus::Succeeded { attempts } => format!("succeeded (attempt {})", attempts),
                ToolRunStatus::Failed { attempts } => format!("failed after {} attempts", attempts),
                ToolRunStatus::Skipped => "skipped (mutations disabled)".to_string(),
            };
            lines.push(format!("  {:<width$}  {}", name, detail, width = width));
        }
        lines.push(format!(
            "{} succeeded, {} failed, {} skipped",
            summary.succeeded(),
            summary.failed(),
            summary.skipped()
        ));
        lines
    }
}

/// Whether a structured payload carries anything worth printing.
fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Number(n) => n.as_f64() != Some(0.0),
    }
}
