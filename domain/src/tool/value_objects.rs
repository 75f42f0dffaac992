//! Tool domain value objects: call results and invocation outcomes
//!
//! A [`CallResult`] is what the host returns when a call completes at the
//! protocol level. Whether that counts as success is decided by
//! [`InvocationOutcome::classify`]:
//!
//! | Host behaviour | Outcome | Retried? |
//! |----------------|---------|----------|
//! | returned, `is_error = false` | `Success` | no |
//! | returned, `is_error = true` | `SoftFailure` | yes, until attempts run out |
//! | call raised (transport/RPC error) | `Exception` | yes, until attempts run out |

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One block of a call result's content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    /// Plain text, rendered verbatim
    Text { text: String },
    /// Structured data, rendered as indented JSON
    Json { data: Value },
}

impl ContentBlock {
    pub fn text(text: impl Into<String>) -> Self {
        ContentBlock::Text { text: text.into() }
    }

    pub fn json(data: Value) -> Self {
        ContentBlock::Json { data }
    }

    /// Text for display: verbatim text or pretty-printed JSON.
    pub fn render(&self) -> String {
        match self {
            ContentBlock::Text { text } => text.clone(),
            ContentBlock::Json { data } => {
                serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string())
            }
        }
    }
}

/// Result of a completed tool call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CallResult {
    /// Host flagged the call as unsuccessful
    pub is_error: bool,
    /// Optional structured payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structured_content: Option<Value>,
    /// Ordered content blocks
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

impl CallResult {
    /// Create a successful result
    pub fn success(content: Vec<ContentBlock>) -> Self {
        Self {
            is_error: false,
            structured_content: None,
            content,
        }
    }

    /// Create an error-flagged result
    pub fn error(content: Vec<ContentBlock>) -> Self {
        Self {
            is_error: true,
            structured_content: None,
            content,
        }
    }

    pub fn with_structured_content(mut self, payload: Value) -> Self {
        self.structured_content = Some(payload);
        self
    }

    /// Concatenated text blocks, used as the failure message.
    pub fn error_message(&self) -> String {
        let text: Vec<&str> = self
            .content
            .iter()
            .filter_map(|block| match block {
                ContentBlock::Text { text } => Some(text.as_str()),
                ContentBlock::Json { .. } => None,
            })
            .collect();

        if text.is_empty() {
            "Unknown error".to_string()
        } else {
            text.join("\n")
        }
    }
}

/// Classified outcome of a single invocation attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum InvocationOutcome {
    /// Call returned and was not flagged as an error
    Success(CallResult),
    /// Call returned but the host flagged it as an error
    SoftFailure(String),
    /// Call itself failed (transport, protocol or RPC error)
    Exception(String),
}

impl InvocationOutcome {
    /// Classify the result of calling the host.
    pub fn classify<E: std::fmt::Display>(result: Result<CallResult, E>) -> Self {
        match result {
            Ok(call) if !call.is_error => InvocationOutcome::Success(call),
            Ok(call) => InvocationOutcome::SoftFailure(call.error_message()),
            Err(e) => InvocationOutcome::Exception(e.to_string()),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, InvocationOutcome::Success(_))
    }

    /// Failure text for reporting; `None` on success.
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            InvocationOutcome::Success(_) => None,
            InvocationOutcome::SoftFailure(msg) | InvocationOutcome::Exception(msg) => Some(msg),
        }
    }
}

/// Final status of one pipeline entry in a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolRunStatus {
    /// Succeeded on the given attempt
    Succeeded { attempts: u32 },
    /// Every attempt failed
    Failed { attempts: u32 },
    /// Blocked by the mutation gate; not a failure
    Skipped,
}

impl ToolRunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ToolRunStatus::Succeeded { .. } => "succeeded",
            ToolRunStatus::Failed { .. } => "failed",
            ToolRunStatus::Skipped => "skipped",
        }
    }
}

impl std::fmt::Display for ToolRunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToolRunStatus::Succeeded { attempts } | ToolRunStatus::Failed { attempts } => {
                write!(f, "{} (attempts: {})", self.as_str(), attempts)
            }
            ToolRunStatus::Skipped => write!(f, "{}", self.as_str()),
        }
    }
}
