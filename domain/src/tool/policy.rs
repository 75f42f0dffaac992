//! Mutation gate
//!
//! Tools whose names start with a state-changing verb are classified as
//! [`RiskLevel::Mutating`]. They only run when mutations are explicitly
//! allowed for the process; otherwise the orchestrator skips them with a
//! notice. A skip is not a failure and consumes no retry attempt.

use serde::{Deserialize, Serialize};

/// Name prefixes that mark a tool as changing remote state.
pub const MUTATING_PREFIXES: [&str; 5] = ["create_", "update_", "pause_", "resume_", "delete_"];

/// Risk level of a tool, derived from its name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// Read-only (e.g., verify_account_setup, preview_ad)
    ReadOnly,
    /// Changes remote state (e.g., create_campaign, delete_ad)
    Mutating,
}

impl RiskLevel {
    pub fn for_tool(name: &str) -> Self {
        if is_mutating(name) {
            RiskLevel::Mutating
        } else {
            RiskLevel::ReadOnly
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            RiskLevel::ReadOnly => "read-only",
            RiskLevel::Mutating => "mutating",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// True iff the tool name begins with a mutating verb prefix.
pub fn is_mutating(name: &str) -> bool {
    MUTATING_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}

/// Gate verdict for one tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Run,
    Skip,
}

/// Process-wide mutation policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MutationPolicy {
    allow_mutations: bool,
}

impl MutationPolicy {
    pub fn new(allow_mutations: bool) -> Self {
        Self { allow_mutations }
    }

    pub fn decide(&self, tool_name: &str) -> GateDecision {
        match RiskLevel::for_tool(tool_name) {
            RiskLevel::Mutating if !self.allow_mutations => GateDecision::Skip,
            _ => GateDecision::Run,
        }
    }
}
