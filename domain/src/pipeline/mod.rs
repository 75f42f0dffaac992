//! Pipeline resolution
//!
//! A [`PipelineSpec`] is the intended execution order of a workflow, known
//! statically and independent of any single tool's schema. At run time it
//! is resolved against what the host actually advertises: pipeline order is
//! kept and names the host does not offer are dropped.

use crate::core::error::DomainError;
use crate::tool::{ToolDescriptor, ToolRunStatus};
use serde::{Deserialize, Serialize};

/// Default ad-campaign workflow.
pub const DEFAULT_PIPELINE: [&str; 8] = [
    "verify_account_setup",
    "create_campaign",
    "check_campaign_readiness",
    "create_ad_set_enhanced",
    "create_ad_creative",
    "validate_creative_setup",
    "preview_ad",
    "update_campaign",
];

/// Ordered tool names of a workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PipelineSpec {
    tools: Vec<String>,
}

impl Default for PipelineSpec {
    fn default() -> Self {
        Self::new(DEFAULT_PIPELINE)
    }
}

impl PipelineSpec {
    pub fn new<I, S>(tools: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tools: tools.into_iter().map(Into::into).collect(),
        }
    }

    pub fn tools(&self) -> &[String] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Resolve against the advertised tools.
    ///
    /// Output follows pipeline order, not host order. A name listed twice
    /// in the pipeline resolves twice.
    pub fn resolve(&self, available: &[ToolDescriptor]) -> ResolvedPipeline {
        let tools = self
            .tools
            .iter()
            .filter_map(|name| available.iter().find(|tool| &tool.name == name))
            .cloned()
            .collect();
        ResolvedPipeline { tools }
    }
}

/// Pipeline entries the host can actually serve, in execution order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedPipeline {
    tools: Vec<ToolDescriptor>,
}

impl ResolvedPipeline {
    pub fn tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    pub fn names(&self) -> Vec<&str> {
        self.tools.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Clamp a requested count to the pipeline length.
    pub fn clamp(&self, requested: usize) -> usize {
        requested.min(self.tools.len())
    }

    /// The first `requested` entries (clamped).
    pub fn take(&self, requested: usize) -> &[ToolDescriptor] {
        &self.tools[..self.clamp(requested)]
    }
}

/// Per-tool outcome of a processed batch, in execution order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    entries: Vec<(String, ToolRunStatus)>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, tool_name: impl Into<String>, status: ToolRunStatus) {
        self.entries.push((tool_name.into(), status));
    }

    pub fn entries(&self) -> &[(String, ToolRunStatus)] {
        &self.entries
    }

    pub fn status_of(&self, tool_name: &str) -> Option<ToolRunStatus> {
        self.entries
            .iter()
            .find(|(name, _)| name == tool_name)
            .map(|(_, status)| *status)
    }

    pub fn succeeded(&self) -> usize {
        self.count(|s| matches!(s, ToolRunStatus::Succeeded { .. }))
    }

    pub fn failed(&self) -> usize {
        self.count(|s| matches!(s, ToolRunStatus::Failed { .. }))
    }

    pub fn skipped(&self) -> usize {
        self.count(|s| matches!(s, ToolRunStatus::Skipped))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn count(&self, pred: impl Fn(&ToolRunStatus) -> bool) -> usize {
        self.entries.iter().filter(|(_, s)| pred(s)).count()
    }
}

/// Parse the human's answer to "how many tools".
///
/// Surrounding whitespace is ignored. Zero and negatives are rejected
/// separately from text that is not a number at all.
pub fn parse_tool_count(raw: &str) -> Result<usize, DomainError> {
    let n: i64 = raw
        .trim()
        .parse()
        .map_err(|_| DomainError::InvalidCount(raw.to_string()))?;
    if n <= 0 {
        return Err(DomainError::NonPositiveCount(n));
    }
    usize::try_from(n).map_err(|_| DomainError::InvalidCount(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn advertised(names: &[&str]) -> Vec<ToolDescriptor> {
        names.iter().map(|n| ToolDescriptor::new(*n)).collect()
    }

    #[test]
    fn test_default_pipeline_order() {
        let spec = PipelineSpec::default();
        assert_eq!(spec.len(), 8);
        assert_eq!(spec.tools()[0], "verify_account_setup");
        assert_eq!(spec.tools()[7], "update_campaign");
    }

    #[test]
    fn test_resolve_drops_missing_and_clamps() {
        let spec = PipelineSpec::new(["create_campaign", "verify_account_setup"]);
        let resolved = spec.resolve(&advertised(&["verify_account_setup"]));

        assert_eq!(resolved.names(), vec!["verify_account_setup"]);
        assert_eq!(resolved.clamp(5), 1);
        assert_eq!(resolved.take(5).len(), 1);
    }

    #[test]
    fn test_resolve_keeps_pipeline_order_not_host_order() {
        let spec = PipelineSpec::new(["a", "b", "c"]);
        let resolved = spec.resolve(&advertised(&["c", "x", "a", "b"]));
        assert_eq!(resolved.names(), vec!["a", "b", "c"]);
        assert_eq!(resolved.take(2).len(), 2);
    }

    #[test]
    fn test_resolve_nothing_available() {
        let resolved = PipelineSpec::default().resolve(&advertised(&["unrelated"]));
        assert!(resolved.is_empty());
        assert_eq!(resolved.clamp(3), 0);
    }

    #[test]
    fn test_run_summary_counts() {
        let mut summary = RunSummary::new();
        summary.record("verify_account_setup", ToolRunStatus::Succeeded { attempts: 1 });
        summary.record("create_campaign", ToolRunStatus::Skipped);
        summary.record("preview_ad", ToolRunStatus::Failed { attempts: 3 });

        assert_eq!(summary.len(), 3);
        assert_eq!(summary.succeeded(), 1);
        assert_eq!(summary.skipped(), 1);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.status_of("create_campaign"), Some(ToolRunStatus::Skipped));
        assert_eq!(summary.status_of("missing"), None);
    }

    #[test]
    fn test_parse_tool_count() {
        assert_eq!(parse_tool_count("3"), Ok(3));
        assert_eq!(parse_tool_count(" 12\n"), Ok(12));
        assert_eq!(parse_tool_count("0"), Err(DomainError::NonPositiveCount(0)));
        assert_eq!(parse_tool_count("-2"), Err(DomainError::NonPositiveCount(-2)));
        assert!(matches!(parse_tool_count("three"), Err(DomainError::InvalidCount(_))));
        assert!(matches!(parse_tool_count(""), Err(DomainError::InvalidCount(_))));
    }
}
