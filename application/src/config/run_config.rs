//! Run configuration for the batch orchestrator.

use conductor_domain::{MutationPolicy, PipelineSpec};

/// Attempts per tool when nothing else is configured.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Explicit configuration for one run.
///
/// Built by the binary from the loaded file/environment configuration.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Access credential handed to the tool host. Empty means missing.
    pub access_token: String,
    /// Target account identifier, passed through to the tool host.
    pub account_id: String,
    /// Whether mutating tools may run.
    pub allow_mutations: bool,
    /// Attempt bound per tool invocation (at least 1).
    pub max_attempts: u32,
    /// Intended execution order.
    pub pipeline: PipelineSpec,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            access_token: String::new(),
            account_id: String::new(),
            allow_mutations: false,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            pipeline: PipelineSpec::default(),
        }
    }
}

impl RunConfig {
    // ==================== Builder Methods ====================

    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = token.into();
        self
    }

    pub fn with_account_id(mut self, account_id: impl Into<String>) -> Self {
        self.account_id = account_id.into();
        self
    }

    pub fn with_allow_mutations(mut self, allow: bool) -> Self {
        self.allow_mutations = allow;
        self
    }

    /// Set the attempt bound; values below 1 are raised to 1.
    pub fn with_max_attempts(mut self, max: u32) -> Self {
        self.max_attempts = max.max(1);
        self
    }

    pub fn with_pipeline(mut self, pipeline: PipelineSpec) -> Self {
        self.pipeline = pipeline;
        self
    }

    // ==================== Queries ====================

    pub fn has_credential(&self) -> bool {
        !self.access_token.is_empty()
    }

    pub fn mutation_policy(&self) -> MutationPolicy {
        MutationPolicy::new(self.allow_mutations)
    }
}
