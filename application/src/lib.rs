//! Application layer for mcp-conductor
//!
//! This crate contains use cases, port definitions, and run configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_MAX_ATTEMPTS, RunConfig};
pub use ports::{
    console::{ConsoleError, ConsolePort},
    progress::{NoRunProgress, RunProgressNotifier},
    tool_host::{HostError, ToolHostPort},
};
pub use use_cases::collect_arguments::ArgumentCollector;
pub use use_cases::invoke_tool::{RetryingInvoker, ToolInvocation};
pub use use_cases::run_pipeline::{RunPipelineError, RunPipelineUseCase};
