//! Application-level configuration.
//!
//! - [`RunConfig`]: everything the batch orchestrator needs to know about
//!   the process, injected at construction instead of read from the
//!   environment

pub mod run_config;

pub use run_config::{DEFAULT_MAX_ATTEMPTS, RunConfig};
