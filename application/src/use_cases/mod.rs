//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod collect_arguments;
pub mod invoke_tool;
pub mod run_pipeline;

#[cfg(test)]
pub(crate) mod test_support;
