//! Domain layer for mcp-conductor
//!
//! This crate contains the core rules of the tool-pipeline driver.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Schema normalization
//!
//! Tool hosts describe inputs in several shapes. [`schema::normalize`]
//! reduces each of them to one ordered `(properties, required)` pair.
//!
//! ## Coercion
//!
//! One raw line of human input is evaluated against a property and either
//! accepted as a typed JSON value, omitted, or rejected for a re-prompt.
//!
//! ## Pipeline and mutation gate
//!
//! A fixed [`PipelineSpec`] is resolved against the advertised tools;
//! state-changing tools only run under an allowing [`MutationPolicy`].

pub mod coercion;
pub mod core;
pub mod pipeline;
pub mod schema;
pub mod tool;

// Re-export commonly used types
pub use coercion::{CoercionError, FieldOutcome, Rejection, evaluate_input};
pub use core::error::DomainError;
pub use pipeline::{
    DEFAULT_PIPELINE, PipelineSpec, ResolvedPipeline, RunSummary, parse_tool_count,
};
pub use schema::{NormalizedSchema, PropertySchema, PropertyType, SchemaShape, normalize};
pub use tool::{
    entities::{ArgumentRecord, ToolCall, ToolDescriptor},
    policy::{GateDecision, MutationPolicy, RiskLevel, is_mutating},
    value_objects::{CallResult, ContentBlock, InvocationOutcome, ToolRunStatus},
};
