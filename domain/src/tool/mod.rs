//! Tool domain module
//!
//! Types describing the remote tools this driver works with, and how a
//! call to one of them turns out.
//!
//! ```text
//! ┌────────────────┐    ┌──────────────┐    ┌───────────────────┐
//! │ ToolDescriptor │───▶│ ToolCall     │───▶│ CallResult        │
//! │ (tools/list)   │    │ (tools/call) │    │ → InvocationOutcome│
//! └────────────────┘    └──────────────┘    └───────────────────┘
//! ```
//!
//! # Mutation gate
//!
//! Each tool name maps to a [`RiskLevel`](policy::RiskLevel):
//!
//! | Risk | Examples | Runs by default |
//! |------|----------|-----------------|
//! | **ReadOnly** | `verify_account_setup`, `preview_ad` | Yes |
//! | **Mutating** | `create_campaign`, `delete_ad` | Only with mutations allowed |
//!
//! # Key Types
//!
//! - [`ToolDescriptor`]: A tool advertised by the host (name, description, raw schema)
//! - [`ToolCall`]: An invocation request with its [`ArgumentRecord`]
//! - [`CallResult`]: What the host returned (error flag, structured payload, content blocks)
//! - [`InvocationOutcome`]: Success / soft failure / exception for one attempt
//! - [`MutationPolicy`]: Process-wide gate for state-changing tools

pub mod entities;
pub mod policy;
pub mod value_objects;

pub use entities::{ArgumentRecord, ToolCall, ToolDescriptor};
pub use policy::{GateDecision, MutationPolicy, RiskLevel, is_mutating};
pub use value_objects::{CallResult, ContentBlock, InvocationOutcome, ToolRunStatus};
