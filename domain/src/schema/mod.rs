//! Tool input schema module
//!
//! Tool hosts publish an `inputSchema` for every tool, but not always in
//! canonical JSON Schema form. This module turns whatever arrives into a
//! [`NormalizedSchema`]: an ordered list of [`PropertySchema`]s plus the set
//! of required property names.
//!
//! ```text
//! raw Value ──▶ SchemaShape::classify ──▶ SchemaShape::normalize ──▶ NormalizedSchema
//!               (typed | bare | inline | opaque)
//! ```
//!
//! This is not a JSON Schema validator: `$ref`, `oneOf`, ranges, patterns
//! and nested object schemas are out of scope.

pub mod normalize;
pub mod property;

pub use normalize::{NormalizedSchema, SchemaShape, normalize};
pub use property::{PropertySchema, PropertyType, display_value};
