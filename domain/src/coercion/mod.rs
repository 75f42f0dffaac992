//! Interactive value coercion rules
//!
//! The pure half of the prompt loop: given a property's schema, a required
//! flag and one raw line of human input, decide whether the line is
//! accepted (and as which JSON value), omitted, or rejected. The I/O half
//! lives in the application layer's argument collector.

pub mod field;
pub mod parsers;

pub use field::{FieldOutcome, Rejection, evaluate_input};
pub use parsers::{CoercionError, coerce, parse_bool};
