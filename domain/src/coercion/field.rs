//! Per-field input evaluation
//!
//! The prompt loop for one property is a small state machine:
//!
//! ```text
//!            ┌──────────────────────────────┐
//!            ▼                              │ Rejected
//!   AwaitingInput ──raw line──▶ evaluate ───┤
//!                                           ├─▶ Accepted(value)   (terminal)
//!                                           └─▶ Omitted           (terminal, optional only)
//! ```
//!
//! There is no attempt cap: a field stays in `AwaitingInput` until the
//! human produces an acceptable answer. Only a genuinely blank line on an
//! optional field leads to `Omitted`; a parse failure never does.

use super::parsers::{CoercionError, coerce};
use crate::schema::{PropertySchema, PropertyType, display_value};
use serde_json::Value;

/// Why a raw line was not accepted.
#[derive(Debug, Clone, PartialEq)]
pub enum Rejection {
    /// Blank line on a required field
    RequiredBlank,
    /// Value is not one of the declared `enum` literals
    NotInEnum,
    /// Array elements outside `items.enum`
    DisallowedItems(Vec<Value>),
    /// Text could not be parsed as the declared type
    Parse(CoercionError),
}

impl Rejection {
    /// Message shown to the human before re-prompting.
    pub fn message(&self) -> String {
        match self {
            Rejection::RequiredBlank => "This field is required. Please provide a value.".into(),
            Rejection::NotInEnum => "Value not in allowed enum. Try again.".into(),
            Rejection::DisallowedItems(items) => format!(
                "These values are not allowed: [{}]",
                items.iter().map(display_value).collect::<Vec<_>>().join(", ")
            ),
            Rejection::Parse(e) => format!("Could not parse input ({}). Please try again.", e),
        }
    }
}

impl std::fmt::Display for Rejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Result of evaluating one raw line against a property.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldOutcome {
    /// Value admitted into the argument record
    Accepted(Value),
    /// Optional field left blank; key stays absent
    Omitted,
    /// Re-prompt the same field
    Rejected(Rejection),
}

impl FieldOutcome {
    /// Whether the prompt loop for this field is finished.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FieldOutcome::Rejected(_))
    }
}

/// Evaluate a raw line (without its line terminator) for one property.
///
/// Order of checks: blank, enum membership, type coercion, item enum.
pub fn evaluate_input(schema: &PropertySchema, required: bool, raw: &str) -> FieldOutcome {
    if raw.trim().is_empty() {
        return if required {
            FieldOutcome::Rejected(Rejection::RequiredBlank)
        } else {
            FieldOutcome::Omitted
        };
    }

    if let Some(allowed) = &schema.enum_values {
        let is_member = allowed
            .iter()
            .any(|v| v.as_str().is_some_and(|s| s == raw));
        return if is_member {
            FieldOutcome::Accepted(Value::String(raw.to_string()))
        } else {
            FieldOutcome::Rejected(Rejection::NotInEnum)
        };
    }

    let value = match coerce(&schema.property_type, raw) {
        Ok(value) => value,
        Err(e) => return FieldOutcome::Rejected(Rejection::Parse(e)),
    };

    if let (PropertyType::Array, Some(allowed), Value::Array(items)) =
        (&schema.property_type, &schema.item_enum, &value)
    {
        let bad: Vec<Value> = items
            .iter()
            .filter(|item| !allowed.contains(item))
            .cloned()
            .collect();
        if !bad.is_empty() {
            return FieldOutcome::Rejected(Rejection::DisallowedItems(bad));
        }
    }

    FieldOutcome::Accepted(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn array_of(values: &[&str]) -> PropertySchema {
        PropertySchema::new(PropertyType::Array)
            .with_item_enum(values.iter().map(|v| json!(v)).collect())
    }

    #[test]
    fn test_blank_required_is_rejected() {
        let schema = PropertySchema::default();
        assert_eq!(
            evaluate_input(&schema, true, "   "),
            FieldOutcome::Rejected(Rejection::RequiredBlank)
        );
    }

    #[test]
    fn test_blank_optional_is_omitted() {
        let schema = PropertySchema::new(PropertyType::Integer);
        let outcome = evaluate_input(&schema, false, "");
        assert_eq!(outcome, FieldOutcome::Omitted);
        assert!(outcome.is_terminal());
    }

    #[test]
    fn test_enum_takes_precedence_over_type() {
        let schema = PropertySchema::new(PropertyType::Integer)
            .with_enum(vec![json!("ACTIVE"), json!("PAUSED")]);

        assert_eq!(
            evaluate_input(&schema, true, "PAUSED"),
            FieldOutcome::Accepted(json!("PAUSED"))
        );
        // Case-sensitive, no trimming
        assert_eq!(
            evaluate_input(&schema, true, "paused"),
            FieldOutcome::Rejected(Rejection::NotInEnum)
        );
        assert_eq!(
            evaluate_input(&schema, true, " PAUSED"),
            FieldOutcome::Rejected(Rejection::NotInEnum)
        );
    }

    #[test]
    fn test_boolean_words() {
        let schema = PropertySchema::new(PropertyType::Boolean);
        for raw in ["yes", "Y", "1", "true"] {
            assert_eq!(evaluate_input(&schema, true, raw), FieldOutcome::Accepted(json!(true)));
        }
        for raw in ["no", "n", "0", "false"] {
            assert_eq!(evaluate_input(&schema, true, raw), FieldOutcome::Accepted(json!(false)));
        }
        assert_eq!(
            evaluate_input(&schema, true, "maybe"),
            FieldOutcome::Rejected(Rejection::Parse(CoercionError::InvalidBoolean))
        );
    }

    #[test]
    fn test_parse_failure_on_optional_is_not_omitted() {
        let schema = PropertySchema::new(PropertyType::Number);
        let outcome = evaluate_input(&schema, false, "lots");
        assert!(matches!(outcome, FieldOutcome::Rejected(Rejection::Parse(_))));
        assert!(!outcome.is_terminal());
    }

    #[test]
    fn test_array_item_enum() {
        let schema = array_of(&["a", "b"]);

        assert_eq!(
            evaluate_input(&schema, true, "a, c"),
            FieldOutcome::Rejected(Rejection::DisallowedItems(vec![json!("c")]))
        );
        assert_eq!(
            evaluate_input(&schema, true, r#"["a","b"]"#),
            FieldOutcome::Accepted(json!(["a", "b"]))
        );
        assert_eq!(
            evaluate_input(&schema, true, "a,b"),
            FieldOutcome::Accepted(json!(["a", "b"]))
        );
    }

    #[test]
    fn test_object_requires_json_object() {
        let schema = PropertySchema::new(PropertyType::Object);
        assert_eq!(
            evaluate_input(&schema, true, r#"{"budget": 100}"#),
            FieldOutcome::Accepted(json!({"budget": 100}))
        );
        assert_eq!(
            evaluate_input(&schema, true, "[1, 2]"),
            FieldOutcome::Rejected(Rejection::Parse(CoercionError::ExpectedObject))
        );
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            Rejection::DisallowedItems(vec![json!("c"), json!(4)]).message(),
            "These values are not allowed: [c, 4]"
        );
        assert_eq!(
            Rejection::Parse(CoercionError::InvalidBoolean).to_string(),
            "Could not parse input (Enter true/false, y/n, 1/0). Please try again."
        );
    }
}
