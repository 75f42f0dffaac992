//! Type-directed parsers for raw text input

use crate::schema::PropertyType;
use serde_json::{Number, Value};
use thiserror::Error;

const TRUE_WORDS: [&str; 5] = ["true", "t", "1", "y", "yes"];
const FALSE_WORDS: [&str; 5] = ["false", "f", "0", "n", "no"];

/// A raw line that could not be converted to the declared type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoercionError {
    #[error("Enter true/false, y/n, 1/0")]
    InvalidBoolean,

    #[error("invalid integer: '{0}'")]
    InvalidInteger(String),

    #[error("invalid number: '{0}'")]
    InvalidNumber(String),

    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Expected a JSON object")]
    ExpectedObject,
}

/// Parse a yes/no style answer, case-insensitively.
pub fn parse_bool(raw: &str) -> Option<bool> {
    let lowered = raw.trim().to_lowercase();
    if TRUE_WORDS.contains(&lowered.as_str()) {
        Some(true)
    } else if FALSE_WORDS.contains(&lowered.as_str()) {
        Some(false)
    } else {
        None
    }
}

/// Parse a base-10, 64-bit signed integer.
pub fn parse_integer(raw: &str) -> Result<i64, CoercionError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| CoercionError::InvalidInteger(raw.to_string()))
}

/// Parse a finite floating-point number as a JSON number.
pub fn parse_number(raw: &str) -> Result<Number, CoercionError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .ok_or_else(|| CoercionError::InvalidNumber(raw.to_string()))
}

/// Parse a list: a JSON array literal first, comma-separated text otherwise.
///
/// The comma fallback trims each segment and drops empty ones.
pub fn parse_list(raw: &str) -> Vec<Value> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Array(items)) => items,
        _ => raw
            .split(',')
            .map(str::trim)
            .filter(|segment| !segment.is_empty())
            .map(|segment| Value::String(segment.to_string()))
            .collect(),
    }
}

/// Parse a JSON object literal. Any other JSON value is rejected.
pub fn parse_object(raw: &str) -> Result<Value, CoercionError> {
    match serde_json::from_str::<Value>(raw) {
        Ok(value @ Value::Object(_)) => Ok(value),
        Ok(_) => Err(CoercionError::ExpectedObject),
        Err(e) => Err(CoercionError::InvalidJson(e.to_string())),
    }
}

/// Convert a non-blank raw line according to the declared type.
///
/// `string` and unrecognized types return the text unmodified. Array
/// element constraints are checked by the caller.
pub fn coerce(property_type: &PropertyType, raw: &str) -> Result<Value, CoercionError> {
    match property_type {
        PropertyType::Boolean => parse_bool(raw)
            .map(Value::Bool)
            .ok_or(CoercionError::InvalidBoolean),
        PropertyType::Integer => parse_integer(raw).map(Value::from),
        PropertyType::Number => parse_number(raw).map(Value::Number),
        PropertyType::Array => Ok(Value::Array(parse_list(raw))),
        PropertyType::Object => parse_object(raw),
        PropertyType::String | PropertyType::Other(_) => Ok(Value::String(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_bool_truthy_and_falsy() {
        for raw in ["yes", "Y", "1", "true", "T", " TRUE "] {
            assert_eq!(parse_bool(raw), Some(true), "{raw}");
        }
        for raw in ["no", "n", "0", "false", "F", "No"] {
            assert_eq!(parse_bool(raw), Some(false), "{raw}");
        }
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_bool("2"), None);
    }

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("42"), Ok(42));
        assert_eq!(parse_integer(" -7 "), Ok(-7));
        assert!(parse_integer("4.2").is_err());
        assert!(parse_integer("ten").is_err());
    }

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("2.5").unwrap().as_f64(), Some(2.5));
        assert_eq!(parse_number("10").unwrap().as_f64(), Some(10.0));
        assert!(parse_number("abc").is_err());
        assert!(parse_number("NaN").is_err());
        assert!(parse_number("inf").is_err());
    }

    #[test]
    fn test_parse_list_json_first_then_commas() {
        assert_eq!(parse_list(r#"["a", "b"]"#), vec![json!("a"), json!("b")]);
        assert_eq!(parse_list("[1, 2]"), vec![json!(1), json!(2)]);
        assert_eq!(parse_list(" a, ,b ,"), vec![json!("a"), json!("b")]);
        // A JSON scalar is not a list, so the comma fallback applies
        assert_eq!(parse_list("\"x\""), vec![json!("\"x\"")]);
    }

    #[test]
    fn test_parse_object_rejects_non_objects() {
        assert_eq!(parse_object(r#"{"k": 1}"#), Ok(json!({"k": 1})));
        assert_eq!(parse_object("[1]"), Err(CoercionError::ExpectedObject));
        assert!(matches!(parse_object("{oops"), Err(CoercionError::InvalidJson(_))));
    }

    #[test]
    fn test_coerce_string_returns_raw_unmodified() {
        assert_eq!(coerce(&PropertyType::String, "  padded "), Ok(json!("  padded ")));
        assert_eq!(
            coerce(&PropertyType::Other("date".into()), "2024-01-01"),
            Ok(json!("2024-01-01"))
        );
    }

    #[test]
    fn test_coerce_typed_values() {
        assert_eq!(coerce(&PropertyType::Boolean, "y"), Ok(json!(true)));
        assert_eq!(coerce(&PropertyType::Integer, "12"), Ok(json!(12)));
        assert_eq!(coerce(&PropertyType::Number, "1.5"), Ok(json!(1.5)));
        assert_eq!(coerce(&PropertyType::Array, "a,b"), Ok(json!(["a", "b"])));
        assert_eq!(
            coerce(&PropertyType::Boolean, "maybe"),
            Err(CoercionError::InvalidBoolean)
        );
    }
}
