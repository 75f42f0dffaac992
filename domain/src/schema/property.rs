//! Property schema fragments
//!
//! A [`PropertySchema`] is the typed view of one entry in a tool's input
//! schema. Only the hints the prompt loop actually honors are kept: the
//! declared type, a description, a literal `enum` and the `enum` of array
//! items. Everything else in the fragment is ignored.

use serde_json::Value;

/// Declared type of a property.
///
/// Unknown or non-string type tags are preserved as [`PropertyType::Other`]
/// so they can still be displayed; they coerce like `string`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyType {
    String,
    Boolean,
    Integer,
    Number,
    Array,
    Object,
    Other(String),
}

impl PropertyType {
    /// Parse a JSON `type` tag. A missing tag means `string`.
    pub fn from_tag(tag: Option<&Value>) -> Self {
        match tag {
            None | Some(Value::Null) => PropertyType::String,
            Some(Value::String(s)) => match s.as_str() {
                "string" => PropertyType::String,
                "boolean" => PropertyType::Boolean,
                "integer" => PropertyType::Integer,
                "number" => PropertyType::Number,
                "array" => PropertyType::Array,
                "object" => PropertyType::Object,
                other => PropertyType::Other(other.to_string()),
            },
            Some(other) => PropertyType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            PropertyType::String => "string",
            PropertyType::Boolean => "boolean",
            PropertyType::Integer => "integer",
            PropertyType::Number => "number",
            PropertyType::Array => "array",
            PropertyType::Object => "object",
            PropertyType::Other(tag) => tag,
        }
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Schema hints for a single property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySchema {
    /// Declared type (default `string`)
    pub property_type: PropertyType,
    /// Human-readable description
    pub description: Option<String>,
    /// Allowed literal values, in declaration order
    pub enum_values: Option<Vec<Value>>,
    /// Allowed values for array elements (`items.enum`)
    pub item_enum: Option<Vec<Value>>,
}

impl Default for PropertySchema {
    fn default() -> Self {
        Self {
            property_type: PropertyType::String,
            description: None,
            enum_values: None,
            item_enum: None,
        }
    }
}

impl PropertySchema {
    pub fn new(property_type: PropertyType) -> Self {
        Self {
            property_type,
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_enum(mut self, values: Vec<Value>) -> Self {
        self.enum_values = non_empty(values);
        self
    }

    pub fn with_item_enum(mut self, values: Vec<Value>) -> Self {
        self.item_enum = non_empty(values);
        self
    }

    /// Build from a raw schema fragment.
    ///
    /// Non-object fragments (including `null`) yield the default schema.
    pub fn from_value(fragment: &Value) -> Self {
        let Some(obj) = fragment.as_object() else {
            return Self::default();
        };

        let description = obj
            .get("description")
            .and_then(|d| d.as_str())
            .map(|d| d.to_string());

        let enum_values = obj
            .get("enum")
            .and_then(|e| e.as_array())
            .and_then(|e| non_empty(e.clone()));

        let item_enum = obj
            .get("items")
            .and_then(|items| items.get("enum"))
            .and_then(|e| e.as_array())
            .and_then(|e| non_empty(e.clone()));

        Self {
            property_type: PropertyType::from_tag(obj.get("type")),
            description,
            enum_values,
            item_enum,
        }
    }

    /// Description with surrounding whitespace removed, if non-blank.
    pub fn display_description(&self) -> Option<&str> {
        self.description
            .as_deref()
            .map(str::trim)
            .filter(|d| !d.is_empty())
    }

    /// Enum members rendered for display (strings unquoted).
    pub fn display_enum(&self) -> Option<String> {
        self.enum_values
            .as_ref()
            .map(|values| values.iter().map(display_value).collect::<Vec<_>>().join(", "))
    }
}

/// Render a JSON value the way a human typed it: strings without quotes.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn non_empty(values: Vec<Value>) -> Option<Vec<Value>> {
    if values.is_empty() { None } else { Some(values) }
}
