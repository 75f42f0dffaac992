//! Input schema normalization
//!
//! Tool hosts describe their inputs in several loosely-specified shapes.
//! [`SchemaShape::classify`] recognizes which one a value is, and
//! [`SchemaShape::normalize`] turns it into the canonical
//! [`NormalizedSchema`] used everywhere downstream:
//!
//! | Shape | Example | Required set |
//! |-------|---------|--------------|
//! | [`Typed`](SchemaShape::Typed) | `{type:"object", properties:{..}, required:[..]}` | `required` (default empty) |
//! | [`Bare`](SchemaShape::Bare) | `{properties:{..}, required:[..]}` | `required` (default empty) |
//! | [`Inline`](SchemaShape::Inline) | `{fieldA:{type:"string"}, ..}` | `required` if it is a list, else **every** field |
//! | [`Opaque`](SchemaShape::Opaque) | `null`, `"x"`, `[..]` | empty |
//!
//! The inline fallback deliberately treats an unknown shape as fully
//! mandatory. Nested `object`/`array` properties are opaque leaves; no
//! `$ref`, composition or nested traversal is performed.

use super::property::PropertySchema;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

/// Top-level keys of an inline map that never name a property.
const RESERVED_KEYS: [&str; 2] = ["required", "type"];

/// Prefix of schema meta keys (`$schema`, `$id`, ...).
const ESCAPE_PREFIX: char = '$';

/// A recognized input schema shape.
#[derive(Debug, Clone, Copy)]
pub enum SchemaShape<'a> {
    /// Not a keyed structure at all
    Opaque,
    /// Canonical `type: "object"` schema with a `properties` map
    Typed {
        properties: &'a Map<String, Value>,
        required: Option<&'a Value>,
    },
    /// `properties` map without (or with a different) type tag
    Bare {
        properties: &'a Map<String, Value>,
        required: Option<&'a Value>,
    },
    /// Every non-reserved top-level key is a property
    Inline(&'a Map<String, Value>),
}

impl<'a> SchemaShape<'a> {
    /// Classify a raw schema value. First matching rule wins.
    pub fn classify(schema: &'a Value) -> Self {
        let Some(obj) = schema.as_object() else {
            return SchemaShape::Opaque;
        };

        match obj.get("properties").and_then(|p| p.as_object()) {
            Some(properties) if obj.get("type").and_then(|t| t.as_str()) == Some("object") => {
                SchemaShape::Typed {
                    properties,
                    required: obj.get("required"),
                }
            }
            Some(properties) => SchemaShape::Bare {
                properties,
                required: obj.get("required"),
            },
            None => SchemaShape::Inline(obj),
        }
    }

    /// Short label used in diagnostics.
    pub fn as_str(&self) -> &'static str {
        match self {
            SchemaShape::Opaque => "opaque",
            SchemaShape::Typed { .. } => "typed",
            SchemaShape::Bare { .. } => "bare",
            SchemaShape::Inline(_) => "inline",
        }
    }

    /// Convert to the canonical `(properties, required)` pair.
    pub fn normalize(&self) -> NormalizedSchema {
        match self {
            SchemaShape::Opaque => NormalizedSchema::default(),
            SchemaShape::Typed {
                properties,
                required,
            }
            | SchemaShape::Bare {
                properties,
                required,
            } => {
                let properties = collect_properties(properties.iter());
                let required = required.map(required_names).unwrap_or_default();
                NormalizedSchema::new(properties, required)
            }
            SchemaShape::Inline(obj) => {
                let properties = collect_properties(
                    obj.iter()
                        .filter(|(key, _)| !is_meta_key(key)),
                );
                let required = match obj.get("required") {
                    Some(list @ Value::Array(_)) => required_names(list),
                    _ => properties.iter().map(|(name, _)| name.clone()).collect(),
                };
                NormalizedSchema::new(properties, required)
            }
        }
    }
}

/// Normalize any schema-like value.
pub fn normalize(schema: &Value) -> NormalizedSchema {
    SchemaShape::classify(schema).normalize()
}

fn is_meta_key(key: &str) -> bool {
    key.starts_with(ESCAPE_PREFIX) || RESERVED_KEYS.contains(&key)
}

fn collect_properties<'a>(
    entries: impl Iterator<Item = (&'a String, &'a Value)>,
) -> Vec<(String, PropertySchema)> {
    entries
        .map(|(name, fragment)| (name.clone(), PropertySchema::from_value(fragment)))
        .collect()
}

fn required_names(value: &Value) -> BTreeSet<String> {
    value
        .as_array()
        .map(|list| {
            list.iter()
                .filter_map(|v| v.as_str())
                .map(|s| s.to_string())
                .collect()
        })
        .unwrap_or_default()
}

/// Canonical view of a tool's input schema.
///
/// Properties keep the schema's declaration order. The required set is
/// always a subset of the property names: required entries that name no
/// property are dropped on construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedSchema {
    properties: Vec<(String, PropertySchema)>,
    required: BTreeSet<String>,
}

impl NormalizedSchema {
    pub fn new(properties: Vec<(String, PropertySchema)>, required: BTreeSet<String>) -> Self {
        let required = required
            .into_iter()
            .filter(|name| properties.iter().any(|(p, _)| p == name))
            .collect();
        Self {
            properties,
            required,
        }
    }

    pub fn properties(&self) -> impl Iterator<Item = (&str, &PropertySchema)> {
        self.properties.iter().map(|(n, s)| (n.as_str(), s))
    }

    pub fn property(&self, name: &str) -> Option<&PropertySchema> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, s)| s)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|(n, _)| n.as_str())
    }

    pub fn required(&self) -> &BTreeSet<String> {
        &self.required
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.required.contains(name)
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::property::PropertyType;
    use serde_json::json;

    fn assert_required_subset(schema: &NormalizedSchema) {
        for name in schema.required() {
            assert!(
                schema.names().any(|n| n == name),
                "required '{}' is not a property",
                name
            );
        }
    }

    #[test]
    fn test_typed_object_schema() {
        let raw = json!({
            "type": "object",
            "properties": {
                "account_id": {"type": "string"},
                "limit": {"type": "integer"}
            },
            "required": ["account_id"]
        });

        assert!(matches!(SchemaShape::classify(&raw), SchemaShape::Typed { .. }));
        let schema = normalize(&raw);
        assert_eq!(schema.names().collect::<Vec<_>>(), vec!["account_id", "limit"]);
        assert!(schema.is_required("account_id"));
        assert!(!schema.is_required("limit"));
        assert_eq!(
            schema.property("limit").unwrap().property_type,
            PropertyType::Integer
        );
    }

    #[test]
    fn test_typed_object_without_required_defaults_to_empty() {
        let raw = json!({"type": "object", "properties": {"q": {}}});
        let schema = normalize(&raw);
        assert_eq!(schema.len(), 1);
        assert!(schema.required().is_empty());
    }

    #[test]
    fn test_bare_properties_schema() {
        let raw = json!({
            "properties": {"name": {"type": "string"}},
            "required": ["name"]
        });
        assert!(matches!(SchemaShape::classify(&raw), SchemaShape::Bare { .. }));

        let schema = normalize(&raw);
        assert!(schema.is_required("name"));
    }

    #[test]
    fn test_properties_with_other_type_tag_is_bare() {
        let raw = json!({"type": "record", "properties": {"x": {}}, "required": null});
        assert_eq!(SchemaShape::classify(&raw).as_str(), "bare");
        let schema = normalize(&raw);
        assert_eq!(schema.len(), 1);
        assert!(schema.required().is_empty());
    }

    #[test]
    fn test_inline_map_without_required_marks_all_required() {
        let raw = json!({
            "campaign_id": {"type": "string"},
            "status": {"type": "string", "enum": ["ACTIVE", "PAUSED"]},
            "$schema": "http://json-schema.org/draft-07/schema#"
        });
        assert_eq!(SchemaShape::classify(&raw).as_str(), "inline");

        let schema = normalize(&raw);
        assert_eq!(schema.names().collect::<Vec<_>>(), vec!["campaign_id", "status"]);
        assert!(schema.is_required("campaign_id"));
        assert!(schema.is_required("status"));
    }

    #[test]
    fn test_inline_map_with_required_list() {
        let raw = json!({
            "type": "object",
            "a": {"type": "string"},
            "b": {"type": "boolean"},
            "required": ["b"]
        });

        let schema = normalize(&raw);
        assert_eq!(schema.names().collect::<Vec<_>>(), vec!["a", "b"]);
        assert!(!schema.is_required("a"));
        assert!(schema.is_required("b"));
    }

    #[test]
    fn test_inline_map_with_non_list_required_marks_all_required() {
        let raw = json!({"a": {}, "b": {}, "required": "a"});
        let schema = normalize(&raw);
        assert_eq!(schema.required().len(), 2);
    }

    #[test]
    fn test_non_keyed_schema_is_empty() {
        for raw in [json!(null), json!("schema"), json!([1, 2]), json!(42)] {
            let schema = normalize(&raw);
            assert!(schema.is_empty());
            assert!(schema.required().is_empty());
        }
    }

    #[test]
    fn test_required_is_always_subset_of_properties() {
        let shapes = [
            json!({"type": "object", "properties": {"a": {}}, "required": ["a", "ghost"]}),
            json!({"properties": {"a": {}}, "required": ["ghost", 7]}),
            json!({"a": {}, "b": {}, "required": ["b", "missing"]}),
            json!({"a": {}, "$id": "x"}),
        ];

        for raw in &shapes {
            let schema = normalize(raw);
            assert_required_subset(&schema);
        }
    }
}
