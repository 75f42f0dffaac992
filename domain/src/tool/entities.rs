//! Tool domain entities

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::schema::{NormalizedSchema, normalize};

/// Arguments collected for one call, keyed by property name.
///
/// Keys keep insertion (schema) order. An optional property the human
/// skipped is absent, never present as `null`.
pub type ArgumentRecord = Map<String, Value>;

/// A tool advertised by the remote host.
///
/// Immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    /// Unique name of the tool (e.g., "verify_account_setup")
    pub name: String,
    /// Human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Raw input schema, in whatever shape the host sent
    #[serde(default)]
    pub input_schema: Value,
}

impl ToolDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            input_schema: Value::Null,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_input_schema(mut self, schema: Value) -> Self {
        self.input_schema = schema;
        self
    }

    /// Whether the host sent a non-empty keyed (object) schema.
    pub fn has_input_schema(&self) -> bool {
        self.input_schema.as_object().is_some_and(|map| !map.is_empty())
    }

    /// Normalize the input schema. Recomputed on every call.
    pub fn normalized_schema(&self) -> NormalizedSchema {
        normalize(&self.input_schema)
    }
}

/// A call to a tool with arguments
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Name of the tool to call
    pub tool_name: String,
    /// Arguments passed to the tool
    pub arguments: ArgumentRecord,
}

impl ToolCall {
    pub fn new(tool_name: impl Into<String>) -> Self {
        Self {
            tool_name: tool_name.into(),
            arguments: ArgumentRecord::new(),
        }
    }

    pub fn with_arguments(mut self, arguments: ArgumentRecord) -> Self {
        self.arguments = arguments;
        self
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.arguments.insert(key.into(), value.into());
        self
    }

    /// Get a string argument
    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.arguments.get(key).and_then(|v| v.as_str())
    }

    /// Arguments rendered as indented JSON
    pub fn arguments_pretty(&self) -> String {
        serde_json::to_string_pretty(&self.arguments).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_descriptor_deserializes_host_shape() {
        let tool: ToolDescriptor = serde_json::from_value(json!({
            "name": "preview_ad",
            "description": "Render an ad preview",
            "inputSchema": {"type": "object", "properties": {"ad_id": {}}}
        }))
        .unwrap();

        assert_eq!(tool.name, "preview_ad");
        assert!(tool.has_input_schema());
        assert_eq!(tool.normalized_schema().len(), 1);
    }

    #[test]
    fn test_descriptor_without_schema() {
        let tool: ToolDescriptor = serde_json::from_value(json!({"name": "ping"})).unwrap();
        assert!(tool.description.is_none());
        assert!(!tool.has_input_schema());
        assert!(tool.normalized_schema().is_empty());

        let empty = ToolDescriptor::new("ping").with_input_schema(json!({}));
        assert!(!empty.has_input_schema());
        let listed = ToolDescriptor::new("ping").with_input_schema(json!(["a"]));
        assert!(!listed.has_input_schema());
    }

    #[test]
    fn test_tool_call_arguments_keep_order() {
        let call = ToolCall::new("create_campaign")
            .with_arg("name", "Spring")
            .with_arg("daily_budget", 50)
            .with_arg("active", false);

        assert_eq!(call.get_string("name"), Some("Spring"));
        let keys: Vec<_> = call.arguments.keys().cloned().collect();
        assert_eq!(keys, vec!["name", "daily_budget", "active"]);
        assert!(call.arguments_pretty().contains("\"daily_budget\": 50"));
    }
}
