//! Collect Arguments use case
//!
//! Walks a tool's normalized input schema and prompts the human for each
//! property in schema order. Each field loops until
//! [`evaluate_input`](conductor_domain::evaluate_input) reaches a terminal
//! outcome; there is no attempt cap at this level.

use crate::ports::console::{ConsoleError, ConsolePort};
use conductor_domain::{
    ArgumentRecord, FieldOutcome, PropertySchema, ToolDescriptor, evaluate_input,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Rule line framing the tool header.
pub const HEADER_RULE: &str = "============================";

pub const NO_SCHEMA_NOTICE: &str = "  (No input schema; calling with empty args)";
pub const EMPTY_SCHEMA_NOTICE: &str = "  (Empty input schema; calling with empty args)";

/// Prompt for one field value.
pub fn field_prompt(required: bool) -> String {
    format!(
        "  Enter value (leave blank to skip{}): ",
        if required { " — cannot skip" } else { "" }
    )
}

/// Interactive argument collector
pub struct ArgumentCollector<C: ConsolePort + 'static> {
    console: Arc<C>,
}

impl<C: ConsolePort + 'static> ArgumentCollector<C> {
    pub fn new(console: Arc<C>) -> Self {
        Self { console }
    }

    /// Collect a full argument record for `tool`.
    ///
    /// Returns an empty record without prompting when the tool has no
    /// usable schema. Optional fields left blank are absent from the record.
    pub async fn collect(&self, tool: &ToolDescriptor) -> Result<ArgumentRecord, ConsoleError> {
        if !tool.has_input_schema() {
            self.console.print_line(NO_SCHEMA_NOTICE);
            return Ok(ArgumentRecord::new());
        }

        let schema = tool.normalized_schema();
        if schema.is_empty() {
            self.console.print_line(EMPTY_SCHEMA_NOTICE);
            return Ok(ArgumentRecord::new());
        }

        self.print_tool_header(tool);

        let mut args = ArgumentRecord::new();
        for (name, property) in schema.properties() {
            let required = schema.is_required(name);
            if let Some(value) = self.prompt_field(name, property, required).await? {
                args.insert(name.to_string(), value);
            }
        }

        debug!(
            "Collected {} of {} arguments for {}",
            args.len(),
            schema.len(),
            tool.name
        );
        Ok(args)
    }

    /// Prompt until the field reaches a terminal outcome.
    ///
    /// `Ok(None)` means an optional field was skipped.
    pub async fn prompt_field(
        &self,
        name: &str,
        property: &PropertySchema,
        required: bool,
    ) -> Result<Option<Value>, ConsoleError> {
        let prompt = field_prompt(required);
        loop {
            self.print_field_intro(name, property, required);
            let raw = self.console.read_line(&prompt).await?;

            match evaluate_input(property, required, &raw) {
                FieldOutcome::Accepted(value) => return Ok(Some(value)),
                FieldOutcome::Omitted => return Ok(None),
                FieldOutcome::Rejected(rejection) => {
                    debug!("Rejected input for {}: {:?}", name, rejection);
                    self.console.print_line(&format!("  {}", rejection.message()));
                }
            }
        }
    }

    fn print_tool_header(&self, tool: &ToolDescriptor) {
        self.console.print_line("");
        self.console.print_line(HEADER_RULE);
        self.console.print_line(&format!("Tool: {}", tool.name));
        if let Some(description) = tool.description.as_deref().filter(|d| !d.is_empty()) {
            self.console
                .print_line(&format!("Description: {}", description));
        }
        self.console.print_line(HEADER_RULE);
        self.console.print_line("");
    }

    fn print_field_intro(&self, name: &str, property: &PropertySchema, required: bool) {
        self.console.print_line("");
        self.console.print_line(&format!(
            "> Field: {} ({})",
            name,
            if required { "required" } else { "optional" }
        ));
        self.console
            .print_line(&format!("  - type: {}", property.property_type));
        if let Some(allowed) = property.display_enum() {
            self.console
                .print_line(&format!("  - allowed values: {}", allowed));
        }
        if let Some(description) = property.display_description() {
            self.console
                .print_line(&format!("  - description: {}", description));
        }
    }
}
