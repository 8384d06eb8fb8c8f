//! Request/response examples keyed by status code.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Default example format when no `(paren)` is given.
pub const DEFAULT_EXAMPLE_FORMAT: &str = "application/json";

/// Default example type when no `{curly}` is given.
pub const DEFAULT_EXAMPLE_TYPE: &str = "object";

/// A request or response example body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub format: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub title: String,
    pub example: String,
}

/// Param type -> field -> description.
pub type ValueTable = BTreeMap<String, BTreeMap<String, String>>;

/// Everything documented for a single status code.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusExamples {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_values: Option<ValueTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_values: Option<ValueTable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<Example>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<Example>,
}

impl StatusExamples {
    /// Record a request value description.
    pub fn add_request_value(&mut self, kind: &str, field: &str, description: &str) {
        insert_value(self.request_values.get_or_insert_with(BTreeMap::new), kind, field, description);
    }

    /// Record a response value description.
    pub fn add_response_value(&mut self, kind: &str, field: &str, description: &str) {
        insert_value(self.response_values.get_or_insert_with(BTreeMap::new), kind, field, description);
    }
}

fn insert_value(table: &mut ValueTable, kind: &str, field: &str, description: &str) {
    table
        .entry(kind.to_string())
        .or_default()
        .insert(field.to_string(), description.to_string());
}
