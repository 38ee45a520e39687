//! Default-filling for request bodies.
//!
//! A [`FieldDefaults`] table maps field names to the value used when a
//! request omits the field or sends `null` for it. Present values, including
//! empty strings, are left untouched.

use crate::models::DEFAULT_TODO_TEXT;
use serde_json::{Map, Value};
use service_core::error::AppError;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldDefaults {
    entries: BTreeMap<String, Value>,
}

impl FieldDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.entries.insert(field.into(), value.into());
        self
    }

    /// Defaults for `POST /todos`.
    pub fn todo() -> Self {
        Self::new().with("text", DEFAULT_TODO_TEXT)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.entries.get(field)
    }

    /// Fills absent or `null` fields of a JSON object body.
    pub fn apply(&self, body: Value) -> Result<Map<String, Value>, AppError> {
        let mut fields = match body {
            Value::Object(fields) => fields,
            other => {
                return Err(AppError::BadRequest(anyhow::anyhow!(
                    "Request body must be a JSON object, got {}",
                    json_kind(&other)
                )))
            }
        };

        for (field, default) in &self.entries {
            let slot = fields.entry(field.clone()).or_insert(Value::Null);
            if slot.is_null() {
                *slot = default.clone();
            }
        }

        Ok(fields)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
