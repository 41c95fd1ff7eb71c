use serde_json::Value;

use crate::constants::FILTER_SANITIZE_NAME;
use crate::filter_host::{FilterError, NameFilter};
use crate::utils::naming::to_slug;

/// `sanitize_name` — normalize arbitrary labels to machine-safe slugs before
/// they enter a numbered sequence. Takes no arguments.
///
/// Accepts either a single string or a list of strings; a list is slugged
/// element-wise, preserving order.
pub struct SanitizeNameFilter;

impl SanitizeNameFilter {
    fn invalid(&self) -> FilterError {
        FilterError::InvalidInput {
            filter: self.name().to_string(),
            expected: "a string or a list of strings",
        }
    }
}

impl NameFilter for SanitizeNameFilter {
    fn name(&self) -> &str {
        FILTER_SANITIZE_NAME
    }

    fn apply(&self, input: &Value, _args: &[Value]) -> Result<Value, FilterError> {
        match input {
            Value::String(label) => Ok(Value::String(to_slug(label))),
            Value::Array(labels) => {
                let mut out = Vec::with_capacity(labels.len());
                for entry in labels {
                    let label = entry.as_str().ok_or_else(|| self.invalid())?;
                    out.push(Value::String(to_slug(label)));
                }
                Ok(Value::Array(out))
            }
            _ => Err(self.invalid()),
        }
    }
}
