use serde_json::Value;

use crate::constants::FILTER_INCREMENT_NAMES;
use crate::filter_host::{FilterError, NameFilter};
use crate::utils::naming::increment_names;

/// `increment_names` — the sequence filter this host exists for.
///
/// Input: a JSON array of name strings. Optional first argument: the signed
/// integer step (default 1). Returns the next name in the numbered sequence
/// as a JSON string, or `Null` when no entry ends in 3 digits.
pub struct IncrementNamesFilter;

impl NameFilter for IncrementNamesFilter {
    fn name(&self) -> &str {
        FILTER_INCREMENT_NAMES
    }

    fn apply(&self, input: &Value, args: &[Value]) -> Result<Value, FilterError> {
        let list = input.as_array().ok_or_else(|| FilterError::InvalidInput {
            filter: self.name().to_string(),
            expected: "a list of strings",
        })?;

        let mut names: Vec<&str> = Vec::with_capacity(list.len());
        for entry in list {
            names.push(entry.as_str().ok_or_else(|| FilterError::InvalidInput {
                filter: self.name().to_string(),
                expected: "a list of strings",
            })?);
        }

        let step = match args.first() {
            None => 1,
            Some(v) => v.as_i64().ok_or_else(|| FilterError::InvalidArg {
                filter: self.name().to_string(),
                index: 0,
                expected: "an integer step",
            })?,
        };

        Ok(match increment_names(&names, step) {
            Some(name) => Value::String(name),
            None => Value::Null,
        })
    }
}
