//! Demo filter pack loaded by the NameForge host in HEF mode.
//! Build as a cdylib and point `filter_dir` at the output directory.

use serde_json::Value;

use nameforge::filter_host::{FilterError, FilterRegistrarApi, NameFilter};

/// `upcase_name` — uppercase a label or a list of labels.
pub struct UpcaseFilter;

impl UpcaseFilter {
    fn invalid(&self) -> FilterError {
        FilterError::InvalidInput {
            filter: self.name().to_string(),
            expected: "a string or a list of strings",
        }
    }
}

impl NameFilter for UpcaseFilter {
    fn name(&self) -> &str {
        "upcase_name"
    }

    fn apply(&self, input: &Value, _args: &[Value]) -> Result<Value, FilterError> {
        match input {
            Value::String(s) => Ok(Value::String(s.to_uppercase())),
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    let s = item.as_str().ok_or_else(|| self.invalid())?;
                    out.push(Value::String(s.to_uppercase()));
                }
                Ok(Value::Array(out))
            }
            _ => Err(self.invalid()),
        }
    }
}

#[no_mangle]
pub unsafe extern "C" fn register_filters(api: *const FilterRegistrarApi) {
    let api = match FilterRegistrarApi::from_raw(api) {
        Ok(api) => api,
        Err(err) => {
            eprintln!("[upcase_filter] invalid registrar API: {err}");
            return;
        }
    };
    if let Err(err) = api.register_filter(Box::new(UpcaseFilter)) {
        eprintln!("[upcase_filter] failed to register: {err}");
    }
}
