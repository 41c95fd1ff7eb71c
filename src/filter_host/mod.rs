pub mod loader;
pub mod manager;

pub use loader::{FilterApiError, FilterLoader, FilterRegistrarApi, FILTER_ABI_VERSION};
pub use manager::FilterManager;

use serde_json::Value;

use crate::config::ConfigDefaults;

/// Trait that all name filters must implement.
///
/// A filter is bound under a stable string identifier and invoked by the host
/// templating engine with a JSON input plus positional JSON arguments. The
/// "no result" outcome is `Value::Null`, which is a successful return and
/// distinct from every error.
pub trait NameFilter: Send + Sync {
    /// Stable public identifier the host binds this filter under.
    fn name(&self) -> &str;

    /// Apply the filter. `input` is the piped value, `args` are the
    /// positional filter arguments as supplied by the host template.
    fn apply(&self, input: &Value, args: &[Value]) -> Result<Value, FilterError>;

    /// Optional early configuration defaults hook.
    /// Lets a filter pack supply default values (app name / step / other
    /// config fields) before the host applies operator config. Only used when
    /// the operator hasn't specified those fields explicitly. Pure,
    /// side-effect free. Last filter wins for the same field when multiple
    /// defaults are provided.
    fn config_defaults(&self) -> Option<ConfigDefaults> {
        None
    }
}

/// Trait passed to filter libraries so they can register themselves.
pub trait FilterRegistrar {
    fn register_filter(&mut self, filter: Box<dyn NameFilter>);
}

/// Contract violations at the host boundary. Absence of a result is NOT an
/// error; it is a successful `Value::Null`.
#[derive(Debug)]
pub enum FilterError {
    UnknownFilter { name: String },
    InvalidInput { filter: String, expected: &'static str },
    InvalidArg { filter: String, index: usize, expected: &'static str },
}

impl std::fmt::Display for FilterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FilterError::UnknownFilter { name } => {
                write!(f, "no filter registered under '{}'", name)
            }
            FilterError::InvalidInput { filter, expected } => {
                write!(f, "filter '{}' expects {} as input", filter, expected)
            }
            FilterError::InvalidArg {
                filter,
                index,
                expected,
            } => write!(
                f,
                "filter '{}' expects {} for argument {}",
                filter, expected, index
            ),
        }
    }
}

impl std::error::Error for FilterError {}
