use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use super::{FilterError, FilterRegistrar, NameFilter};
use crate::config::ConfigDefaults;
use crate::filters::{IncrementNamesFilter, SanitizeNameFilter};

/// Explicit registration table: public filter identifier -> callable.
/// This is the host-facing lookup surface a templating engine binds against.
pub struct FilterManager {
    filters: HashMap<String, Arc<dyn NameFilter>>,
}

impl Default for FilterManager {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterManager {
    pub fn new() -> Self {
        Self {
            filters: HashMap::new(),
        }
    }

    /// Manager pre-populated with the built-in filters.
    pub fn with_builtins() -> Self {
        let mut manager = Self::new();
        manager.register_filter(Box::new(IncrementNamesFilter));
        manager.register_filter(Box::new(SanitizeNameFilter));
        manager
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn NameFilter>> {
        self.filters.get(name).cloned()
    }

    /// Registered identifiers, sorted for stable listings.
    pub fn filter_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.filters.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    /// Look up `name` and dispatch the call.
    pub fn apply(&self, name: &str, input: &Value, args: &[Value]) -> Result<Value, FilterError> {
        let filter = self.get(name).ok_or_else(|| FilterError::UnknownFilter {
            name: name.to_string(),
        })?;
        filter.apply(input, args)
    }

    /// Collect configuration defaults from all filters. Last filter wins on conflicts.
    pub fn collect_config_defaults(&self) -> ConfigDefaults {
        let mut merged = ConfigDefaults::default();
        // Iterate in identifier order so "last wins" is deterministic.
        for name in self.filter_names() {
            if let Some(over) = self.filters[&name].config_defaults() {
                if let Some(v) = over.app_name {
                    merged.app_name = Some(v);
                }
                if let Some(v) = over.default_step {
                    merged.default_step = Some(v);
                }
                if let Some(v) = over.filter_dir {
                    merged.filter_dir = Some(v);
                }
                if let Some(v) = over.logging {
                    merged.logging = Some(v);
                }
            }
        }
        merged
    }
}

impl FilterRegistrar for FilterManager {
    fn register_filter(&mut self, filter: Box<dyn NameFilter>) {
        let name = filter.name().to_string();
        println!("🔧 Registering filter: {}", name);
        let arc: Arc<dyn NameFilter> = Arc::from(filter);

        // Last registration under a name wins; dynamic filters may shadow builtins.
        self.filters.insert(name, arc);
    }
}
