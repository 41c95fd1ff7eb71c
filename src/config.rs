use serde::Deserialize;

use crate::constants::DEFAULT_APP_NAME;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Display name used in logs and events
    pub app_name: Option<String>,
    /// Step applied when the caller does not pass one (default 1)
    pub default_step: Option<i64>,
    /// Directory scanned for dynamic filter libraries at startup
    pub filter_dir: Option<String>,
    /// Logging / events configuration
    pub logging: Option<LoggingConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: Some(DEFAULT_APP_NAME.to_string()),
            default_step: Some(1),
            filter_dir: None,
            logging: None,
        }
    }
}

impl Config {
    /// Effective step when neither CLI nor config sets one.
    pub fn resolve_step(&self, explicit: Option<i64>) -> i64 {
        explicit.or(self.default_step).unwrap_or(1)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Path to JSON line audit log (rotated). If unset, defaults to logs/filter_audit.jsonl
    pub json_path: Option<String>,
    /// Max size in bytes before rotation (default 5MB)
    pub json_max_bytes: Option<usize>,
    /// Number of rotated files to retain (default 3)
    pub json_rotate: Option<u32>,
    /// Disable console sink (default false)
    pub disable_console: Option<bool>,
}

/// Minimal set of default values that a filter pack can supply for core
/// runtime parameters (only applied when the user has not explicitly set them).
#[derive(Debug, Clone, Default)]
pub struct ConfigDefaults {
    pub app_name: Option<String>,
    pub default_step: Option<i64>,
    pub filter_dir: Option<String>,
    pub logging: Option<LoggingConfig>,
}

impl ConfigDefaults {
    /// Fill only fields the operator left unset. A filter-supplied
    /// `filter_dir` has no effect on libraries already loaded this run.
    pub fn apply(self, cfg: &mut Config) {
        if cfg.app_name.is_none() {
            cfg.app_name = self.app_name;
        }
        if cfg.default_step.is_none() {
            cfg.default_step = self.default_step;
        }
        if cfg.filter_dir.is_none() {
            cfg.filter_dir = self.filter_dir;
        }
        if cfg.logging.is_none() {
            cfg.logging = self.logging;
        }
    }
}
