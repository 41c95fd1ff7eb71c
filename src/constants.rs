//! Central place for application-wide constants and default values.

/// Default application name (can be overridden in config)
pub const DEFAULT_APP_NAME: &str = "NameForge";

/// Left padding used to align log lines with those that include emoji prefixes.
/// Keep this to a fixed width matching the emoji prefix you use elsewhere.
pub const ICON_PLACEHOLDER: &str = "   "; // Three spaces for alignment

/// Public identifier the sequence-increment filter is registered under.
pub const FILTER_INCREMENT_NAMES: &str = "increment_names";
/// Public identifier the slug filter is registered under.
pub const FILTER_SANITIZE_NAME: &str = "sanitize_name";

/// Width of the numeric suffix field inspected at the end of a name.
pub const SUFFIX_WIDTH: usize = 3;
/// Wrap point for incremented suffixes. Deliberately 100 rather than 1000:
/// the field is 3 digits wide but downstream sequences wrap at 100.
pub const SUFFIX_MODULUS: i64 = 100;

/// Application / crate version (populated from Cargo.toml via env! macro)
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Optional short git commit hash (set via build script or cargo:rustc-env). Falls back to "unknown".
pub fn git_commit() -> &'static str {
    option_env!("GIT_COMMIT").unwrap_or("unknown")
}

/// Optional build timestamp in RFC3339 (set via build script). Falls back to "unknown".
pub fn build_timestamp() -> &'static str {
    option_env!("BUILD_TIMESTAMP").unwrap_or("unknown")
}

/// Human friendly composite version string used in logs.
pub fn full_version() -> String {
    format!("v{} (commit={})", APP_VERSION, git_commit())
}
