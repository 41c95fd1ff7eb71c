//! Built-in filters shipped with the host.

pub mod increment;
pub mod sanitize;

pub use increment::IncrementNamesFilter;
pub use sanitize::SanitizeNameFilter;
