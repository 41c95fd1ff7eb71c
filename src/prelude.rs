//! NameForge public prelude (curated stable-intent exports).
//! Import with: `use nameforge::prelude::*;`
//!
//! Items here are considered *stable-intent* prior to 1.0.0. Their shape may
//! still adjust minimally until the first tagged release, but we aim to avoid
//! breaking renames or removals. Exclusions are deliberate.

pub use crate::config::{Config, ConfigDefaults};
pub use crate::filter_host::{FilterError, FilterManager, FilterRegistrar, NameFilter};
pub use crate::utils::naming::{increment_names, to_slug};
