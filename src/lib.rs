//! # NameForge Core Library
//!
//! Filter host for sequence naming in declarative provisioning templates,
//! supporting two operation modes:
//!
//! * **HEF (Host-Embedded Filters):** Host binary loads dynamic filter packs at runtime.
//! * **CAL (Core-as-a-Library):** Embed the filter table in another application.
//!
//! ## Design Principles
//! * Pure filter core: every built-in filter is a referentially transparent
//!   function over its inputs; the host adds config, events and discovery around it.
//! * Pluggable extension surface via `filter_host` (versioned C ABI).
//! * Absence is not an error: "no candidate" flows as a defined result, never a failure.
//! * Event-driven instrumentation (JSON line audit log + console).
//!
//! ## Key Modules
//! * `config` – Runtime configuration & filter-provided defaults.
//! * `filters` – Built-in filters (`increment_names`, `sanitize_name`).
//! * `filter_host` – Filter trait, registration table, dynamic loading.
//! * `events` – Structured logging/events dispatcher.
//! * `utils` – Pure naming helpers the filters wrap.
//!
//! ## Status
//! Pre-initial public release. APIs may change without notice until version 0.1.0 is tagged.

pub mod config;
pub mod constants;
pub mod events;
pub mod filter_host;
pub mod filters;
pub mod prelude; // curated stable-intent re-exports
pub mod utils; // common helpers (naming, etc.)

use std::path::Path;

use crate::filter_host::{FilterLoader, FilterManager};

/// NameForge Core Struct
///
/// Owns the config plus the loader so dynamically loaded filter libraries
/// stay alive as long as their filters are reachable.
pub struct NameForge {
    pub config: config::Config,
    loader: FilterLoader,
}

impl NameForge {
    /// Initializes the filter host
    pub fn new(config: config::Config) -> Self {
        Self {
            config,
            loader: FilterLoader::new(),
        }
    }

    /// Initialize the event pipeline from this host's logging config.
    pub async fn init_events(&self) {
        events::init_events_from_config(self.config.logging.as_ref()).await;
    }

    /// Build the registration table: built-ins first, then any dynamic
    /// libraries from `filter_dir` (which may shadow built-ins by name).
    pub fn build_filters(&mut self) -> anyhow::Result<FilterManager> {
        let mut manager = FilterManager::with_builtins();
        if let Some(dir) = self.config.filter_dir.clone() {
            if Path::new(&dir).is_dir() {
                self.loader.load_filters(&dir, &mut manager)?;
            }
        }
        Ok(manager)
    }

    /// Number of dynamic filter libraries held open.
    pub fn loaded_libraries(&self) -> usize {
        self.loader.loaded_count()
    }
}
