pub mod naming;

pub use naming::{increment_names, to_slug};
