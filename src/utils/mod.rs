//! Small shared helpers.

pub mod paths;

pub use paths::{extension_of, normalize_path, relative_display};
