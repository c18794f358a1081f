//! tree-scan: list the files of a project tree as JSON
//!
//! Walks a directory depth-first, drops build outputs, dependency caches and
//! VCS metadata by name, applies the root `.gitignore`, and reports every
//! remaining file with its size and extension.

pub mod cli;
pub mod domain;
pub mod render;
pub mod scan;
pub mod utils;

pub use domain::{FileEntry, ScanReport, ScanStats};
pub use scan::{scan_directory, ScanError, TreeScanner};
