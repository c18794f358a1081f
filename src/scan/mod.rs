//! File scanning with denylist and gitignore support

use crate::domain::ScanReport;
use std::path::Path;

pub mod denylist;
pub mod error;
pub mod matcher;
pub mod scanner;

pub use denylist::{is_denied, STATIC_DENYLIST};
pub use error::ScanError;
pub use matcher::{load_ignore_file, GitignoreMatcher, PathMatcher, IGNORE_FILE_NAME};
pub use scanner::{classify, Exclusion, TreeScanner, Visit};

/// Scan `root` with default settings.
pub fn scan_directory<P: AsRef<Path>>(root: P) -> Result<ScanReport, ScanError> {
    TreeScanner::new(root.as_ref()).scan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_scan_directory_uses_defaults() {
        let tmp = TempDir::new().expect("tmp dir");
        fs::write(tmp.path().join(IGNORE_FILE_NAME), "*.log\n").expect("write ignore file");
        fs::write(tmp.path().join("app.log"), "x").expect("write log");
        fs::create_dir(tmp.path().join("dist")).expect("mkdir dist");
        fs::write(tmp.path().join("dist/bundle.js"), "x").expect("write bundle");
        fs::write(tmp.path().join("main.rs"), "fn main() {}").expect("write main");

        let report = scan_directory(tmp.path()).expect("scan");

        assert_eq!(report.paths(), vec![".gitignore", "main.rs"]);
    }
}
