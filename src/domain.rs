//! Core data types shared by the scanner, renderer and CLI.

use serde::Serialize;

/// A single file that survived filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    /// Path relative to the scan root, always `/`-separated.
    pub path: String,
    /// Size in bytes.
    pub size: u64,
    /// Extension including the leading dot, or empty.
    #[serde(rename = "ext")]
    pub extension: String,
}

/// Result of one scan: the resolved root and every emitted file in traversal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub root: String,
    pub files: Vec<FileEntry>,
}

impl ScanReport {
    pub fn paths(&self) -> Vec<&str> {
        self.files.iter().map(|f| f.path.as_str()).collect()
    }
}

/// Counters collected while walking the tree. Not part of the JSON report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub dirs_visited: usize,
    pub files_emitted: usize,
    pub bytes_emitted: u64,
    pub dirs_pruned_denylist: usize,
    pub dirs_pruned_ignore: usize,
    pub files_skipped_denylist: usize,
    pub files_skipped_ignore: usize,
}

impl ScanStats {
    pub fn dirs_pruned(&self) -> usize {
        self.dirs_pruned_denylist + self.dirs_pruned_ignore
    }

    pub fn files_skipped(&self) -> usize {
        self.files_skipped_denylist + self.files_skipped_ignore
    }
}
