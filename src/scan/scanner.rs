//! Tree scanner: depth-first walk with denylist and ignore-file filtering

use crate::domain::{FileEntry, ScanReport, ScanStats};
use crate::scan::denylist::is_denied;
use crate::scan::error::ScanError;
use crate::scan::matcher::{load_ignore_file, PathMatcher};
use crate::utils::{extension_of, relative_display};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// What to do with one directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    /// Surviving directory: walk its children.
    Descend,
    /// Surviving file: add it to the report.
    Emit,
    /// Excluded file. Siblings are unaffected.
    Skip(Exclusion),
    /// Excluded directory. Nothing below it is visited.
    Prune(Exclusion),
}

/// Which filter excluded an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    Denylist,
    IgnoreFile,
}

impl fmt::Display for Exclusion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exclusion::Denylist => f.write_str("denylist"),
            Exclusion::IgnoreFile => f.write_str("ignore file"),
        }
    }
}

/// Decide the fate of one entry.
///
/// The denylist is consulted first, on the base name alone; the matcher only
/// sees entries the denylist let through.
pub fn classify(
    name: &str,
    relative_path: &Path,
    is_dir: bool,
    matcher: Option<&dyn PathMatcher>,
) -> Visit {
    let excluded = if is_denied(name) {
        Some(Exclusion::Denylist)
    } else if matcher.is_some_and(|m| m.matches(relative_path, is_dir)) {
        Some(Exclusion::IgnoreFile)
    } else {
        None
    };

    match (excluded, is_dir) {
        (Some(reason), true) => Visit::Prune(reason),
        (Some(reason), false) => Visit::Skip(reason),
        (None, true) => Visit::Descend,
        (None, false) => Visit::Emit,
    }
}

/// Scans a directory tree into a [`ScanReport`].
pub struct TreeScanner {
    root_path: PathBuf,
    respect_ignore_file: bool,
    matcher: Option<Box<dyn PathMatcher>>,
    stats: ScanStats,
}

impl TreeScanner {
    /// Create a scanner that honors the root `.gitignore`.
    pub fn new(root_path: impl Into<PathBuf>) -> Self {
        Self {
            root_path: root_path.into(),
            respect_ignore_file: true,
            matcher: None,
            stats: ScanStats::default(),
        }
    }

    /// Set whether to load the `.gitignore` at the scan root
    pub fn respect_ignore_file(mut self, respect: bool) -> Self {
        self.respect_ignore_file = respect;
        self
    }

    /// Use `matcher` instead of the root ignore file.
    pub fn with_matcher(mut self, matcher: Box<dyn PathMatcher>) -> Self {
        self.matcher = Some(matcher);
        self
    }

    /// Walk the tree and build the report.
    ///
    /// Entries are listed pre-order with siblings sorted by name. Any listing
    /// or metadata failure aborts the scan.
    pub fn scan(&mut self) -> Result<ScanReport, ScanError> {
        let root = std::path::absolute(&self.root_path).map_err(|source| {
            ScanError::RootResolution { path: self.root_path.clone(), source }
        })?;

        let root_meta = fs::metadata(&root).map_err(|e| ScanError::metadata(&root, e))?;
        if !root_meta.is_dir() {
            return Err(ScanError::NotADirectory(root));
        }

        // `/` and `..` have no base name and are always walked.
        let root_name = root.file_name().map(|n| n.to_string_lossy().into_owned());
        if root_name.as_deref().is_some_and(is_denied) {
            tracing::debug!("Scan root {} is denylisted, nothing to list", root.display());
            self.stats = ScanStats { dirs_pruned_denylist: 1, ..ScanStats::default() };
            let root = root.to_string_lossy().into_owned();
            return Ok(ScanReport { root, files: Vec::new() });
        }

        let loaded;
        let matcher: Option<&dyn PathMatcher> = match &self.matcher {
            Some(custom) => Some(&**custom),
            None if self.respect_ignore_file => {
                loaded = load_ignore_file(&root);
                loaded.as_ref().map(|m| m as &dyn PathMatcher)
            }
            None => None,
        };

        let mut walk = Walk { matcher, stats: ScanStats::default(), files: Vec::new() };
        walk.visit_dir(&root, Path::new(""))?;
        let Walk { stats, files, .. } = walk;

        tracing::debug!(
            "Scanned {}: {} files ({} bytes) in {} dirs, {} dirs pruned, {} files skipped",
            root.display(),
            stats.files_emitted,
            stats.bytes_emitted,
            stats.dirs_visited,
            stats.dirs_pruned(),
            stats.files_skipped()
        );
        self.stats = stats;

        Ok(ScanReport { root: root.to_string_lossy().into_owned(), files })
    }

    /// Get statistics from the last scan
    pub fn stats(&self) -> &ScanStats {
        &self.stats
    }
}

struct Walk<'a> {
    matcher: Option<&'a dyn PathMatcher>,
    stats: ScanStats,
    files: Vec<FileEntry>,
}

impl Walk<'_> {
    fn visit_dir(&mut self, dir: &Path, rel_dir: &Path) -> Result<(), ScanError> {
        self.stats.dirs_visited += 1;

        // Collect up front so the directory handle is closed before recursing.
        let mut entries = fs::read_dir(dir)
            .map_err(|e| ScanError::read_dir(dir, e))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ScanError::read_dir(dir, e))?;
        entries.sort_by_key(|entry| entry.file_name());

        for entry in entries {
            let path = entry.path();
            // Symlinks are classified by their own metadata and never followed.
            let metadata =
                fs::symlink_metadata(&path).map_err(|e| ScanError::metadata(&path, e))?;
            let is_dir = metadata.is_dir();

            let file_name = entry.file_name();
            let name = file_name.to_string_lossy();
            let rel_path = rel_dir.join(&file_name);

            match classify(&name, &rel_path, is_dir, self.matcher) {
                Visit::Descend => self.visit_dir(&path, &rel_path)?,
                Visit::Emit => {
                    let size = metadata.len();
                    self.stats.files_emitted += 1;
                    self.stats.bytes_emitted += size;
                    self.files.push(FileEntry {
                        path: relative_display(&rel_path),
                        size,
                        extension: extension_of(&name),
                    });
                }
                Visit::Prune(reason) => {
                    tracing::trace!("Pruning {} ({})", rel_path.display(), reason);
                    match reason {
                        Exclusion::Denylist => self.stats.dirs_pruned_denylist += 1,
                        Exclusion::IgnoreFile => self.stats.dirs_pruned_ignore += 1,
                    }
                }
                Visit::Skip(reason) => {
                    tracing::trace!("Skipping {} ({})", rel_path.display(), reason);
                    match reason {
                        Exclusion::Denylist => self.stats.files_skipped_denylist += 1,
                        Exclusion::IgnoreFile => self.stats.files_skipped_ignore += 1,
                    }
                }
            }
        }

        Ok(())
    }
}
