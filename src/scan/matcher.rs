//! Ignore-pattern matching.
//!
//! The scanner only needs a yes/no answer per relative path, so matching is
//! abstracted behind [`PathMatcher`]. The default implementation compiles the
//! `.gitignore` at the scan root with the `ignore` crate.

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use std::path::Path;

/// Name of the single ignore file honored at the scan root.
pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// Decides whether a path below the scan root is excluded.
pub trait PathMatcher {
    /// `relative_path` is relative to the scan root. `is_dir` lets
    /// directory-only patterns (`logs/`) apply to directories alone.
    fn matches(&self, relative_path: &Path, is_dir: bool) -> bool;
}

impl<F> PathMatcher for F
where
    F: Fn(&Path, bool) -> bool,
{
    fn matches(&self, relative_path: &Path, is_dir: bool) -> bool {
        self(relative_path, is_dir)
    }
}

/// Gitignore rules compiled from one file.
#[derive(Debug, Clone)]
pub struct GitignoreMatcher {
    gitignore: Gitignore,
}

impl GitignoreMatcher {
    /// Compile `file` with patterns anchored at `root`.
    ///
    /// Fails if the file can't be read or any line is not a valid pattern.
    pub fn from_file(root: &Path, file: &Path) -> Result<Self, ignore::Error> {
        let mut builder = GitignoreBuilder::new(root);
        if let Some(err) = builder.add(file) {
            return Err(err);
        }
        let gitignore = builder.build()?;
        Ok(Self { gitignore })
    }

    /// Number of compiled patterns, negations included.
    pub fn len(&self) -> usize {
        self.gitignore.num_ignores() as usize + self.gitignore.num_whitelists() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl PathMatcher for GitignoreMatcher {
    fn matches(&self, relative_path: &Path, is_dir: bool) -> bool {
        self.gitignore.matched(relative_path, is_dir).is_ignore()
    }
}

/// Load the root ignore file, if there is a usable one.
///
/// A missing, unreadable or unparsable file yields `None`: the scan then runs
/// without ignore filtering.
pub fn load_ignore_file(root: &Path) -> Option<GitignoreMatcher> {
    let path = root.join(IGNORE_FILE_NAME);
    if !path.is_file() {
        tracing::debug!("No ignore file at {}", path.display());
        return None;
    }

    match GitignoreMatcher::from_file(root, &path) {
        Ok(matcher) => {
            tracing::debug!("Loaded {} patterns from {}", matcher.len(), path.display());
            Some(matcher)
        }
        Err(e) => {
            tracing::debug!("Ignoring unusable ignore file {}: {}", path.display(), e);
            None
        }
    }
}
