//! Names that are always excluded from a scan, wherever they appear.

/// Build outputs, dependency caches, editor state and VCS metadata.
///
/// Matched exactly against an entry's base name, never against its path.
pub const STATIC_DENYLIST: &[&str] = &[
    ".git",
    "node_modules",
    "Pods",
    "build",
    "DerivedData",
    ".idea",
    ".vscode",
    "__pycache__",
    ".DS_Store",
    "venv",
    ".env",
    ".pytest_cache",
    "dist",
    ".next",
    ".nuxt",
    "target",
];

pub fn is_denied(name: &str) -> bool {
    STATIC_DENYLIST.contains(&name)
}
