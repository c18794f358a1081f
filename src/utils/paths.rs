//! Path normalization

use std::path::Path;

pub fn normalize_path(path: &str) -> String {
    // Convert backslashes to forward slashes and normalize
    path.replace('\\', "/")
}

/// Render a relative path with `/` separators regardless of platform.
pub fn relative_display(path: &Path) -> String {
    let joined = path
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");
    // Backslash is a legal file name character outside Windows.
    if cfg!(windows) {
        normalize_path(&joined)
    } else {
        joined
    }
}

/// Extension of the final path segment, starting at its last `.`.
///
/// `archive.tar.gz` gives `.gz`, `README` gives an empty string and `.bashrc`
/// is its own extension.
pub fn extension_of(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(idx) => file_name[idx..].to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_extension_uses_last_dot() {
        assert_eq!(extension_of("archive.tar.gz"), ".gz");
        assert_eq!(extension_of("main.rs"), ".rs");
    }

    #[test]
    fn test_extension_empty_without_dot() {
        assert_eq!(extension_of("README"), "");
        assert_eq!(extension_of("Makefile"), "");
    }

    #[test]
    fn test_extension_of_dotfile_and_trailing_dot() {
        assert_eq!(extension_of(".bashrc"), ".bashrc");
        assert_eq!(extension_of("notes."), ".");
    }

    #[test]
    fn test_relative_display_joins_with_forward_slash() {
        let path: PathBuf = ["sub", "deeper", "b.txt"].iter().collect();
        assert_eq!(relative_display(&path), "sub/deeper/b.txt");
        assert_eq!(relative_display(Path::new("a.txt")), "a.txt");
    }
}
