//! tree-scan: list the files of a project tree as JSON
//!
//! Prints one JSON object to stdout on success. Errors go to stderr with a
//! non-zero exit status and nothing on stdout.

use anyhow::Result;

fn main() -> Result<()> {
    tree_scan::cli::run()
}
