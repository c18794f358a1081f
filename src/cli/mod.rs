//! Command-line interface for tree-scan
//!
//! Scans one directory and prints the surviving files as JSON on stdout.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::render::render_report;
use crate::scan::TreeScanner;

/// List project files as JSON, without build artifacts or ignored paths
#[derive(Parser)]
#[command(name = "tree-scan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory to scan
    #[arg(value_name = "PATH", default_value = ".")]
    path: PathBuf,

    /// Indent the JSON output
    #[arg(short, long)]
    pretty: bool,

    /// Do not apply the .gitignore at the scan root
    #[arg(long)]
    no_ignore_file: bool,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG, when set, replaces the default level entirely.
    let default_level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::default().add_directive(default_level.into()));
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let mut scanner = TreeScanner::new(&cli.path).respect_ignore_file(!cli.no_ignore_file);
    let report = scanner
        .scan()
        .with_context(|| format!("Failed to scan {}", cli.path.display()))?;

    let rendered = render_report(&report, cli.pretty).context("Failed to encode scan report")?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(rendered.as_bytes()).context("Failed to write scan report")?;
    stdout.flush().context("Failed to write scan report")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_path_defaults_to_current_dir() {
        let cli = Cli::try_parse_from(["tree-scan"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("."));
        assert!(!cli.pretty);
        assert!(!cli.no_ignore_file);
    }

    #[test]
    fn test_flags_parse() {
        let cli =
            Cli::try_parse_from(["tree-scan", "--pretty", "--no-ignore-file", "-v", "src"]).unwrap();
        assert_eq!(cli.path, PathBuf::from("src"));
        assert!(cli.pretty);
        assert!(cli.no_ignore_file);
        assert!(cli.verbose);
    }

    #[test]
    fn test_rejects_extra_positional() {
        assert!(Cli::try_parse_from(["tree-scan", "a", "b"]).is_err());
    }
}
