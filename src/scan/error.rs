//! Scan error types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal scan failures. Any of these aborts the scan without a report.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("cannot resolve absolute path of {}", .path.display())]
    RootResolution {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("scan root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("cannot list directory {}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot read metadata of {}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    pub(crate) fn read_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadDir { path: path.into(), source }
    }

    pub(crate) fn metadata(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Metadata { path: path.into(), source }
    }
}
