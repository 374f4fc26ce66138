//! Error types for the scanning layer.
//!
//! Uses [`thiserror`]. Every variant carries the path that failed so the
//! message printed by the CLI points at the offending file.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error raised while listing or reading PDF files.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The input directory could not be listed.
    #[error("cannot list directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A PDF file could not be opened or read.
    #[error("cannot read {}: {source}", .path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Path of the directory or file that failed.
    pub fn path(&self) -> &std::path::Path {
        match self {
            ScanError::ReadDir { path, .. } | ScanError::ReadFile { path, .. } => path,
        }
    }
}
