//! Error type for the report pipeline.

use std::io;
use std::path::PathBuf;

use pdflinks_parse::ScanError;
use thiserror::Error;

/// Fatal error while generating reports.
///
/// Files written before the failure are left in place.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Listing the directory or reading a PDF failed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Writing one of the output files failed.
    #[error("cannot write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_error_passes_through() {
        let scan = ScanError::ReadFile {
            path: PathBuf::from("a.pdf"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        let err: ReportError = scan.into();
        assert!(matches!(err, ReportError::Scan(_)));
        assert_eq!(err.to_string(), "cannot read a.pdf: missing");
    }

    #[test]
    fn write_error_names_output() {
        let err = ReportError::Write {
            path: PathBuf::from("/ro/out.csv"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only"),
        };
        assert_eq!(err.to_string(), "cannot write /ro/out.csv: read-only");
    }
}
