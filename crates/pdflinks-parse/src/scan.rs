//! Directory listing and per-file link extraction.

use std::fs;
use std::path::{Path, PathBuf};

use pdflinks_core::LinkRecord;
use tracing::debug;

use crate::error::ScanError;
use crate::extract::LinkExtractor;

/// File name suffix that marks a PDF. Matched case-sensitively.
pub const PDF_EXTENSION: &str = ".pdf";

/// A PDF file found directly inside the scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfEntry {
    /// File name as shown in reports (lossy for non-UTF-8 names).
    pub name: String,
    /// Full path used to read the file.
    pub path: PathBuf,
}

/// List the PDF files directly inside `dir`, sorted by name.
///
/// Only regular files (or symlinks to them) whose name ends with
/// [`PDF_EXTENSION`] are returned; subdirectories are never entered.
pub fn list_pdfs(dir: &Path) -> Result<Vec<PdfEntry>, ScanError> {
    let read_dir_err = |source| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = Vec::new();
    for entry in fs::read_dir(dir).map_err(read_dir_err)? {
        let entry = entry.map_err(read_dir_err)?;
        let name = entry.file_name().to_string_lossy().into_owned();
        if !name.ends_with(PDF_EXTENSION) {
            continue;
        }

        let path = entry.path();
        if !path.is_file() {
            debug!(path = %path.display(), "skipping non-file entry");
            continue;
        }

        entries.push(PdfEntry { name, path });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.path.cmp(&b.path)));
    Ok(entries)
}

/// Read one PDF and return a record per unique link target, in extraction order.
pub fn extract_file(
    entry: &PdfEntry,
    extractor: &dyn LinkExtractor,
) -> Result<Vec<LinkRecord>, ScanError> {
    let bytes = fs::read(&entry.path).map_err(|source| ScanError::ReadFile {
        path: entry.path.clone(),
        source,
    })?;

    let records: Vec<LinkRecord> = extractor
        .extract(&bytes)
        .into_iter()
        .map(|url| LinkRecord::new(entry.name.as_str(), url))
        .collect();

    debug!(
        file = %entry.name,
        bytes = bytes.len(),
        links = records.len(),
        "extracted links"
    );
    Ok(records)
}

/// Extract every PDF in `dir` into one flat record list.
///
/// Files appear in listing order and each file's records in extraction
/// order. A URL found in two files yields two records. The first unreadable
/// file aborts the scan.
pub fn build_link_table(
    dir: &Path,
    extractor: &dyn LinkExtractor,
) -> Result<Vec<LinkRecord>, ScanError> {
    let mut table = Vec::new();
    for entry in list_pdfs(dir)? {
        table.extend(extract_file(&entry, extractor)?);
    }
    Ok(table)
}
