//! pdflinks-parse: Byte-level link extraction and directory scanning.
//!
//! Extraction is a pure function from a file's bytes to candidate URLs,
//! expressed through the [`LinkExtractor`] trait. The default
//! [`UriPatternExtractor`] does not parse the PDF object model; it decodes the
//! raw bytes as Latin-1 and matches `URI(...)` runs, which can both miss links
//! and report byte sequences that only look like one.

pub mod error;
pub mod extract;
pub mod scan;

pub use error::ScanError;
pub use extract::{LinkExtractor, UriPatternExtractor, decode_latin1};
pub use scan::{PDF_EXTENSION, PdfEntry, build_link_table, extract_file, list_pdfs};
