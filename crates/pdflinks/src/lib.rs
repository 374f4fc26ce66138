//! pdflinks: Index the hyperlinks found in a directory of PDF documents.
//!
//! This is the public API facade crate. It re-exports types from
//! pdflinks-core and uses pdflinks-parse to read the files, then writes a
//! flat CSV dump and three cross-linked HTML pages next to the PDFs.
//!
//! # Architecture
//!
//! - **pdflinks-core**: records, grouping, HTML/CSV rendering
//! - **pdflinks-parse**: byte-level extraction and directory scanning
//! - **pdflinks** (this crate): the report pipeline and its configuration

pub mod error;
pub mod report;

pub use pdflinks_core;
pub use pdflinks_parse;

pub use error::ReportError;
pub use pdflinks_core::{GroupOrder, Grouping, LinkRecord};
pub use pdflinks_parse::{LinkExtractor, ScanError, UriPatternExtractor};
pub use report::{ReportConfig, ReportSet, ReportSummary, generate_reports, generate_reports_with};
