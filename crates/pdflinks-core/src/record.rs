//! The link record produced by extraction and consumed by every renderer.

use crate::authority::url_authority;

/// One hyperlink target found in one PDF file.
///
/// Records are created once during extraction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinkRecord {
    /// File name of the PDF (no directory component).
    pub source_filename: String,
    /// `host[:port]` of the URL, empty when the URL has no authority.
    pub domain: String,
    /// The link target exactly as found in the file.
    pub url: String,
}

impl LinkRecord {
    /// Create a record, deriving the domain from the URL.
    pub fn new(source_filename: impl Into<String>, url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            source_filename: source_filename.into(),
            domain: url_authority(&url),
            url,
        }
    }
}
