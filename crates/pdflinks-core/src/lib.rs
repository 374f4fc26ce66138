//! pdflinks-core: Backend-independent data types and algorithms.
//!
//! This crate provides the link record type, URL authority parsing, the
//! two-level [`Grouping`] used by both cross-index views, and the HTML and
//! CSV renderers. It never touches the
//! filesystem; byte-level extraction lives in pdflinks-parse.

pub mod authority;
pub mod csv;
pub mod grouping;
pub mod html;
pub mod record;

pub use authority::url_authority;
pub use csv::{csv_escape, record_row, records_to_csv};
pub use grouping::{GroupOrder, Grouping};
pub use html::{
    BY_DOMAIN_TITLE, BY_FILE_TITLE, INDEX_TITLE, make_link, make_list_link, make_section,
    render_grouping, render_grouping_body, render_index, render_page,
};
pub use record::LinkRecord;
