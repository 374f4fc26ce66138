//! Flat CSV encoding of link records.
//!
//! One row per record with the fields `filename,domain,url`, no header,
//! rows terminated by CRLF.

use crate::record::LinkRecord;

/// Row terminator.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Escape a string for CSV output.
///
/// If the text contains commas, double quotes, carriage returns or newlines,
/// wraps it in double quotes and escapes any internal double quotes by
/// doubling them.
pub fn csv_escape(text: &str) -> String {
    if text.contains([',', '"', '\r', '\n']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

/// Encode one record as a CSV row, including the terminator.
pub fn record_row(record: &LinkRecord) -> String {
    let mut row = String::new();
    row.push_str(&csv_escape(&record.source_filename));
    row.push(',');
    row.push_str(&csv_escape(&record.domain));
    row.push(',');
    row.push_str(&csv_escape(&record.url));
    row.push_str(LINE_TERMINATOR);
    row
}

/// Encode records into an in-memory CSV document, one row each, in order.
pub fn records_to_csv(records: &[LinkRecord]) -> String {
    records.iter().map(record_row).collect()
}
