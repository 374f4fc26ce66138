//! The report pipeline: scan, render, write.

use std::fs;
use std::path::{Path, PathBuf};

use pdflinks_core::{Grouping, LinkRecord, records_to_csv, render_grouping, render_index};
use pdflinks_parse::{LinkExtractor, UriPatternExtractor, build_link_table};
use tracing::{debug, info};

use crate::error::ReportError;

/// Output file names, relative to the scanned directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Flat CSV dump. Default: `out.csv`.
    pub csv_name: String,
    /// HTML report grouped by file. Default: `pdfs.html`.
    pub by_file_name: String,
    /// HTML report grouped by domain. Default: `domains.html`.
    pub by_domain_name: String,
    /// Landing page linking both reports. Default: `index.html`.
    pub index_name: String,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            csv_name: "out.csv".to_string(),
            by_file_name: "pdfs.html".to_string(),
            by_domain_name: "domains.html".to_string(),
            index_name: "index.html".to_string(),
        }
    }
}

/// The four rendered documents, held in memory before writing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSet {
    pub csv: String,
    pub by_file_html: String,
    pub by_domain_html: String,
    pub index_html: String,
}

impl ReportSet {
    /// Render every document for `records`.
    ///
    /// The index page links to the report names from `config`, by-file first.
    pub fn render(records: &[LinkRecord], config: &ReportConfig) -> Self {
        Self {
            csv: records_to_csv(records),
            by_file_html: render_grouping(&Grouping::by_file(records)),
            by_domain_html: render_grouping(&Grouping::by_domain(records)),
            index_html: render_index(&[
                config.by_file_name.as_str(),
                config.by_domain_name.as_str(),
            ]),
        }
    }

    /// Write the documents into `dir` in the order CSV, by-file, by-domain,
    /// index. Existing files are overwritten. Stops at the first failure.
    pub fn write_to(
        &self,
        dir: &Path,
        config: &ReportConfig,
    ) -> Result<Vec<PathBuf>, ReportError> {
        let outputs = [
            (&config.csv_name, &self.csv),
            (&config.by_file_name, &self.by_file_html),
            (&config.by_domain_name, &self.by_domain_html),
            (&config.index_name, &self.index_html),
        ];

        let mut written = Vec::with_capacity(outputs.len());
        for (name, contents) in outputs {
            let path = dir.join(name);
            fs::write(&path, contents).map_err(|source| ReportError::Write {
                path: path.clone(),
                source,
            })?;
            debug!(path = %path.display(), bytes = contents.len(), "wrote report");
            written.push(path);
        }
        Ok(written)
    }
}

/// What a pipeline run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportSummary {
    /// Number of distinct PDF files that contributed records.
    pub files_with_links: usize,
    /// Total number of link records (one per file and unique URL).
    pub links_found: usize,
    /// Paths of the files written, in write order.
    pub written: Vec<PathBuf>,
}

/// Scan `dir` with the default [`UriPatternExtractor`] and write all reports.
pub fn generate_reports(dir: &Path, config: &ReportConfig) -> Result<ReportSummary, ReportError> {
    generate_reports_with(dir, config, &UriPatternExtractor::new())
}

/// Scan `dir` with `extractor` and write all reports into `dir`.
pub fn generate_reports_with(
    dir: &Path,
    config: &ReportConfig,
    extractor: &dyn LinkExtractor,
) -> Result<ReportSummary, ReportError> {
    let records = build_link_table(dir, extractor)?;
    let reports = ReportSet::render(&records, config);
    let written = reports.write_to(dir, config)?;

    let files_with_links = Grouping::by_file(&records).len();
    info!(
        dir = %dir.display(),
        files = files_with_links,
        links = records.len(),
        "reports generated"
    );

    Ok(ReportSummary {
        files_with_links,
        links_found: records.len(),
        written,
    })
}
