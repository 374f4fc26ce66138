use std::path::PathBuf;

use clap::{ArgAction, Parser};
use pdflinks::ReportConfig;
use tracing::Level;

/// Index the hyperlinks found in a directory of PDF documents.
///
/// Writes a CSV dump, an HTML report grouped by file, an HTML report grouped
/// by domain, and an index page into the scanned directory.
#[derive(Debug, Parser)]
#[command(name = "pdflinks", about, version)]
pub struct Cli {
    /// Directory containing the PDF files (not searched recursively)
    #[arg(value_name = "PDF_DIR")]
    pub pdf_dir: PathBuf,

    /// File name of the CSV dump
    #[arg(long, value_name = "NAME", default_value = "out.csv")]
    pub csv_name: String,

    /// File name of the report grouped by PDF file
    #[arg(long, value_name = "NAME", default_value = "pdfs.html")]
    pub by_file_name: String,

    /// File name of the report grouped by domain
    #[arg(long, value_name = "NAME", default_value = "domains.html")]
    pub by_domain_name: String,

    /// File name of the index page
    #[arg(long, value_name = "NAME", default_value = "index.html")]
    pub index_name: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Output names as a library config value.
    pub fn report_config(&self) -> ReportConfig {
        ReportConfig {
            csv_name: self.csv_name.clone(),
            by_file_name: self.by_file_name.clone(),
            by_domain_name: self.by_domain_name.clone(),
            index_name: self.index_name.clone(),
        }
    }

    /// Maximum level for the stderr log subscriber.
    pub fn log_level(&self) -> Level {
        if self.quiet {
            return Level::ERROR;
        }
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}
