use std::path::Path;

use pdflinks::{ReportConfig, generate_reports};
use tracing::warn;

/// Generate all reports for `dir`.
///
/// A path that is not an existing directory is not an error: nothing is
/// written and the process still exits successfully, with a warning logged.
pub fn run(dir: &Path, config: &ReportConfig) -> Result<(), i32> {
    if !dir.is_dir() {
        warn!(path = %dir.display(), "not a directory, nothing to do");
        return Ok(());
    }

    generate_reports(dir, config).map(|_| ()).map_err(|e| {
        eprintln!("Error: {e}");
        1
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_directory_is_silent_success() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("nope");
        assert_eq!(run(&missing, &ReportConfig::default()), Ok(()));
        assert!(!missing.exists());
    }

    #[test]
    fn regular_file_path_is_silent_success() {
        let tmp = tempfile::tempdir().unwrap();
        let file = tmp.path().join("a.pdf");
        std::fs::write(&file, b"URI(https://a.com/)").unwrap();
        assert_eq!(run(&file, &ReportConfig::default()), Ok(()));
        assert!(!tmp.path().join("out.csv").exists());
    }

    #[test]
    fn write_failure_maps_to_exit_code_one() {
        let tmp = tempfile::tempdir().unwrap();
        let config = ReportConfig {
            index_name: "no/such/dir/index.html".to_string(),
            ..ReportConfig::default()
        };
        assert_eq!(run(tmp.path(), &config), Err(1));
        assert!(tmp.path().join("out.csv").exists());
    }
}
