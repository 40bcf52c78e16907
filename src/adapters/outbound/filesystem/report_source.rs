use crate::ports::outbound::{ReportHandle, ReportSource};
use crate::shared::error::ReportError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_REPORT_SIZE};
use crate::shared::Result;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// FileSystemReportSource adapter listing and opening reports on disk
///
/// Listing uses a glob below the results directory and returns the matches
/// sorted by path. Every `open` hands out a new buffered `File`.
pub struct FileSystemReportSource;

impl FileSystemReportSource {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemReportSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportSource for FileSystemReportSource {
    fn list_reports(&self, directory: &Path, pattern: &str) -> Result<Vec<ReportHandle>> {
        if !directory.is_dir() {
            return Err(ReportError::InvalidResultsDirectory {
                path: directory.to_path_buf(),
                reason: if directory.exists() {
                    "Path is not a directory".to_string()
                } else {
                    "Directory does not exist".to_string()
                },
            }
            .into());
        }

        let directory_str = directory
            .to_str()
            .ok_or_else(|| ReportError::InvalidResultsDirectory {
                path: directory.to_path_buf(),
                reason: "Path is not valid UTF-8".to_string(),
            })?;
        let full_pattern = format!("{}/{}", glob::Pattern::escape(directory_str), pattern);

        let entries = glob::glob(&full_pattern).map_err(|e| ReportError::Validation {
            message: format!("Invalid report pattern '{}': {}", pattern, e),
        })?;

        let mut reports = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| ReportError::ReportUnavailable {
                path: e.path().to_path_buf(),
                details: e.error().to_string(),
            })?;
            if path.is_file() {
                reports.push(ReportHandle::new(path));
            }
        }
        reports.sort_by(|a, b| a.location().cmp(b.location()));

        tracing::debug!(
            directory = %directory.display(),
            pattern,
            count = reports.len(),
            "Listed FindBugs reports"
        );
        Ok(reports)
    }

    fn open(&self, report: &ReportHandle) -> Result<Box<dyn Read>> {
        let path = report.location();
        let unavailable = |details: String| ReportError::ReportUnavailable {
            path: path.to_path_buf(),
            details,
        };

        let size = validate_regular_file(path, "report").map_err(|e| unavailable(e.to_string()))?;
        validate_file_size(size, path, MAX_REPORT_SIZE).map_err(|e| unavailable(e.to_string()))?;

        let file = File::open(path).map_err(|e| unavailable(e.to_string()))?;
        Ok(Box::new(BufReader::new(file)))
    }
}
