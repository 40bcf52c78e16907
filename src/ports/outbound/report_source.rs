use crate::shared::Result;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Handle to one report file returned by a [`ReportSource`] listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportHandle {
    location: PathBuf,
}

impl ReportHandle {
    pub fn new(location: impl Into<PathBuf>) -> Self {
        Self {
            location: location.into(),
        }
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    /// File name including the extension, used in messages
    pub fn file_name(&self) -> String {
        self.location
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.location.display().to_string())
    }

    /// Module name derived from the file name without its extension
    pub fn module_name(&self) -> String {
        self.location
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// ReportSource port for listing and reading report files
///
/// This port abstracts the file store holding the FindBugs results. It acts
/// as a stream factory: every call to [`open`](ReportSource::open) must
/// return a fresh stream positioned at the start of the report, so format
/// detection and parsing can each read the report from the beginning.
pub trait ReportSource {
    /// Lists the reports in `directory` whose names match `pattern` (e.g. `*.xml`)
    ///
    /// The order of the returned handles is the order in which modules are
    /// added to the project.
    ///
    /// # Errors
    /// Returns an error if the directory cannot be listed or the pattern is invalid
    fn list_reports(&self, directory: &Path, pattern: &str) -> Result<Vec<ReportHandle>>;

    /// Opens a new stream over the report content
    ///
    /// # Errors
    /// Returns `ReportError::ReportUnavailable` if the report cannot be opened
    fn open(&self, report: &ReportHandle) -> Result<Box<dyn Read>>;
}
