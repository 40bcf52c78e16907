use findbugs_ingest::prelude::*;
use std::io::{Cursor, Read};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory ReportSource serving reports in insertion order
///
/// Counts `open` calls so tests can check how many streams were requested.
#[derive(Default, Clone)]
pub struct MockReportSource {
    reports: Vec<(String, String)>,
    opened: Arc<AtomicUsize>,
}

impl MockReportSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_report(mut self, file_name: &str, content: &str) -> Self {
        self.reports
            .push((file_name.to_string(), content.to_string()));
        self
    }

    pub fn open_count(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }
}

impl ReportSource for MockReportSource {
    fn list_reports(&self, directory: &Path, _pattern: &str) -> Result<Vec<ReportHandle>> {
        Ok(self
            .reports
            .iter()
            .map(|(name, _)| ReportHandle::new(directory.join(name)))
            .collect())
    }

    fn open(&self, report: &ReportHandle) -> Result<Box<dyn Read>> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        let name = report.file_name();
        let (_, content) = self
            .reports
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .ok_or_else(|| ReportError::ReportUnavailable {
                path: report.location().to_path_buf(),
                details: "not registered in mock".to_string(),
            })?;
        Ok(Box::new(Cursor::new(content.clone().into_bytes())))
    }
}
