use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Glob pattern matching FindBugs result files
pub const DEFAULT_REPORT_PATTERN: &str = "*.xml";

/// CollectRequest - request DTO for the report collection use case
#[derive(Debug, Clone)]
pub struct CollectRequest {
    /// Directory holding the FindBugs XML reports
    pub results_dir: PathBuf,
    /// Glob pattern selecting report files inside `results_dir`
    pub pattern: String,
    /// Set from another thread to stop collection before the next file
    pub cancel_flag: Option<Arc<AtomicBool>>,
}

impl CollectRequest {
    pub fn new(results_dir: PathBuf) -> Self {
        Self {
            results_dir,
            pattern: DEFAULT_REPORT_PATTERN.to_string(),
            cancel_flag: None,
        }
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    pub fn with_cancel_flag(mut self, cancel_flag: Arc<AtomicBool>) -> Self {
        self.cancel_flag = Some(cancel_flag);
        self
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }
}
