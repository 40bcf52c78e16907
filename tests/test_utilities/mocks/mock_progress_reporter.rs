use findbugs_ingest::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ProgressReporter that records every message it receives
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    fn push(&self, message: String) {
        self.messages.lock().unwrap().push(message);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.push(format!("{}/{} {}", current, total, message.unwrap_or("")));
    }

    fn report_error(&self, message: &str) {
        self.push(format!("error: {}", message));
    }

    fn report_completion(&self, message: &str) {
        self.push(format!("done: {}", message));
    }
}
