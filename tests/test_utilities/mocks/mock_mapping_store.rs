use findbugs_ingest::prelude::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory MappingStore shared between clones
#[derive(Default, Clone)]
pub struct MockMappingStore {
    stored: Arc<Mutex<HashMap<PathBuf, FileMapping>>>,
}

impl MockMappingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored(&self, results_dir: &Path) -> Option<FileMapping> {
        self.stored.lock().unwrap().get(results_dir).cloned()
    }
}

impl MappingStore for MockMappingStore {
    fn load(&self, results_dir: &Path) -> Result<Option<FileMapping>> {
        Ok(self.stored(results_dir))
    }

    fn store(&self, results_dir: &Path, mapping: &FileMapping) -> Result<()> {
        self.stored
            .lock()
            .unwrap()
            .insert(results_dir.to_path_buf(), mapping.clone());
        Ok(())
    }
}
