use super::properties;
use crate::bug_collection::domain::FileMapping;
use crate::ports::outbound::MappingStore;
use crate::shared::error::ReportError;
use crate::shared::Result;
use chrono::Utc;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// File name of the mapping inside the results directory
pub const DEFAULT_MAPPING_FILE: &str = "file-mapping.properties";

const MAPPING_COMMENT: &str = "Mapping of FindBugs warnings to Java files";

/// FileSystemMappingStore adapter keeping the mapping as a `.properties` file
///
/// The file is written to a temporary sibling first and renamed into place,
/// so readers never observe a partially written mapping.
pub struct FileSystemMappingStore {
    file_name: String,
}

impl FileSystemMappingStore {
    pub fn new() -> Self {
        Self {
            file_name: DEFAULT_MAPPING_FILE.to_string(),
        }
    }

    pub fn with_file_name(mut self, file_name: impl Into<String>) -> Self {
        self.file_name = file_name.into();
        self
    }

    pub fn mapping_path(&self, results_dir: &Path) -> PathBuf {
        results_dir.join(&self.file_name)
    }
}

impl Default for FileSystemMappingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MappingStore for FileSystemMappingStore {
    fn load(&self, results_dir: &Path) -> Result<Option<FileMapping>> {
        let path = self.mapping_path(results_dir);
        let unavailable = |details: String| ReportError::ReportUnavailable {
            path: path.clone(),
            details,
        };

        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No mapping file");
                return Ok(None);
            }
            Err(e) => return Err(unavailable(e.to_string()).into()),
        };

        let entries = properties::decode(&properties::latin1_to_string(&bytes))
            .map_err(|e| unavailable(e.to_string()))?;
        Ok(Some(entries.into_iter().collect()))
    }

    fn store(&self, results_dir: &Path, mapping: &FileMapping) -> Result<()> {
        let path = self.mapping_path(results_dir);
        let persistence = |details: String| ReportError::MappingPersistence {
            path: path.clone(),
            details,
        };

        let content = properties::encode(mapping.iter(), MAPPING_COMMENT, Utc::now());

        let mut temp = NamedTempFile::new_in(results_dir).map_err(|e| persistence(e.to_string()))?;
        temp.write_all(content.as_bytes())
            .and_then(|_| temp.as_file().sync_all())
            .map_err(|e| persistence(e.to_string()))?;
        temp.persist(&path)
            .map_err(|e| persistence(e.error.to_string()))?;

        tracing::debug!(path = %path.display(), entries = mapping.len(), "Stored mapping file");
        Ok(())
    }
}
