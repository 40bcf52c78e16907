use crate::bug_collection::domain::FileMapping;
use crate::shared::Result;
use std::path::Path;

/// MappingStore port for persisting the warning-to-file mapping
///
/// The mapping lives next to the reports in the results directory. A single
/// writer per directory is assumed; callers serialize concurrent runs.
pub trait MappingStore {
    /// Loads the mapping stored for `results_dir`
    ///
    /// # Returns
    /// `None` if no mapping has been stored yet
    ///
    /// # Errors
    /// Returns `ReportError::ReportUnavailable` if a stored mapping exists but
    /// cannot be read
    fn load(&self, results_dir: &Path) -> Result<Option<FileMapping>>;

    /// Replaces the mapping stored for `results_dir`
    ///
    /// Implementations must not leave a partially written mapping behind.
    ///
    /// # Errors
    /// Returns `ReportError::MappingPersistence` if the mapping cannot be written
    fn store(&self, results_dir: &Path, mapping: &FileMapping) -> Result<()>;
}
