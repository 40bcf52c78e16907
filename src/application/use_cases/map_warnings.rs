use crate::bug_collection::domain::{FileMapping, Project};
use crate::ports::outbound::{MappingStore, WorkspaceResolver};
use crate::shared::error::ReportError;
use crate::shared::Result;
use std::path::Path;

/// MapWarningsUseCase - links warnings to Java source files
///
/// With a workspace at hand the files are resolved and the mapping is
/// persisted next to the reports. Later runs without a workspace restore
/// the mapping from there.
pub struct MapWarningsUseCase<MS> {
    mapping_store: MS,
}

impl<MS: MappingStore> MapWarningsUseCase<MS> {
    pub fn new(mapping_store: MS) -> Self {
        Self { mapping_store }
    }

    /// Resolves every warning's file through `resolver` and persists the
    /// resulting mapping for `results_dir`
    ///
    /// # Errors
    /// Returns `ReportError::MappingPersistence` if resolution or storage fails
    pub fn map_and_persist<WR>(
        &self,
        resolver: &WR,
        results_dir: &Path,
        project: &mut Project,
    ) -> Result<FileMapping>
    where
        WR: WorkspaceResolver + ?Sized,
    {
        resolver
            .resolve(project)
            .map_err(|e| ReportError::MappingPersistence {
                path: results_dir.to_path_buf(),
                details: format!("{:#}", e),
            })?;

        let mapping = FileMapping::from_project(project);
        self.mapping_store.store(results_dir, &mapping)?;

        tracing::info!(
            entries = mapping.len(),
            warnings = project.warning_count(),
            "Persisted warning file mapping"
        );
        Ok(mapping)
    }

    /// Applies the stored mapping for `results_dir` to `project`
    ///
    /// # Returns
    /// The number of warnings whose file was set; `0` when nothing is stored
    pub fn restore(&self, results_dir: &Path, project: &mut Project) -> Result<usize> {
        let Some(mapping) = self.mapping_store.load(results_dir)? else {
            tracing::debug!(
                results_dir = %results_dir.display(),
                "No stored warning file mapping"
            );
            return Ok(0);
        };

        let applied = mapping.apply_to(project);
        tracing::info!(
            entries = mapping.len(),
            applied,
            "Restored warning file mapping"
        );
        Ok(applied)
    }
}
