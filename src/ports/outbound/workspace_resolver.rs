use crate::bug_collection::domain::Project;
use crate::shared::Result;

/// WorkspaceResolver port for locating the source file of each warning
///
/// Implementations set [`Warning::file`](crate::bug_collection::domain::Warning::file)
/// for every warning they can resolve. Warnings they cannot resolve keep
/// `None`; that is not an error.
pub trait WorkspaceResolver {
    /// Resolves source files for the warnings of `project` in place
    ///
    /// # Errors
    /// Returns an error if the workspace itself cannot be accessed
    fn resolve(&self, project: &mut Project) -> Result<()>;
}
