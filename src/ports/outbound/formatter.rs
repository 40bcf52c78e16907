use crate::application::read_models::ProjectSummary;
use crate::shared::Result;

/// ProjectFormatter port for rendering the collected results
///
/// Implementations turn the project read model into an export format
/// (JSON, Markdown).
pub trait ProjectFormatter {
    /// Formats the summary
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, summary: &ProjectSummary) -> Result<String>;
}
