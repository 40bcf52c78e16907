use crate::shared::Result;

/// OutputPresenter port for presenting final output
///
/// This port abstracts the output destination (stdout, file, etc.)
/// where the formatted project summary is written.
pub trait OutputPresenter {
    /// Writes the formatted content to the destination
    ///
    /// # Errors
    /// Returns an error if writing fails (permissions, missing directory, disk full)
    fn present(&self, content: &str) -> Result<()>;
}
