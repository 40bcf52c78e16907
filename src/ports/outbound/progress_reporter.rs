/// ProgressReporter port for reporting progress during report collection
///
/// This port abstracts user-facing progress output (e.g., to stderr) so it
/// does not interfere with the summary written to stdout.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress over a known number of steps
    ///
    /// # Arguments
    /// * `current` - Steps completed so far
    /// * `total` - Total number of steps
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
