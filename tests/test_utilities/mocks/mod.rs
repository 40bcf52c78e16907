/// Mock implementations for testing
mod mock_build_history;
mod mock_mapping_store;
mod mock_progress_reporter;
mod mock_report_source;
mod mock_workspace_resolver;

pub use mock_build_history::MockBuildHistory;
pub use mock_mapping_store::MockMappingStore;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_report_source::MockReportSource;
pub use mock_workspace_resolver::MockWorkspaceResolver;
