/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file store, workspace, console, etc.).
pub mod build_history;
pub mod formatter;
pub mod mapping_store;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_source;
pub mod workspace_resolver;

pub use build_history::{BuildHistory, BuildIdentity};
pub use formatter::ProjectFormatter;
pub use mapping_store::MappingStore;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_source::{ReportHandle, ReportSource};
pub use workspace_resolver::WorkspaceResolver;
