//! findbugs-ingest - FindBugs report ingestion
//!
//! This library reads FindBugs XML reports in either the native schema or
//! the schema written by the Maven plug-in, aggregates one report per
//! module into a project, and maps warnings to Java source files. The
//! mapping is kept as a `file-mapping.properties` file next to the reports
//! so it can be restored later without a workspace.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`bug_collection`): report model, format detection and parsing
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use findbugs_ingest::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let collect = CollectReportsUseCase::new(
//!     FileSystemReportSource::new(),
//!     StderrProgressReporter::new(),
//! );
//! let results_dir = PathBuf::from("target/findbugs");
//! let mut project = collect.execute(&CollectRequest::new(results_dir.clone()))?;
//!
//! let mapper = MapWarningsUseCase::new(FileSystemMappingStore::new());
//! mapper.map_and_persist(&SourceTreeResolver::new("."), &results_dir, &mut project)?;
//!
//! let summary = ProjectSummaryBuilder::build(&project);
//! println!("{}", JsonFormatter::new().format(&summary)?);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod bug_collection;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemMappingStore, FileSystemReportSource, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::adapters::outbound::workspace::SourceTreeResolver;
    pub use crate::application::dto::{CollectRequest, OutputFormat};
    pub use crate::application::read_models::{ProjectSummary, ProjectSummaryBuilder};
    pub use crate::application::use_cases::{
        CheckCurrentBuildUseCase, CollectReportsUseCase, MapWarningsUseCase,
    };
    pub use crate::bug_collection::domain::{
        FileMapping, JavaClass, Module, Project, SourceLine, Warning,
    };
    pub use crate::bug_collection::services::{FormatDetector, ReportParser};
    pub use crate::ports::outbound::{
        BuildHistory, BuildIdentity, MappingStore, OutputPresenter, ProgressReporter,
        ProjectFormatter, ReportHandle, ReportSource, WorkspaceResolver,
    };
    pub use crate::shared::error::ReportError;
    pub use crate::shared::Result;
}
