/// Filesystem adapters for file I/O operations
mod file_writer;
mod mapping_store;
mod properties;
mod report_source;

pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use mapping_store::{FileSystemMappingStore, DEFAULT_MAPPING_FILE};
pub use report_source::FileSystemReportSource;
