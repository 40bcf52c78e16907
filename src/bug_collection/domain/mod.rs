pub mod file_mapping;
pub mod java_class;
pub mod module;
pub mod project;
pub mod source_line;
pub mod warning;

pub use file_mapping::FileMapping;
pub use java_class::JavaClass;
pub use module::{Module, UNKNOWN_FORMAT_NAME};
pub use project::Project;
pub use source_line::SourceLine;
pub use warning::Warning;
