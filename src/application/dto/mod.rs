/// Data Transfer Objects for application layer
///
/// DTOs carry requests from the adapters into the use cases, keeping the
/// domain layer isolated.
mod collect_request;
mod output_format;

pub use collect_request::{CollectRequest, DEFAULT_REPORT_PATTERN};
pub use output_format::OutputFormat;
