mod format_detector;
mod report_parser;
mod xml_walker;

pub use format_detector::{FormatDetector, WRAPPED_WARNING_PATH};
pub use report_parser::ReportParser;
