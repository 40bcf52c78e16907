use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - reports ingested (and no warnings, if `--fail-on-warnings` is set)
    Success = 0,
    /// Warnings were found and `--fail-on-warnings` was requested
    WarningsFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (malformed report, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::WarningsFound => write!(f, "Warnings Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while ingesting FindBugs reports and their file mapping.
///
/// Callers holding an `anyhow::Error` recover the category with
/// `err.downcast_ref::<ReportError>()`.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Structurally invalid XML handed to the detector or the parser
    #[error("Malformed FindBugs report: {source_name}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a complete, well-formed XML document")]
    MalformedReport {
        source_name: String,
        details: String,
    },

    /// I/O failure opening or reading a report or the mapping file
    #[error("Failed to read: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    ReportUnavailable { path: PathBuf, details: String },

    /// Failure resolving or writing the warning-to-file mapping
    #[error("Failed to persist warning mapping: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the results directory is writable")]
    MappingPersistence { path: PathBuf, details: String },

    #[error("Invalid results directory: {path}\nReason: {reason}\n\n💡 Hint: Please specify the directory that holds the FindBugs XML reports")]
    InvalidResultsDirectory { path: PathBuf, reason: String },

    #[error("Failed to write summary: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the output directory exists and is writable")]
    OutputWrite { path: PathBuf, details: String },

    /// Aggregation was cancelled between two files
    #[error("Report collection was interrupted")]
    Interrupted,

    /// Validation error for configuration and builder input
    #[error("Validation error: {message}")]
    Validation { message: String },
}
