use clap::{ArgAction, Parser};
use findbugs_ingest::adapters::outbound::filesystem::DEFAULT_MAPPING_FILE;
use findbugs_ingest::application::dto::{OutputFormat, DEFAULT_REPORT_PATTERN};
use findbugs_ingest::config::ConfigFile;
use findbugs_ingest::shared::error::ReportError;
use findbugs_ingest::shared::Result;
use std::path::PathBuf;

/// Collect FindBugs reports and map their warnings to Java source files
#[derive(Parser, Debug)]
#[command(name = "findbugs-ingest")]
#[command(version)]
#[command(
    about = "Collect FindBugs reports (native or Maven plug-in format) and map warnings to Java source files",
    long_about = None
)]
pub struct Args {
    /// Directory holding the FindBugs XML reports (defaults to current directory)
    #[arg(short = 'r', long = "results", value_name = "DIR")]
    pub results_dir: Option<PathBuf>,

    /// Workspace root; when given, warnings are resolved to source files and
    /// the mapping is stored next to the reports. Otherwise the stored
    /// mapping is restored.
    #[arg(short, long, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// Glob pattern selecting report files [default: *.xml]
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Output format: json or markdown [default: json]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Config file (defaults to findbugs-ingest.config.yml in the current directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Exit with code 1 if any warning was collected
    #[arg(long)]
    pub fail_on_warnings: bool,

    /// Increase diagnostic output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Effective run settings: CLI flags over config file values over defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub results_dir: PathBuf,
    pub pattern: String,
    pub mapping_file: String,
    pub workspace: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub fail_on_warnings: bool,
}

impl Settings {
    pub fn merge(args: Args, config: Option<ConfigFile>) -> Result<Self> {
        let config = config.unwrap_or_default();

        let config_format = config
            .format
            .as_deref()
            .map(str::parse::<OutputFormat>)
            .transpose()
            .map_err(|message| ReportError::Validation { message })?;

        let pattern = args
            .pattern
            .or(config.pattern)
            .unwrap_or_else(|| DEFAULT_REPORT_PATTERN.to_string());
        if pattern.trim().is_empty() {
            return Err(ReportError::Validation {
                message: "Report pattern must not be empty".to_string(),
            }
            .into());
        }

        Ok(Self {
            results_dir: args
                .results_dir
                .or(config.results_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            pattern,
            mapping_file: config
                .mapping_file
                .unwrap_or_else(|| DEFAULT_MAPPING_FILE.to_string()),
            workspace: args.workspace.or(config.workspace),
            format: args.format.or(config_format).unwrap_or_default(),
            output: args.output,
            fail_on_warnings: args.fail_on_warnings || config.fail_on_warnings.unwrap_or(false),
        })
    }
}
