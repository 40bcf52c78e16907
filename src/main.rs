mod cli;

use clap::Parser;
use cli::{Args, Settings};
use findbugs_ingest::adapters::outbound::console::StderrProgressReporter;
use findbugs_ingest::adapters::outbound::filesystem::{
    FileSystemMappingStore, FileSystemReportSource,
};
use findbugs_ingest::adapters::outbound::workspace::SourceTreeResolver;
use findbugs_ingest::application::dto::CollectRequest;
use findbugs_ingest::application::factories::{FormatterFactory, PresenterFactory, PresenterType};
use findbugs_ingest::application::read_models::ProjectSummaryBuilder;
use findbugs_ingest::application::use_cases::{CollectReportsUseCase, MapWarningsUseCase};
use findbugs_ingest::config::{discover_config, load_config_from_path};
use findbugs_ingest::shared::error::{ExitCode, ReportError};
use findbugs_ingest::shared::Result;
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::process;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() {
                ExitCode::InvalidArguments
            } else {
                ExitCode::Success
            };
            let _ = e.print();
            process::exit(code.as_i32());
        }
    };

    init_tracing(args.verbose);

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            print_error(&e);
            let code = match e.downcast_ref::<ReportError>() {
                Some(ReportError::Validation { .. }) => ExitCode::InvalidArguments,
                _ => ExitCode::ApplicationError,
            };
            process::exit(code.as_i32());
        }
    }
}

/// Diagnostics go to stderr; `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}

fn print_error(e: &anyhow::Error) {
    let colored = std::io::stderr().is_terminal();
    if colored {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
    } else {
        eprintln!("\n❌ An error occurred:\n");
    }
    eprintln!("{}", e);

    for cause in e.chain().skip(1) {
        if colored {
            eprintln!("\n{} {}", "Caused by:".yellow(), cause);
        } else {
            eprintln!("\nCaused by: {}", cause);
        }
    }
    eprintln!();
}

fn run(args: Args) -> Result<ExitCode> {
    let config = match &args.config {
        Some(path) => Some(load_config_from_path(path)?),
        None => discover_config(&std::env::current_dir()?)?,
    };
    let settings = Settings::merge(args, config)?;
    tracing::debug!(?settings, "Effective settings");

    // Create adapters (Dependency Injection)
    let collect_reports =
        CollectReportsUseCase::new(FileSystemReportSource::new(), StderrProgressReporter::new());
    let map_warnings = MapWarningsUseCase::new(
        FileSystemMappingStore::new().with_file_name(settings.mapping_file.clone()),
    );

    let request =
        CollectRequest::new(settings.results_dir.clone()).with_pattern(settings.pattern.clone());
    let mut project = collect_reports.execute(&request)?;

    match &settings.workspace {
        Some(workspace) => {
            let resolver = SourceTreeResolver::new(workspace.clone());
            let mapping =
                map_warnings.map_and_persist(&resolver, &settings.results_dir, &mut project)?;
            eprintln!("🔗 Mapped {} warning(s) to source files", mapping.len());
        }
        None => {
            let restored = map_warnings.restore(&settings.results_dir, &mut project)?;
            if restored > 0 {
                eprintln!("🔗 Restored source files for {} warning(s)", restored);
            }
        }
    }

    eprintln!("{}", FormatterFactory::progress_message(settings.format));
    let summary = ProjectSummaryBuilder::build(&project);
    let output = FormatterFactory::create(settings.format).format(&summary)?;

    let presenter_type = match settings.output {
        Some(path) => PresenterType::File(path),
        None => PresenterType::Stdout,
    };
    PresenterFactory::create(presenter_type).present(&output)?;

    if settings.fail_on_warnings && summary.total_warnings > 0 {
        eprintln!(
            "⚠️  {} warning(s) found and --fail-on-warnings is set",
            summary.total_warnings
        );
        return Ok(ExitCode::WarningsFound);
    }
    Ok(ExitCode::Success)
}
