use crate::application::dto::CollectRequest;
use crate::bug_collection::domain::{Module, Project};
use crate::bug_collection::services::{FormatDetector, ReportParser};
use crate::ports::outbound::{ProgressReporter, ReportHandle, ReportSource};
use crate::shared::error::ReportError;
use crate::shared::Result;


/// CollectReportsUseCase - aggregates per-module FindBugs reports into a project
///
/// Every report listed by the [`ReportSource`] is classified, parsed and
/// appended to the project in listing order. The module takes its name from
/// the report file, not from the report content.
///
/// # Type Parameters
/// * `RS` - ReportSource implementation
/// * `PR` - ProgressReporter implementation
pub struct CollectReportsUseCase<RS, PR> {
    report_source: RS,
    progress_reporter: PR,
}

impl<RS, PR> CollectReportsUseCase<RS, PR>
where
    RS: ReportSource,
    PR: ProgressReporter,
{
    /// Creates a new CollectReportsUseCase with injected dependencies
    pub fn new(report_source: RS, progress_reporter: PR) -> Self {
        Self {
            report_source,
            progress_reporter,
        }
    }

    /// Collects all reports of the request into a new project
    ///
    /// # Errors
    /// Fails on the first report that cannot be read or parsed; the error
    /// names the report. Fails with `ReportError::Interrupted` if the
    /// request's cancel flag is set before a report is started.
    pub fn execute(&self, request: &CollectRequest) -> Result<Project> {
        let reports = self
            .report_source
            .list_reports(&request.results_dir, &request.pattern)?;

        self.progress_reporter.report(&format!(
            "📖 Found {} FindBugs report(s) in {}",
            reports.len(),
            request.results_dir.display()
        ));

        let mut project = Project::new();
        for (index, report) in reports.iter().enumerate() {
            if request.is_cancelled() {
                tracing::info!(collected = index, "Report collection cancelled");
                return Err(ReportError::Interrupted.into());
            }

            let module = match self.parse_report(report) {
                Ok(module) => module,
                Err(e) => {
                    self.progress_reporter
                        .report_error(&format!("❌ Failed to read {}", report.file_name()));
                    return Err(e.context(format!(
                        "Failed to collect FindBugs report {}",
                        report.location().display()
                    )));
                }
            };
            self.progress_reporter
                .report_progress(index + 1, reports.len(), Some(&report.file_name()));
            project.add_module(module);
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Collected {} module(s) with {} warning(s)",
            project.module_count(),
            project.warning_count()
        ));

        Ok(project)
    }

    /// Classifies and parses a single report, named after its file
    ///
    /// Detection and parsing each read from their own stream.
    pub fn parse_report(&self, report: &ReportHandle) -> Result<Module> {
        let source_name = report.file_name();

        let wrapped = FormatDetector::is_wrapped(self.report_source.open(report)?, &source_name)?;
        let mut module =
            ReportParser::parse(self.report_source.open(report)?, wrapped, &source_name)?;
        module.set_name(report.module_name());

        tracing::debug!(
            module = module.name(),
            wrapped,
            warnings = module.warning_count(),
            "Parsed FindBugs report"
        );
        Ok(module)
    }
}
