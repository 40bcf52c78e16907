use crate::application::read_models::{ModuleView, ProjectSummary, WarningView};
use crate::ports::outbound::ProjectFormatter;
use crate::shared::Result;
use std::fmt::Write;

const MODULE_TABLE_HEADER: &str = "| Module | Schema | Classes | Warnings |\n";
const MODULE_TABLE_SEPARATOR: &str = "|--------|--------|---------|----------|\n";

const WARNING_TABLE_HEADER: &str = "| Type | Category | Priority | Class | Line | File | Message |\n";
const WARNING_TABLE_SEPARATOR: &str =
    "|------|----------|----------|-------|------|------|---------|\n";

/// MarkdownFormatter adapter rendering the summary as Markdown tables
///
/// One module overview table, followed by a warnings table per module that
/// has warnings.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace(['\r', '\n'], " ")
    }

    fn render_header(&self, output: &mut String, summary: &ProjectSummary) {
        output.push_str("# FindBugs Summary\n\n");
        let _ = writeln!(
            output,
            "Generated by {} {} at {}.\n",
            summary.tool_name, summary.tool_version, summary.generated_at
        );
        let _ = writeln!(
            output,
            "**{} warning(s)** in {} module(s).\n",
            summary.total_warnings,
            summary.modules.len()
        );

        if !summary.categories.is_empty() {
            output.push_str("| Category | Warnings |\n|----------|----------|\n");
            for (category, count) in &summary.categories {
                let category = if category.is_empty() { "N/A" } else { category };
                let _ = writeln!(output, "| {} | {} |", Self::escape_cell(category), count);
            }
            output.push('\n');
        }
    }

    fn render_modules(&self, output: &mut String, modules: &[ModuleView]) {
        output.push_str("## Modules\n\n");
        if modules.is_empty() {
            output.push_str("*No FindBugs reports found*\n\n");
            return;
        }

        output.push_str(MODULE_TABLE_HEADER);
        output.push_str(MODULE_TABLE_SEPARATOR);
        for module in modules {
            let schema = if module.unknown_format {
                "unknown"
            } else {
                module.schema.as_str()
            };
            let _ = writeln!(
                output,
                "| {} | {} | {} | {} |",
                Self::escape_cell(&module.name),
                schema,
                module.class_count,
                module.warning_count
            );
        }
        output.push('\n');
    }

    fn render_warnings(&self, output: &mut String, module: &ModuleView, warnings: &[&WarningView]) {
        let _ = writeln!(output, "## {}\n", Self::escape_cell(&module.name));
        output.push_str(WARNING_TABLE_HEADER);
        output.push_str(WARNING_TABLE_SEPARATOR);
        for warning in warnings {
            let line = warning.line.map(|l| l.to_string()).unwrap_or_default();
            let _ = writeln!(
                output,
                "| {} | {} | {} | {} | {} | {} | {} |",
                Self::escape_cell(&warning.bug_type),
                Self::escape_cell(&warning.category),
                Self::escape_cell(&warning.priority),
                Self::escape_cell(warning.class_name.as_deref().unwrap_or("")),
                line,
                Self::escape_cell(warning.file.as_deref().unwrap_or("")),
                Self::escape_cell(&warning.message)
            );
        }
        output.push('\n');
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectFormatter for MarkdownFormatter {
    fn format(&self, summary: &ProjectSummary) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, summary);
        self.render_modules(&mut output, &summary.modules);

        for module in &summary.modules {
            let warnings: Vec<&WarningView> = summary
                .warnings
                .iter()
                .filter(|w| w.module == module.name)
                .collect();
            if !warnings.is_empty() {
                self.render_warnings(&mut output, module, &warnings);
            }
        }

        Ok(output)
    }
}
