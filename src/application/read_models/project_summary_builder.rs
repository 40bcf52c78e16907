//! Builder for constructing ProjectSummary from the domain project

use super::project_summary::{ModuleView, ProjectSummary, WarningView};
use crate::bug_collection::domain::{Module, Project, Warning};
use chrono::{DateTime, Utc};
use std::collections::BTreeMap;

/// Builder for constructing ProjectSummary from domain objects
pub struct ProjectSummaryBuilder;

impl ProjectSummaryBuilder {
    /// Builds a summary stamped with the current time
    pub fn build(project: &Project) -> ProjectSummary {
        Self::build_at(project, Utc::now())
    }

    /// Builds a summary stamped with `generated_at`
    pub fn build_at(project: &Project, generated_at: DateTime<Utc>) -> ProjectSummary {
        let modules = project.modules().iter().map(Self::build_module).collect();

        let warnings: Vec<WarningView> = project
            .modules()
            .iter()
            .flat_map(|module| {
                module
                    .all_warnings()
                    .map(move |warning| Self::build_warning(module.name(), warning))
            })
            .collect();

        let mut categories = BTreeMap::new();
        for warning in &warnings {
            *categories.entry(warning.category.clone()).or_insert(0) += 1;
        }

        ProjectSummary {
            tool_name: env!("CARGO_PKG_NAME").to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            generated_at: generated_at.to_rfc3339(),
            total_warnings: warnings.len(),
            categories,
            modules,
            warnings,
        }
    }

    fn build_module(module: &Module) -> ModuleView {
        ModuleView {
            name: module.name().to_string(),
            schema: if module.is_wrapped_schema() {
                "wrapped".to_string()
            } else {
                "native".to_string()
            },
            version: module.version().map(str::to_string),
            threshold: module.threshold().map(str::to_string),
            effort: module.effort().map(str::to_string),
            class_count: module.classes().len(),
            warning_count: module.warning_count(),
            unknown_format: module.is_empty(),
        }
    }

    fn build_warning(module: &str, warning: &Warning) -> WarningView {
        WarningView {
            module: module.to_string(),
            qualified_name: warning.qualified_name(),
            bug_type: warning.bug_type().to_string(),
            category: warning.category().to_string(),
            priority: warning.priority().to_string(),
            message: warning.message().to_string(),
            class_name: warning.class_name().map(str::to_string),
            line: warning.line(),
            file: warning.file().map(str::to_string),
        }
    }
}
