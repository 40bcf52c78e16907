//! Project summary read model for export
//!
//! Flattened view of a collected [`Project`](crate::bug_collection::domain::Project)
//! that formatters render without touching the domain types.

use serde::Serialize;
use std::collections::BTreeMap;

/// Main read model for collected FindBugs results
#[derive(Debug, Clone, Serialize)]
pub struct ProjectSummary {
    /// Name of the tool that produced the summary
    pub tool_name: String,
    /// Version of the tool
    pub tool_version: String,
    /// RFC 3339 timestamp of the export
    pub generated_at: String,
    pub total_warnings: usize,
    /// Warning counts per category, in category order
    pub categories: BTreeMap<String, usize>,
    pub modules: Vec<ModuleView>,
    /// Every warning of every module, in the project's flattened order
    pub warnings: Vec<WarningView>,
}

/// View representation of one module (one report file)
#[derive(Debug, Clone, Serialize)]
pub struct ModuleView {
    pub name: String,
    /// `"native"` or `"wrapped"`
    pub schema: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effort: Option<String>,
    pub class_count: usize,
    pub warning_count: usize,
    /// True if the report held nothing recognizable
    pub unknown_format: bool,
}

/// View representation of a single warning
#[derive(Debug, Clone, Serialize)]
pub struct WarningView {
    pub module: String,
    pub qualified_name: String,
    pub bug_type: String,
    pub category: String,
    pub priority: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}
