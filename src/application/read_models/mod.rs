//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of the collected project for export.

mod project_summary;
mod project_summary_builder;

pub use project_summary::{ModuleView, ProjectSummary, WarningView};
pub use project_summary_builder::ProjectSummaryBuilder;
