use crate::shared::Result;

/// Identity of the build a set of results belongs to
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BuildIdentity {
    pub project: String,
    pub number: u32,
}

impl BuildIdentity {
    pub fn new(project: impl Into<String>, number: u32) -> Self {
        Self {
            project: project.into(),
            number,
        }
    }
}

/// BuildHistory port answering questions about the build orchestrator's history
pub trait BuildHistory {
    /// Returns whether `build` is the most recent build of its project
    fn is_latest(&self, build: &BuildIdentity) -> Result<bool>;
}
