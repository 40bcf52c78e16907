use findbugs_ingest::prelude::*;
use std::collections::HashMap;

/// BuildHistory knowing the latest build number of each project
#[derive(Default)]
pub struct MockBuildHistory {
    latest: HashMap<String, u32>,
}

impl MockBuildHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_latest(mut self, project: &str, number: u32) -> Self {
        self.latest.insert(project.to_string(), number);
        self
    }
}

impl BuildHistory for MockBuildHistory {
    fn is_latest(&self, build: &BuildIdentity) -> Result<bool> {
        match self.latest.get(&build.project) {
            Some(latest) => Ok(*latest == build.number),
            None => anyhow::bail!("Unknown project: {}", build.project),
        }
    }
}
