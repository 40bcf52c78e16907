use findbugs_ingest::prelude::*;
use std::collections::HashMap;

/// WorkspaceResolver mapping class names to fixed files
#[derive(Default)]
pub struct MockWorkspaceResolver {
    files: HashMap<String, String>,
}

impl MockWorkspaceResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, class_name: &str, file: &str) -> Self {
        self.files.insert(class_name.to_string(), file.to_string());
        self
    }
}

impl WorkspaceResolver for MockWorkspaceResolver {
    fn resolve(&self, project: &mut Project) -> Result<()> {
        for warning in project.warnings_mut() {
            let file = warning
                .class_name()
                .and_then(|class_name| self.files.get(class_name))
                .cloned();
            warning.set_file(file);
        }
        Ok(())
    }
}
