use super::Project;
use std::collections::BTreeMap;

/// Mapping from warning qualified names to resolved source files
///
/// Keys are [`Warning::qualified_name`](super::Warning::qualified_name)
/// values. When two warnings share a key, the one inserted last wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileMapping {
    entries: BTreeMap<String, String>,
}

impl FileMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects every warning that has a file, in the project's flattened order
    pub fn from_project(project: &Project) -> Self {
        let mut mapping = Self::new();
        for warning in project.warnings() {
            if let Some(file) = warning.file() {
                mapping.insert(warning.qualified_name(), file.to_string());
            }
        }
        mapping
    }

    /// Inserts an entry, returning the value it replaced
    pub fn insert(&mut self, key: impl Into<String>, file: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), file.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Sets the file of every warning whose key is mapped.
    ///
    /// Warnings without an entry are left untouched. Returns the number of
    /// warnings updated.
    pub fn apply_to(&self, project: &mut Project) -> usize {
        let mut applied = 0;
        for warning in project.warnings_mut() {
            if let Some(file) = self.entries.get(&warning.qualified_name()) {
                warning.set_file(Some(file.clone()));
                applied += 1;
            }
        }
        applied
    }
}

impl FromIterator<(String, String)> for FileMapping {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
