use crate::bug_collection::domain::Project;
use crate::ports::outbound::WorkspaceResolver;
use crate::shared::Result;
use std::collections::HashMap;
use std::path::PathBuf;
use walkdir::{DirEntry, WalkDir};

/// SourceTreeResolver adapter mapping class names to `.java` files
///
/// The workspace is walked once per `resolve` call. `com.acme.Foo$Bar`
/// resolves to the first indexed file, in path order, ending in
/// `com/acme/Foo.java` on a directory boundary. Build output (`target`)
/// and hidden directories are not searched.
pub struct SourceTreeResolver {
    root: PathBuf,
}

impl SourceTreeResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// All `.java` files below the root, relative and `/`-separated, sorted
    fn index_sources(&self) -> Vec<String> {
        let walker = WalkDir::new(&self.root)
            .follow_links(false)
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !should_prune(e));

        let mut sources = Vec::new();
        let mut errors = 0usize;
        for item in walker {
            match item {
                Ok(entry) => {
                    let is_java = entry.file_type().is_file()
                        && entry.path().extension().is_some_and(|ext| ext == "java");
                    if is_java {
                        let relative = entry.path().strip_prefix(&self.root).unwrap_or(entry.path());
                        sources.push(relative.to_string_lossy().replace('\\', "/"));
                    }
                }
                Err(_) => errors += 1,
            }
        }
        if errors > 0 {
            tracing::warn!(errors, root = %self.root.display(), "Skipped unreadable workspace entries");
        }

        sources.sort();
        sources
    }
}

fn should_prune(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    name.starts_with('.') || name == "target"
}

/// `com.acme.Foo$Bar` -> `com/acme/Foo.java`
fn source_suffix(class_name: &str) -> Option<String> {
    let outer = class_name.split('$').next().unwrap_or(class_name).trim();
    if outer.is_empty() {
        return None;
    }
    Some(format!("{}.java", outer.replace('.', "/")))
}

fn find_source<'a>(sources: &'a [String], suffix: &str) -> Option<&'a str> {
    sources
        .iter()
        .find(|path| {
            path.as_str() == suffix
                || path
                    .strip_suffix(suffix)
                    .is_some_and(|prefix| prefix.ends_with('/'))
        })
        .map(String::as_str)
}

impl WorkspaceResolver for SourceTreeResolver {
    fn resolve(&self, project: &mut Project) -> Result<()> {
        if !self.root.is_dir() {
            anyhow::bail!(
                "Workspace {} does not exist or is not a directory",
                self.root.display()
            );
        }

        let sources = self.index_sources();
        tracing::debug!(root = %self.root.display(), files = sources.len(), "Indexed Java sources");

        let mut resolved: HashMap<String, Option<String>> = HashMap::new();
        let mut unresolved = 0usize;
        for warning in project.warnings_mut() {
            let Some(class_name) = warning.class_name().map(str::to_string) else {
                continue;
            };
            let file = resolved
                .entry(class_name)
                .or_insert_with_key(|class_name| {
                    source_suffix(class_name)
                        .and_then(|suffix| find_source(&sources, &suffix).map(str::to_string))
                })
                .clone();
            if file.is_none() {
                unresolved += 1;
            }
            warning.set_file(file);
        }

        if unresolved > 0 {
            tracing::info!(unresolved, "Warnings without a matching source file");
        }
        Ok(())
    }
}
