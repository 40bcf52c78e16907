use super::{SourceLine, Warning};

/// Source-file level grouping inside a module
///
/// In native reports this is the `Class` element of a bug instance; in
/// Maven plug-in reports it is the `file` element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JavaClass {
    class_name: String,
    source_lines: Vec<SourceLine>,
    warnings: Vec<Warning>,
}

impl JavaClass {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            source_lines: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    pub fn source_lines(&self) -> &[SourceLine] {
        &self.source_lines
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn warnings_mut(&mut self) -> std::slice::IterMut<'_, Warning> {
        self.warnings.iter_mut()
    }

    pub fn add_source_line(&mut self, source_line: SourceLine) {
        self.source_lines.push(source_line);
    }

    /// Adds the warning and links it back to this class
    pub fn add_warning(&mut self, mut warning: Warning) {
        warning.link_class(&self.class_name);
        self.warnings.push(warning);
    }

    /// First line number annotated on the class, if any
    pub fn first_line(&self) -> Option<u32> {
        self.source_lines.iter().find_map(|line| line.start)
    }

    /// Source file name as reported by FindBugs (e.g. `Parser.java`)
    pub fn source_file(&self) -> Option<&str> {
        self.source_lines
            .iter()
            .find_map(|line| line.source_file.as_deref())
    }

    /// Moves source lines from `other` that this class does not have yet
    pub fn merge_source_lines(&mut self, other: Vec<SourceLine>) {
        for line in other {
            if !self.source_lines.contains(&line) {
                self.source_lines.push(line);
            }
        }
    }

    pub(crate) fn take_source_lines(&mut self) -> Vec<SourceLine> {
        std::mem::take(&mut self.source_lines)
    }
}
