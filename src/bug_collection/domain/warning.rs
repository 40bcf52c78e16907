/// Warning entity representing one FindBugs bug instance
///
/// A warning starts without a source file; the file is filled in later by
/// the workspace resolver or by restoring a persisted mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Warning {
    bug_type: String,
    category: String,
    priority: String,
    message: String,
    line: Option<u32>,
    class_name: Option<String>,
    file: Option<String>,
}

impl Warning {
    pub fn new(bug_type: impl Into<String>) -> Self {
        Self {
            bug_type: bug_type.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn bug_type(&self) -> &str {
        &self.bug_type
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Raw priority as written in the report (`1`..`3` or `High`/`Normal`/`Low`)
    pub fn priority(&self) -> &str {
        &self.priority
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn line(&self) -> Option<u32> {
        self.line
    }

    pub fn class_name(&self) -> Option<&str> {
        self.class_name.as_deref()
    }

    pub fn file(&self) -> Option<&str> {
        self.file.as_deref()
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }

    pub fn set_line(&mut self, line: Option<u32>) {
        self.line = line;
    }

    pub fn set_file(&mut self, file: Option<String>) {
        self.file = file;
    }

    /// Records the owning class so the warning can report it without a
    /// second traversal of the module.
    pub fn link_class(&mut self, class_name: &str) {
        self.class_name = Some(class_name.to_string());
    }

    /// Key used in the persisted warning-to-file mapping.
    ///
    /// Derived only from the class name, the bug type and the line anchor,
    /// so re-parsing the same report yields the same key. Two warnings that
    /// agree on all three share a key.
    pub fn qualified_name(&self) -> String {
        format!(
            "{}:{}:{}",
            self.class_name.as_deref().unwrap_or_default(),
            self.bug_type,
            self.line.map(|line| line.to_string()).unwrap_or_default()
        )
    }
}
