use super::{JavaClass, Warning};

/// Name given to the module substituted for reports without FindBugs content
pub const UNKNOWN_FORMAT_NAME: &str = "Unknown file format";

/// Module entity: the parsed content of a single FindBugs report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Module {
    name: String,
    wrapped_schema: bool,
    version: Option<String>,
    threshold: Option<String>,
    effort: Option<String>,
    classes: Vec<JavaClass>,
    warnings: Vec<Warning>,
}

impl Module {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sentinel module returned when a report holds no FindBugs content
    pub fn placeholder() -> Self {
        Self::new(UNKNOWN_FORMAT_NAME)
    }

    pub fn is_placeholder(&self) -> bool {
        self.name == UNKNOWN_FORMAT_NAME && self.classes.is_empty() && self.warnings.is_empty()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Whether this module came from a Maven FindBugs plug-in report
    pub fn is_wrapped_schema(&self) -> bool {
        self.wrapped_schema
    }

    pub fn set_wrapped_schema(&mut self, wrapped: bool) {
        self.wrapped_schema = wrapped;
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn set_version(&mut self, version: Option<String>) {
        self.version = version;
    }

    pub fn threshold(&self) -> Option<&str> {
        self.threshold.as_deref()
    }

    pub fn set_threshold(&mut self, threshold: Option<String>) {
        self.threshold = threshold;
    }

    pub fn effort(&self) -> Option<&str> {
        self.effort.as_deref()
    }

    pub fn set_effort(&mut self, effort: Option<String>) {
        self.effort = effort;
    }

    pub fn classes(&self) -> &[JavaClass] {
        &self.classes
    }

    /// Warnings attached directly to the module (bug instances without a class)
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    pub fn add_class(&mut self, class: JavaClass) {
        self.classes.push(class);
    }

    pub fn add_warning(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    /// Returns the class with the given name, appending a new one if needed
    pub fn class_entry(&mut self, class_name: &str) -> &mut JavaClass {
        let index = match self
            .classes
            .iter()
            .position(|class| class.class_name() == class_name)
        {
            Some(index) => index,
            None => {
                self.classes.push(JavaClass::new(class_name));
                self.classes.len() - 1
            }
        };
        &mut self.classes[index]
    }

    /// All warnings of the module: module-level ones first, then per class
    pub fn all_warnings(&self) -> impl Iterator<Item = &Warning> {
        self.warnings
            .iter()
            .chain(self.classes.iter().flat_map(|class| class.warnings().iter()))
    }

    pub fn all_warnings_mut(&mut self) -> impl Iterator<Item = &mut Warning> {
        self.warnings
            .iter_mut()
            .chain(self.classes.iter_mut().flat_map(|class| class.warnings_mut()))
    }

    pub fn warning_count(&self) -> usize {
        self.all_warnings().count()
    }

    /// True when the module has neither classes nor warnings
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.warnings.is_empty()
    }
}
