use super::xml_walker::{path_matches, walk, Attributes, Flow, XmlNode};
use crate::bug_collection::domain::{JavaClass, Module, SourceLine, Warning};
use crate::shared::Result;
use std::io::{BufReader, Read};

/// Where a class goes once its element closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClassTarget {
    /// Native format: the class is linked into the enclosing bug instance
    Warning,
    /// Maven format: the class is appended to the module
    Module,
}

/// Where a warning goes once its element closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WarningTarget {
    /// Native format: filed under the module class named by its linked class
    LinkedClass,
    /// Maven format: appended to the enclosing `file` class
    EnclosingClass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    CreateModule,
    CreateWarning(WarningTarget),
    WarningMessage,
    WarningLine,
    CreateClass(ClassTarget),
    ClassSourceLine,
}

/// Path pattern and the construction step triggered at that path
struct Rule {
    path: &'static [&'static str],
    action: Action,
}

const NATIVE_RULES: &[Rule] = &[
    Rule {
        path: &["BugCollection"],
        action: Action::CreateModule,
    },
    Rule {
        path: &["BugCollection", "BugInstance"],
        action: Action::CreateWarning(WarningTarget::LinkedClass),
    },
    Rule {
        path: &["BugCollection", "BugInstance", "LongMessage"],
        action: Action::WarningMessage,
    },
    Rule {
        path: &["BugCollection", "BugInstance", "SourceLine"],
        action: Action::WarningLine,
    },
    Rule {
        path: &["BugCollection", "BugInstance", "Class"],
        action: Action::CreateClass(ClassTarget::Warning),
    },
    Rule {
        path: &["BugCollection", "BugInstance", "Class", "SourceLine"],
        action: Action::ClassSourceLine,
    },
];

const WRAPPED_RULES: &[Rule] = &[
    Rule {
        path: &["BugCollection"],
        action: Action::CreateModule,
    },
    Rule {
        path: &["BugCollection", "file"],
        action: Action::CreateClass(ClassTarget::Module),
    },
    Rule {
        path: &["BugCollection", "file", "BugInstance"],
        action: Action::CreateWarning(WarningTarget::EnclosingClass),
    },
];

/// ReportParser service turning a FindBugs report into a [`Module`]
///
/// Both report formats are described as rule tables (element path →
/// construction action) and run through the same evaluator. The parser never
/// returns an absent module: reports without FindBugs content become
/// [`Module::placeholder`].
pub struct ReportParser;

impl ReportParser {
    /// Parses a report whose format was already classified
    ///
    /// # Arguments
    /// * `reader` - A fresh stream positioned at the start of the report
    /// * `wrapped` - `true` for the Maven plug-in format, `false` for native
    /// * `source_name` - Name used in error messages
    ///
    /// # Errors
    /// - `ReportError::MalformedReport` for invalid markup
    /// - `ReportError::ReportUnavailable` if the stream cannot be read
    pub fn parse<R: Read>(reader: R, wrapped: bool, source_name: &str) -> Result<Module> {
        let rules = if wrapped { WRAPPED_RULES } else { NATIVE_RULES };
        let mut builder = ModuleBuilder::default();
        // Action opened at each depth, so closing tags know what to finish
        let mut opened: Vec<Option<Action>> = Vec::new();

        walk(BufReader::new(reader), source_name, |node| {
            match node {
                XmlNode::Open { path, attributes } => {
                    let action = rules
                        .iter()
                        .find(|rule| path_matches(path, rule.path))
                        .map(|rule| rule.action);
                    if let Some(action) = action {
                        builder.open(action, &attributes);
                    }
                    opened.push(action);
                }
                XmlNode::Text { text } => {
                    if let Some(Some(Action::WarningMessage)) = opened.last() {
                        builder.append_message(&text);
                    }
                }
                XmlNode::Close => {
                    if let Some(Some(action)) = opened.pop() {
                        builder.close(action);
                    }
                }
            }
            Ok(Flow::Continue)
        })?;

        let mut module = builder.finish();
        if module.is_placeholder() {
            tracing::warn!(source = source_name, "Report has no FindBugs content");
        }
        module.set_wrapped_schema(wrapped);
        Ok(module)
    }
}

/// A bug instance under construction together with its linked class
struct PendingWarning {
    warning: Warning,
    class: Option<JavaClass>,
    long_message: Option<String>,
}

#[derive(Default)]
struct ModuleBuilder {
    module: Option<Module>,
    warning: Option<PendingWarning>,
    class: Option<JavaClass>,
    has_content: bool,
}

impl ModuleBuilder {
    fn open(&mut self, action: Action, attributes: &Attributes) {
        match action {
            Action::CreateModule => {
                let mut module = Module::new("");
                module.set_version(attributes.get_owned("version"));
                module.set_threshold(attributes.get_owned("threshold"));
                module.set_effort(attributes.get_owned("effort"));
                self.module = Some(module);
            }
            Action::CreateWarning(_) => {
                self.has_content = true;
                let mut warning = Warning::new(attributes.get("type").unwrap_or_default())
                    .with_category(attributes.get("category").unwrap_or_default())
                    .with_priority(attributes.get("priority").unwrap_or_default())
                    .with_message(attributes.get("message").unwrap_or_default());
                warning.set_line(attributes.get_u32("lineNumber"));
                self.warning = Some(PendingWarning {
                    warning,
                    class: None,
                    long_message: None,
                });
            }
            Action::WarningMessage => {
                if let Some(pending) = self.warning.as_mut() {
                    pending.long_message = Some(String::new());
                }
            }
            Action::WarningLine => {
                if let Some(pending) = self.warning.as_mut() {
                    if pending.warning.line().is_none() {
                        pending.warning.set_line(attributes.get_u32("start"));
                    }
                }
            }
            Action::CreateClass(_) => {
                self.has_content = true;
                self.class = Some(JavaClass::new(
                    attributes.get("classname").unwrap_or_default(),
                ));
            }
            Action::ClassSourceLine => {
                if let Some(class) = self.class.as_mut() {
                    class.add_source_line(SourceLine {
                        start: attributes.get_u32("start"),
                        end: attributes.get_u32("end"),
                        role: attributes.get_owned("role"),
                        source_file: attributes.get_owned("sourcefile"),
                        source_path: attributes.get_owned("sourcepath"),
                    });
                }
            }
        }
    }

    fn append_message(&mut self, text: &str) {
        if let Some(message) = self
            .warning
            .as_mut()
            .and_then(|pending| pending.long_message.as_mut())
        {
            message.push_str(text);
        }
    }

    fn close(&mut self, action: Action) {
        match action {
            Action::CreateModule | Action::WarningLine | Action::ClassSourceLine => {}
            Action::WarningMessage => {
                if let Some(pending) = self.warning.as_mut() {
                    if let Some(message) = pending.long_message.take() {
                        let message = message.trim();
                        if !message.is_empty() {
                            pending.warning.set_message(message);
                        }
                    }
                }
            }
            Action::CreateClass(ClassTarget::Warning) => {
                if let (Some(class), Some(pending)) = (self.class.take(), self.warning.as_mut()) {
                    // The first class of a bug instance is its primary class
                    if pending.class.is_none() {
                        pending.warning.link_class(class.class_name());
                        pending.class = Some(class);
                    }
                }
            }
            Action::CreateClass(ClassTarget::Module) => {
                if let (Some(class), Some(module)) = (self.class.take(), self.module.as_mut()) {
                    module.add_class(class);
                }
            }
            Action::CreateWarning(target) => {
                if let Some(pending) = self.warning.take() {
                    self.attach_warning(pending, target);
                }
            }
        }
    }

    fn attach_warning(&mut self, pending: PendingWarning, target: WarningTarget) {
        let PendingWarning {
            mut warning, class, ..
        } = pending;
        let Some(module) = self.module.as_mut() else {
            return;
        };

        match (target, class) {
            (WarningTarget::LinkedClass, Some(mut class)) => {
                if warning.line().is_none() {
                    warning.set_line(class.first_line());
                }
                let entry = module.class_entry(class.class_name());
                entry.merge_source_lines(class.take_source_lines());
                entry.add_warning(warning);
            }
            (WarningTarget::LinkedClass, None) => module.add_warning(warning),
            (WarningTarget::EnclosingClass, _) => match self.class.as_mut() {
                Some(class) => class.add_warning(warning),
                None => module.add_warning(warning),
            },
        }
    }

    fn finish(self) -> Module {
        match self.module {
            Some(module) if self.has_content => module,
            _ => Module::placeholder(),
        }
    }
}
