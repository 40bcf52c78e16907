use super::{Module, Warning};

/// Aggregate of all modules found in one results directory, in discovery order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Project {
    modules: Vec<Module>,
}

impl Project {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_module(&mut self, module: Module) {
        self.modules.push(module);
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.iter().find(|module| module.name() == name)
    }

    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Flattened view of every warning across all modules
    pub fn warnings(&self) -> impl Iterator<Item = &Warning> {
        self.modules.iter().flat_map(|module| module.all_warnings())
    }

    pub fn warnings_mut(&mut self) -> impl Iterator<Item = &mut Warning> {
        self.modules
            .iter_mut()
            .flat_map(|module| module.all_warnings_mut())
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }
}
