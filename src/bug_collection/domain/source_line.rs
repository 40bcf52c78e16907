/// Line-range annotation attached to a class
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceLine {
    pub start: Option<u32>,
    pub end: Option<u32>,
    pub role: Option<String>,
    pub source_file: Option<String>,
    pub source_path: Option<String>,
}

impl SourceLine {
    pub fn new(start: Option<u32>, end: Option<u32>) -> Self {
        Self {
            start,
            end,
            ..Self::default()
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }
}
