use crate::application::read_models::ProjectSummary;
use crate::ports::outbound::ProjectFormatter;
use crate::shared::Result;

/// JsonFormatter adapter rendering the summary as pretty-printed JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectFormatter for JsonFormatter {
    fn format(&self, summary: &ProjectSummary) -> Result<String> {
        let mut json = serde_json::to_string_pretty(summary)
            .map_err(|e| anyhow::anyhow!("Failed to serialize summary to JSON: {}", e))?;
        json.push('\n');
        Ok(json)
    }
}
